use std::path::PathBuf;

use tip_bridge::{Command, CommandPort};
use tip_core::Effect;
use tip_logging::{tip_debug, tip_info, tip_warn};
use tip_render::RenderSurface;

/// Carries out effects: commands go to the backend, frames to the surface.
pub struct EffectRunner<P: CommandPort> {
    port: P,
    surface: RenderSurface,
    snapshot_path: Option<PathBuf>,
}

impl<P: CommandPort> EffectRunner<P> {
    pub fn new(port: P, surface: RenderSurface, snapshot_path: Option<PathBuf>) -> Self {
        Self {
            port,
            surface,
            snapshot_path,
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SelectFile => self.send(Command::SelectFile),
                Effect::SelectFolder => self.send(Command::SelectFolder),
                Effect::StartBatch {
                    points,
                    max_time_seconds,
                    max_size_bytes,
                } => {
                    tip_info!(
                        "StartBatch points={} max_time={}s max_size={}",
                        points,
                        max_time_seconds,
                        max_size_bytes
                    );
                    self.send(Command::Start {
                        points,
                        max_time_seconds,
                        max_size_bytes,
                    });
                }
                Effect::RemoveJob { job_id } => self.send(Command::Remove { job_id }),
                Effect::PaintFrame(frame) => {
                    self.surface.paint(frame);
                    self.write_snapshot();
                }
            }
        }
    }

    pub fn surface(&self) -> &RenderSurface {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut RenderSurface {
        &mut self.surface
    }

    #[cfg(test)]
    pub fn port(&self) -> &P {
        &self.port
    }

    fn send(&self, command: Command) {
        tip_debug!("Command {}", command.method());
        self.port.send(command);
    }

    fn write_snapshot(&self) {
        let Some(path) = &self.snapshot_path else {
            return;
        };
        if let Err(err) = self.surface.save_png(path) {
            tip_warn!("{}", err);
        }
    }
}
