use tip_bridge::CommandPort;
use tip_core::{update, AppState, AppViewModel, Msg};
use tip_logging::{tip_info, tip_warn};

use super::effects::EffectRunner;

/// Single consumer of all inputs. Each message runs to completion before the
/// next, so the state needs no locking.
pub struct Controller<P: CommandPort> {
    state: AppState,
    effects: EffectRunner<P>,
    seq: u64,
}

impl<P: CommandPort> Controller<P> {
    pub fn new(effects: EffectRunner<P>) -> Self {
        Self {
            state: AppState::new(),
            effects,
            seq: 0,
        }
    }

    /// Applies one message. Returns the new view when the job list changed.
    pub fn dispatch(&mut self, msg: Msg) -> Option<AppViewModel> {
        self.seq += 1;
        tip_logging::set_msg_seq(self.seq);

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.effects.run(effects);

        let view = state.consume_dirty().then(|| state.view());
        self.state = state;
        view
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        let surface = self.effects.surface_mut();
        match surface.resize(width, height) {
            Ok(()) => tip_info!("Preview area now {:?}", surface.logical_size()),
            Err(err) => tip_warn!("Resize rejected: {}", err),
        }
        self.repaint();
    }

    pub fn configure_density(&mut self, ratio: f64) {
        let surface = self.effects.surface_mut();
        match surface.configure_density(ratio) {
            Ok(()) => tip_info!(
                "Device pixel ratio {} (backing {:?})",
                surface.density(),
                surface.backing_size()
            ),
            Err(err) => tip_warn!("Density change rejected: {}", err),
        }
        self.repaint();
    }

    /// Reconfiguring reallocates the buffer, so the current frame is painted again.
    fn repaint(&mut self) {
        if let Some(frame) = self.effects.surface().frame().cloned() {
            self.effects.run(vec![tip_core::Effect::PaintFrame(frame)]);
        }
    }

    #[cfg(test)]
    pub fn effects(&self) -> &EffectRunner<P> {
        &self.effects
    }
}
