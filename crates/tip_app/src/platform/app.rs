use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use tip_bridge::{BackendHandle, EventSink};
use tip_core::{AppViewModel, Msg};
use tip_logging::{tip_info, tip_warn};
use tip_render::RenderSurface;

use super::config::{load_config, StartDefaults};
use super::controller::Controller;
use super::effects::EffectRunner;
use super::logging;
use super::ui::input::{parse_input, AppInput, HELP};
use super::ui::render::render;

pub struct LaunchOptions {
    pub config_path: PathBuf,
    pub snapshot_path: Option<PathBuf>,
    pub backend: Vec<String>,
}

pub fn run_app(options: LaunchOptions) -> anyhow::Result<()> {
    let loaded = load_config(&options.config_path);
    let mut config = loaded.as_ref().cloned().unwrap_or_default();
    if options.snapshot_path.is_some() {
        config.snapshot_path = options.snapshot_path;
    }
    logging::initialize(config.log_destination, config.log_level);
    if let Err(err) = &loaded {
        tip_warn!("Using default configuration: {}", err);
    }

    let mut surface = RenderSurface::new(config.container_width, config.container_height)
        .context("creating preview surface")?;
    surface
        .configure_density(config.device_pixel_ratio)
        .context("applying device pixel ratio")?;

    let (program, args) = options
        .backend
        .split_first()
        .context("no backend command given")?;
    let (input_tx, input_rx) = mpsc::channel::<AppInput>();
    let backend = BackendHandle::spawn(program, args, Arc::new(AppSink::new(input_tx.clone())))
        .with_context(|| format!("starting backend `{program}`"))?;
    spawn_terminal_input(input_tx, config.start_defaults());

    let mut controller = Controller::new(EffectRunner::new(
        backend,
        surface,
        config.snapshot_path.clone(),
    ));
    print_view(&controller.view());

    while let Ok(input) = input_rx.recv() {
        match input {
            AppInput::Msg(msg) => {
                if let Some(view) = controller.dispatch(msg) {
                    print_view(&view);
                }
            }
            AppInput::Resize { width, height } => controller.resize(width, height),
            AppInput::Density(ratio) => controller.configure_density(ratio),
            AppInput::Help => println!("{HELP}"),
            AppInput::Quit => break,
            AppInput::BackendClosed => {
                tip_info!("Backend closed the connection; exiting");
                break;
            }
        }
    }
    Ok(())
}

fn print_view(view: &AppViewModel) {
    let mut stdout = io::stdout().lock();
    for line in render(view) {
        let _ = writeln!(stdout, "{line}");
    }
    let _ = stdout.flush();
}

fn spawn_terminal_input(tx: mpsc::Sender<AppInput>, defaults: StartDefaults) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    tip_warn!("Terminal input failed: {}", err);
                    break;
                }
            };
            match parse_input(&line, defaults) {
                Ok(Some(input)) => {
                    if tx.send(input).is_err() {
                        return;
                    }
                }
                Ok(None) => {}
                Err(err) => eprintln!("{err}"),
            }
        }
        // End of input quits like `quit` does.
        let _ = tx.send(AppInput::Quit);
    });
}

/// Feeds backend events into the controller queue.
struct AppSink {
    tx: mpsc::Sender<AppInput>,
}

impl AppSink {
    fn new(tx: mpsc::Sender<AppInput>) -> Self {
        Self { tx }
    }
}

impl EventSink for AppSink {
    fn emit(&self, msg: Msg) {
        let _ = self.tx.send(AppInput::Msg(msg));
    }

    fn disconnected(&self) {
        let _ = self.tx.send(AppInput::BackendClosed);
    }
}
