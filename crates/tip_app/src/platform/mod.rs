mod app;
mod config;
mod controller;
mod effects;
mod logging;
mod ui;

pub use app::{run_app, LaunchOptions};
pub use config::DEFAULT_CONFIG_FILE;
