mod platform;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tip", about = "Live progress and preview for a triangulation backend")]
struct Args {
    /// Configuration file (RON)
    #[arg(long, default_value = platform::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Write the preview to this PNG after every frame
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Backend command line, e.g. `-- tip-backend --stdio`
    #[arg(last = true, required = true)]
    backend: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    platform::run_app(platform::LaunchOptions {
        config_path: args.config,
        snapshot_path: args.snapshot,
        backend: args.backend,
    })
}
