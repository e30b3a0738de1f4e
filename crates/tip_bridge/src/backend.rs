use std::process::Stdio;
use std::sync::Arc;
use std::thread;

use tip_logging::{tip_error, tip_info, tip_warn};
use tokio::io::BufReader;
use tokio::sync::mpsc;

use crate::pump::{pump, EventSink};
use crate::{BridgeError, Command, CommandPort};

/// A running backend process speaking the line protocol over its stdio.
///
/// Events go to the sink from a dedicated thread; commands are queued and
/// written by the same task, so neither side blocks the caller.
pub struct BackendHandle {
    cmd_tx: mpsc::UnboundedSender<Command>,
}

impl BackendHandle {
    pub fn spawn(
        program: &str,
        args: &[String],
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, BridgeError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(BridgeError::Runtime)?;

        let mut child = {
            let _guard = runtime.enter();
            tokio::process::Command::new(program)
                .args(args)
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .kill_on_drop(true)
                .spawn()
                .map_err(|source| BridgeError::Spawn {
                    program: program.to_string(),
                    source,
                })?
        };
        let stdout = child.stdout.take().ok_or(BridgeError::MissingStdio)?;
        let stdin = child.stdin.take().ok_or(BridgeError::MissingStdio)?;
        tip_info!("Started backend `{}` (pid {:?})", program, child.id());

        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        thread::spawn(move || {
            runtime.block_on(async move {
                match pump(BufReader::new(stdout), stdin, cmd_rx, sink.as_ref()).await {
                    Ok(stats) => tip_info!(
                        "Backend closed: {} events, {} dropped lines, {} commands",
                        stats.events,
                        stats.dropped,
                        stats.commands
                    ),
                    Err(err) => tip_error!("Backend connection failed: {}", err),
                }
                sink.disconnected();
                match child.wait().await {
                    Ok(status) => tip_info!("Backend exited with {}", status),
                    Err(err) => tip_warn!("Could not reap backend: {}", err),
                }
            });
        });

        Ok(Self { cmd_tx })
    }
}

impl CommandPort for BackendHandle {
    fn send(&self, command: Command) {
        if self.cmd_tx.send(command).is_err() {
            tip_warn!("Backend is gone; command dropped");
        }
    }
}
