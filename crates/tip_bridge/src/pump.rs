use std::sync::mpsc;

use tip_core::Msg;
use tip_logging::{tip_debug, tip_trace, tip_warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::wire::decode_event;
use crate::{BridgeError, Command};

/// Receives decoded backend events, in the order the backend emitted them.
pub trait EventSink: Send + Sync {
    fn emit(&self, msg: Msg);

    /// Called once when the backend connection ends, cleanly or not.
    fn disconnected(&self) {}
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<Msg>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<Msg>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, msg: Msg) {
        let _ = self.tx.send(msg);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PumpStats {
    pub events: usize,
    pub dropped: usize,
    pub commands: usize,
}

/// Moves backend lines to `sink` and queued commands to `writer` until the
/// backend closes its output.
///
/// Undecodable lines are logged and dropped. A failed write stops outbound
/// traffic but keeps the event side running.
pub async fn pump<R, W>(
    reader: R,
    mut writer: W,
    mut commands: UnboundedReceiver<Command>,
    sink: &dyn EventSink,
) -> Result<PumpStats, BridgeError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut stats = PumpStats::default();
    let mut writable = true;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match decode_event(line) {
                    Ok(msg) => {
                        tip_trace!("Backend event: {:?}", msg);
                        stats.events += 1;
                        sink.emit(msg);
                    }
                    Err(err) => {
                        tip_warn!("Dropping backend line: {}", err);
                        stats.dropped += 1;
                    }
                }
            }
            command = commands.recv(), if writable => {
                let Some(command) = command else {
                    tip_debug!("Command channel closed");
                    writable = false;
                    continue;
                };
                let mut line = command.to_line();
                line.push('\n');
                let written = async {
                    writer.write_all(line.as_bytes()).await?;
                    writer.flush().await
                }
                .await;
                match written {
                    Ok(()) => {
                        tip_debug!("Sent {}", command.method());
                        stats.commands += 1;
                    }
                    Err(err) => {
                        tip_warn!("Backend input closed, dropping {}: {}", command.method(), err);
                        writable = false;
                    }
                }
            }
        }
    }

    Ok(stats)
}
