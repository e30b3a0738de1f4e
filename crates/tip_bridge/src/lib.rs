//! tip bridge: wire codec and transport between the client and the backend.
mod backend;
mod command;
mod error;
mod pump;
mod wire;

pub use backend::BackendHandle;
pub use command::{Command, CommandPort};
pub use error::{BridgeError, WireError};
pub use pump::{pump, ChannelEventSink, EventSink, PumpStats};
pub use wire::{decode_event, decode_frame};
