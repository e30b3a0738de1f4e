use serde_json::{json, Value};
use tip_core::JobId;

/// Calls the client makes on the backend. Fire-and-forget: any consequence
/// comes back later as an ordinary event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SelectFile,
    SelectFolder,
    Start {
        points: u32,
        max_time_seconds: u32,
        max_size_bytes: u32,
    },
    Remove { job_id: JobId },
}

impl Command {
    /// Name of the bound backend method.
    pub fn method(&self) -> &'static str {
        match self {
            Command::SelectFile => "FilePressed",
            Command::SelectFolder => "FolderPressed",
            Command::Start { .. } => "StartPressed",
            Command::Remove { .. } => "RemoveItem",
        }
    }

    /// One line of the outbound protocol, without the trailing newline.
    pub fn to_line(&self) -> String {
        let args = match self {
            Command::SelectFile | Command::SelectFolder => Vec::new(),
            Command::Start {
                points,
                max_time_seconds,
                max_size_bytes,
            } => vec![
                json!(points),
                json!(max_time_seconds),
                json!(max_size_bytes),
            ],
            Command::Remove { job_id } => vec![id_value(job_id)],
        };
        json!({ "call": self.method(), "args": args }).to_string()
    }
}

/// Ids go back in the form the backend issued them.
fn id_value(job_id: &JobId) -> Value {
    match job_id.as_number() {
        Some(n) => json!(n),
        None => json!(job_id.as_str()),
    }
}

/// Outbound command channel to the backend.
pub trait CommandPort {
    fn send(&self, command: Command);
}
