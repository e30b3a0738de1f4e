use thiserror::Error;

/// A backend line that could not be turned into a message.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown event `{0}`")]
    UnknownEvent(String),
    #[error("event `{event}` is missing argument {index}")]
    MissingArg { event: String, index: usize },
    #[error("event `{event}` argument {index} is not {expected}")]
    InvalidArg {
        event: String,
        index: usize,
        expected: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("failed to start backend `{program}`: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("backend stdio unavailable")]
    MissingStdio,
    #[error("failed to build bridge runtime: {0}")]
    Runtime(std::io::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
