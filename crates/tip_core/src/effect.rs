use crate::{Frame, JobId};

/// Work the platform layer performs on behalf of `update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SelectFile,
    SelectFolder,
    StartBatch {
        points: u32,
        max_time_seconds: u32,
        max_size_bytes: u32,
    },
    RemoveJob { job_id: JobId },
    PaintFrame(Frame),
}

