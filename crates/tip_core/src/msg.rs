use crate::{Frame, JobId};

/// Every input the client reacts to: backend events and user interactions.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Backend queued a new input (`newPath`).
    Created { job_id: JobId, display_name: String },
    /// Backend started processing a job.
    Working { job_id: JobId },
    /// Backend finished a job and wrote its output.
    Done { job_id: JobId },
    /// Backend failed a job.
    Error { job_id: JobId },
    /// Absolute elapsed processing time for a job.
    Tick { job_id: JobId, seconds: u64 },
    /// Backend dropped a job from its queue.
    Removed { job_id: JobId },
    /// Live preview of the current best triangulation.
    FrameReceived(Frame),
    /// Backend began working through its queue.
    BatchStarted,
    /// Backend left its queue loop.
    BatchStopped,
    /// User asked to pick a single image.
    SelectFileClicked,
    /// User asked to pick a folder of images.
    SelectFolderClicked,
    /// User clicked Start (or Stop while a batch runs).
    StartClicked {
        points: u32,
        max_time_seconds: u32,
        max_size_bytes: u32,
    },
    /// User clicked the remove control on a row.
    RemoveClicked { job_id: JobId },
    /// Fallback for unmapped input.
    NoOp,
}
