use tip_logging::tip_debug;

use crate::state::Transition;
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// Never fails. Backend events for unknown ids and illegal transitions leave
/// the state untouched, since the backend may race a removal with in-flight
/// events. User interactions are forwarded as effects without local checks.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Created {
            job_id,
            display_name,
        } => {
            state.create_job(job_id, display_name);
            Vec::new()
        }
        Msg::Working { job_id } => {
            state.apply(&job_id, Transition::Working);
            Vec::new()
        }
        Msg::Done { job_id } => {
            state.apply(&job_id, Transition::Done);
            Vec::new()
        }
        Msg::Error { job_id } => {
            state.apply(&job_id, Transition::Error);
            Vec::new()
        }
        Msg::Tick { job_id, seconds } => {
            state.apply(&job_id, Transition::Tick(seconds));
            Vec::new()
        }
        Msg::Removed { job_id } => {
            if !state.remove_job(&job_id) {
                tip_debug!("Remove for absent job {} ignored", job_id);
            }
            Vec::new()
        }
        Msg::FrameReceived(frame) => vec![Effect::PaintFrame(frame)],
        Msg::BatchStarted => {
            state.set_running(true);
            Vec::new()
        }
        Msg::BatchStopped => {
            state.set_running(false);
            Vec::new()
        }
        Msg::SelectFileClicked => vec![Effect::SelectFile],
        Msg::SelectFolderClicked => vec![Effect::SelectFolder],
        Msg::StartClicked {
            points,
            max_time_seconds,
            max_size_bytes,
        } => vec![Effect::StartBatch {
            points,
            max_time_seconds,
            max_size_bytes,
        }],
        // The row stays until the backend confirms with a `remove` event.
        // A tracked id is sent in the form the backend issued it.
        Msg::RemoveClicked { job_id } => {
            let job_id = state.job(&job_id).map_or(job_id, |job| job.id.clone());
            vec![Effect::RemoveJob { job_id }]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
