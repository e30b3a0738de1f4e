//! tip core: pure job-list state machine and view-model helpers.
mod effect;
mod frame;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use frame::{Color, ColoredTriangle, Frame, Point, Triangle};
pub use msg::Msg;
pub use state::{AppState, Job, JobId, JobState, Transition};
pub use update::update;
pub use view_model::{format_elapsed, AppViewModel, JobRowView};
