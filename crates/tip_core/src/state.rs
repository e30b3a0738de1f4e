use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use tip_logging::tip_debug;

use crate::view_model::{format_elapsed, AppViewModel, JobRowView};

/// Opaque backend-assigned job identifier.
///
/// Identity is the string alone. Whether the backend sent the id as a JSON
/// number is remembered so it can be echoed back in the same form.
#[derive(Debug, Clone)]
pub struct JobId {
    id: String,
    numeric: bool,
}

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            numeric: false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// The id as the backend issued it, if it arrived as a number.
    pub fn as_number(&self) -> Option<u64> {
        if self.numeric {
            self.id.parse().ok()
        } else {
            None
        }
    }
}

impl PartialEq for JobId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for JobId {}

impl Hash for JobId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for JobId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JobId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.id)
    }
}

impl From<&str> for JobId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<u64> for JobId {
    fn from(value: u64) -> Self {
        Self {
            id: value.to_string(),
            numeric: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobState {
    #[default]
    Pending,
    Working,
    Done,
    Error,
}

impl JobState {
    /// Done and Error are never left except by removal.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobState::Done | JobState::Error)
    }

    /// The transition table. `None` marks an illegal transition.
    pub fn next(self, transition: Transition) -> Option<JobState> {
        match (self, transition) {
            (JobState::Pending, Transition::Working) => Some(JobState::Working),
            (JobState::Working, Transition::Tick(_)) => Some(JobState::Working),
            (JobState::Working, Transition::Done) => Some(JobState::Done),
            (JobState::Pending | JobState::Working, Transition::Error) => Some(JobState::Error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: JobId,
    pub display_name: String,
    pub state: JobState,
    pub elapsed_seconds: u64,
}

/// Lifecycle events the job list understands. Kept separate from `Msg` so the
/// transition table can be folded without any UI or render input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Working,
    Done,
    Error,
    Tick(u64),
}

/// Authoritative client state: the job list plus batch status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    jobs: Vec<Job>,
    running: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let jobs: Vec<JobRowView> = self
            .jobs
            .iter()
            .map(|job| JobRowView {
                job_id: job.id.clone(),
                display_name: job.display_name.clone(),
                state: job.state,
                elapsed_label: format_elapsed(job.elapsed_seconds),
            })
            .collect();
        AppViewModel {
            job_count: jobs.len(),
            show_help: jobs.is_empty(),
            start_label: if self.running { "Stop" } else { "Start" },
            running: self.running,
            jobs,
        }
    }

    /// Jobs in creation order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn job(&self, job_id: &JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| &job.id == job_id)
    }

    pub fn running(&self) -> bool {
        self.running
    }

    /// Returns whether the state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Inserts a Pending job. Returns false if the id is already tracked.
    pub(crate) fn create_job(&mut self, job_id: JobId, display_name: String) -> bool {
        if self.job(&job_id).is_some() {
            tip_debug!("Ignoring duplicate create for job {}", job_id);
            return false;
        }
        self.jobs.push(Job {
            id: job_id,
            display_name,
            state: JobState::Pending,
            elapsed_seconds: 0,
        });
        self.dirty = true;
        true
    }

    /// Applies a lifecycle transition. Unknown ids and illegal transitions are
    /// ignored; returns whether anything changed.
    pub(crate) fn apply(&mut self, job_id: &JobId, transition: Transition) -> bool {
        let Some(job) = self.jobs.iter_mut().find(|job| &job.id == job_id) else {
            tip_debug!("Ignoring {:?} for unknown job {}", transition, job_id);
            return false;
        };

        let Some(next) = job.state.next(transition) else {
            tip_debug!(
                "Ignoring illegal transition {:?} for job {} in state {:?}",
                transition,
                job_id,
                job.state
            );
            return false;
        };
        if let Transition::Tick(seconds) = transition {
            if job.elapsed_seconds == seconds {
                return false;
            }
            job.elapsed_seconds = seconds;
        }
        job.state = next;
        self.dirty = true;
        true
    }

    /// Drops a job. Removing an absent id is a no-op.
    pub(crate) fn remove_job(&mut self, job_id: &JobId) -> bool {
        let before = self.jobs.len();
        self.jobs.retain(|job| &job.id != job_id);
        let removed = self.jobs.len() != before;
        if removed {
            self.dirty = true;
        }
        removed
    }

    pub(crate) fn set_running(&mut self, running: bool) {
        if self.running != running {
            self.running = running;
            self.dirty = true;
        }
    }
}
