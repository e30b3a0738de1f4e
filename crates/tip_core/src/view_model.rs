use crate::{JobId, JobState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub jobs: Vec<JobRowView>,
    pub job_count: usize,
    pub running: bool,
    /// Nothing queued yet; the view shows the selection hint instead of rows.
    pub show_help: bool,
    pub start_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRowView {
    pub job_id: JobId,
    pub display_name: String,
    pub state: JobState,
    pub elapsed_label: String,
}

/// Formats elapsed seconds as `MM:SS`. Minutes are not capped at 59.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::format_elapsed;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_elapsed(0), "00:00");
        assert_eq!(format_elapsed(59), "00:59");
        assert_eq!(format_elapsed(125), "02:05");
        assert_eq!(format_elapsed(6_000), "100:00");
    }
}
