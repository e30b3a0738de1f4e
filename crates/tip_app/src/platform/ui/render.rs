use tip_core::{AppViewModel, JobRowView, JobState};

const NAME_WIDTH: usize = 36;

/// Projects the view model onto terminal lines. Pure; the caller prints.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let batch = if view.running { "running" } else { "idle" };
    let mut lines = Vec::with_capacity(view.jobs.len() + 2);
    lines.push(format!(
        "Jobs: {} | Batch: {} | [{}]",
        view.job_count, batch, view.start_label
    ));

    if view.show_help {
        lines.push("  No images queued. Type `file` or `folder` to add some.".to_string());
        return lines;
    }

    lines.extend(view.jobs.iter().map(format_job_row));
    lines
}

fn format_job_row(job: &JobRowView) -> String {
    let marker = if job.state.is_terminal() { "x" } else { " " };
    format!(
        "  [{marker}] #{id:<4} {name:<width$} {state:<8} {time}",
        id = job.job_id,
        name = truncate_name(&job.display_name),
        width = NAME_WIDTH,
        state = state_label(job.state),
        time = job.elapsed_label,
    )
}

fn state_label(state: JobState) -> &'static str {
    match state {
        JobState::Pending => "Pending",
        JobState::Working => "Working",
        JobState::Done => "Done",
        JobState::Error => "Error",
    }
}

/// Keeps the tail of long paths, where the file name is.
fn truncate_name(name: &str) -> String {
    let count = name.chars().count();
    if count <= NAME_WIDTH {
        return name.to_string();
    }
    let tail: String = name.chars().skip(count - (NAME_WIDTH - 3)).collect();
    format!("...{tail}")
}
