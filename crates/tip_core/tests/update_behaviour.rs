use std::sync::Once;

use pretty_assertions::assert_eq;
use tip_core::{update, AppState, Effect, JobId, JobState, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(tip_logging::initialize_for_tests);
}

fn working_job(id: &str, name: &str) -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::Created {
            job_id: JobId::new(id),
            display_name: name.to_string(),
        },
    );
    let (state, _) = update(
        state,
        Msg::Working {
            job_id: JobId::new(id),
        },
    );
    state
}

#[test]
fn empty_state_shows_help() {
    init_logging();
    let view = AppState::new().view();

    assert!(view.show_help);
    assert_eq!(view.job_count, 0);
    assert_eq!(view.start_label, "Start");
}

#[test]
fn tick_renders_as_minutes_and_seconds() {
    init_logging();
    let state = working_job("3", "photos/bridge.jpg");
    let (state, _) = update(
        state,
        Msg::Tick {
            job_id: JobId::new("3"),
            seconds: 125,
        },
    );

    let view = state.view();
    assert!(!view.show_help);
    let row = &view.jobs[0];
    assert_eq!(row.display_name, "photos/bridge.jpg");
    assert_eq!(row.state, JobState::Working);
    assert_eq!(row.elapsed_label, "02:05");
}

#[test]
fn new_rows_start_at_zero() {
    init_logging();
    let (mut state, _) = update(
        AppState::new(),
        Msg::Created {
            job_id: JobId::from(0u64),
            display_name: "a.png".to_string(),
        },
    );
    let view = state.view();
    assert_eq!(view.jobs[0].job_id, JobId::new("0"));
    assert_eq!(view.jobs[0].state, JobState::Pending);
    assert_eq!(view.jobs[0].elapsed_label, "00:00");
    assert!(state.consume_dirty());
}

#[test]
fn batch_events_toggle_running() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::BatchStarted);
    assert!(state.running());
    assert_eq!(state.view().start_label, "Stop");
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::BatchStarted);
    assert!(!state.consume_dirty());

    let (state, _) = update(state, Msg::BatchStopped);
    assert!(!state.view().running);
    assert_eq!(state.view().start_label, "Start");
}

#[test]
fn user_commands_become_effects_unchanged() {
    init_logging();
    let state = working_job("1", "a.png");

    let (state, effects) = update(state, Msg::SelectFileClicked);
    assert_eq!(effects, vec![Effect::SelectFile]);

    let (state, effects) = update(state, Msg::SelectFolderClicked);
    assert_eq!(effects, vec![Effect::SelectFolder]);

    let (state, effects) = update(
        state,
        Msg::StartClicked {
            points: 600,
            max_time_seconds: 0,
            max_size_bytes: 0,
        },
    );
    assert_eq!(
        effects,
        vec![Effect::StartBatch {
            points: 600,
            max_time_seconds: 0,
            max_size_bytes: 0,
        }]
    );

    let (state, effects) = update(
        state,
        Msg::RemoveClicked {
            job_id: JobId::new("1"),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::RemoveJob {
            job_id: JobId::new("1")
        }]
    );
    // The row waits for the backend's `remove` event.
    assert_eq!(state.jobs().len(), 1);
}

#[test]
fn remove_uses_the_tracked_id_form() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::Created {
            job_id: JobId::from(7u64),
            display_name: "a.png".to_string(),
        },
    );

    // Typed ids carry no wire form; the tracked job supplies it.
    let (state, effects) = update(
        state,
        Msg::RemoveClicked {
            job_id: JobId::new("7"),
        },
    );
    let [Effect::RemoveJob { job_id }] = effects.as_slice() else {
        panic!("expected one remove effect, got {effects:?}");
    };
    assert_eq!(job_id.as_number(), Some(7));

    let (_, effects) = update(
        state,
        Msg::RemoveClicked {
            job_id: JobId::new("8"),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::RemoveJob {
            job_id: JobId::new("8")
        }]
    );
}
