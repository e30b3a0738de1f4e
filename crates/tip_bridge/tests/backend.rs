#![cfg(unix)]

use std::sync::{mpsc, Arc};
use std::time::Duration;

use tip_bridge::{BackendHandle, BridgeError, Command, CommandPort, EventSink};
use tip_core::{JobId, Msg};

enum Seen {
    Msg(Msg),
    Disconnected,
}

struct ForwardingSink {
    tx: mpsc::Sender<Seen>,
}

impl EventSink for ForwardingSink {
    fn emit(&self, msg: Msg) {
        let _ = self.tx.send(Seen::Msg(msg));
    }

    fn disconnected(&self) {
        let _ = self.tx.send(Seen::Disconnected);
    }
}

fn next(rx: &mpsc::Receiver<Seen>) -> Seen {
    rx.recv_timeout(Duration::from_secs(10)).expect("backend event")
}

#[test]
fn round_trips_with_a_child_process() {
    tip_logging::initialize_for_tests();
    // Announce one job, wait for a command, then confirm removal and exit.
    let script = concat!(
        "printf '%s\\n' '{\"event\":\"newPath\",\"args\":[\"a.png\",0]}'; ",
        "read line; ",
        "case \"$line\" in *RemoveItem*) ",
        "printf '%s\\n' '{\"event\":\"remove\",\"args\":[0]}';; esac"
    );
    let (tx, rx) = mpsc::channel();
    let handle = BackendHandle::spawn(
        "sh",
        &["-c".to_string(), script.to_string()],
        Arc::new(ForwardingSink { tx }),
    )
    .unwrap();

    match next(&rx) {
        Seen::Msg(msg) => assert_eq!(
            msg,
            Msg::Created {
                job_id: JobId::new("0"),
                display_name: "a.png".to_string(),
            }
        ),
        Seen::Disconnected => panic!("backend closed early"),
    }

    handle.send(Command::Remove {
        job_id: JobId::new("0"),
    });

    match next(&rx) {
        Seen::Msg(msg) => assert_eq!(
            msg,
            Msg::Removed {
                job_id: JobId::new("0")
            }
        ),
        Seen::Disconnected => panic!("backend closed early"),
    }
    assert!(matches!(next(&rx), Seen::Disconnected));
}

#[test]
fn missing_program_is_a_spawn_error() {
    let (tx, _rx) = mpsc::channel();
    let result = BackendHandle::spawn(
        "/definitely/not/a/backend",
        &[],
        Arc::new(ForwardingSink { tx }),
    );
    assert!(matches!(result, Err(BridgeError::Spawn { .. })));
}
