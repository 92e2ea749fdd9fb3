use std::str::FromStr;

use meet::domain::RecordingStatus;

const ALL: [RecordingStatus; 7] = [
    RecordingStatus::Initiated,
    RecordingStatus::Active,
    RecordingStatus::Stopped,
    RecordingStatus::Aborted,
    RecordingStatus::Saved,
    RecordingStatus::FailedToStart,
    RecordingStatus::FailedToStop,
];

#[test]
fn given_default_status_when_created_then_is_initiated() {
    assert_eq!(RecordingStatus::default(), RecordingStatus::Initiated);
}

#[test]
fn given_initiated_and_active_when_checking_ongoing_then_only_they_are_ongoing() {
    let ongoing: Vec<_> = ALL.iter().filter(|s| s.is_ongoing()).collect();

    assert_eq!(
        ongoing,
        vec![&RecordingStatus::Initiated, &RecordingStatus::Active]
    );
}

#[test]
fn given_terminal_status_when_transitioning_anywhere_then_is_rejected() {
    for from in ALL.iter().filter(|s| s.is_terminal()) {
        for to in ALL {
            assert!(
                !from.can_transition_to(to),
                "{} -> {} should be rejected",
                from,
                to
            );
        }
    }
}

#[test]
fn given_initiated_when_transitioning_then_only_active_or_failed_to_start_allowed() {
    let allowed: Vec<_> = ALL
        .into_iter()
        .filter(|to| RecordingStatus::Initiated.can_transition_to(*to))
        .collect();

    assert_eq!(
        allowed,
        vec![RecordingStatus::Active, RecordingStatus::FailedToStart]
    );
}

#[test]
fn given_active_when_transitioning_then_every_terminal_status_allowed() {
    let allowed: Vec<_> = ALL
        .into_iter()
        .filter(|to| RecordingStatus::Active.can_transition_to(*to))
        .collect();

    assert_eq!(
        allowed,
        vec![
            RecordingStatus::Stopped,
            RecordingStatus::Aborted,
            RecordingStatus::Saved,
            RecordingStatus::FailedToStart,
            RecordingStatus::FailedToStop,
        ]
    );
}

#[test]
fn given_same_status_when_transitioning_then_is_rejected() {
    for status in ALL {
        assert!(!status.can_transition_to(status));
    }
}

#[test]
fn given_wire_names_when_parsing_then_matches_display() {
    for status in ALL {
        assert_eq!(RecordingStatus::from_str(status.as_str()), Ok(status));
    }
    assert_eq!(RecordingStatus::FailedToStart.to_string(), "failed_to_start");
}

#[test]
fn given_unknown_status_when_parsing_then_returns_error() {
    let result = RecordingStatus::from_str("paused");

    assert_eq!(
        result,
        Err("Invalid recording status: paused".to_string())
    );
}
