use std::time::Duration;

use meet::infrastructure::webhook::RetryPolicy;

#[test]
fn given_default_policy_when_created_then_matches_delivery_defaults() {
    let policy = RetryPolicy::default();

    assert_eq!(policy.max_retries, 2);
    assert_eq!(policy.max_attempts(), 3);
    assert_eq!(policy.status_forcelist, vec![502, 503, 504]);
}

#[test]
fn given_forcelist_when_checking_status_then_only_listed_statuses_retry() {
    let policy = RetryPolicy::default();

    assert!(policy.should_retry_status(503));
    assert!(!policy.should_retry_status(500));
    assert!(!policy.should_retry_status(400));
}

#[test]
fn given_backoff_factor_when_computing_delays_then_first_retry_is_immediate() {
    let policy = RetryPolicy {
        max_retries: 5,
        backoff_factor: 0.5,
        status_forcelist: vec![],
    };

    assert_eq!(policy.backoff(1), Duration::ZERO);
    assert_eq!(policy.backoff(2), Duration::from_secs(1));
    assert_eq!(policy.backoff(3), Duration::from_secs(2));
    assert_eq!(policy.backoff(4), Duration::from_secs(4));
}

#[test]
fn given_zero_factor_when_computing_delays_then_never_waits() {
    let policy = RetryPolicy {
        max_retries: 3,
        backoff_factor: 0.0,
        status_forcelist: vec![503],
    };

    assert_eq!(policy.backoff(3), Duration::ZERO);
}
