use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use super::{with_min_loading_time, with_timeout, TimeoutError, TimeoutOptions};

#[derive(Debug, PartialEq, Eq)]
enum TestError {
    Timeout(String),
    Boom,
}

impl From<TimeoutError> for TestError {
    fn from(err: TimeoutError) -> Self {
        TestError::Timeout(err.message)
    }
}

#[tokio::test(start_paused = true)]
async fn fast_operation_resolves_unchanged() {
    let outcome: Result<u32, TestError> = with_timeout(
        async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Ok(42)
        },
        TimeoutOptions::after(Duration::from_secs(30)),
    )
    .await;

    assert_eq!(outcome, Ok(42));
}

#[tokio::test(start_paused = true)]
async fn slow_operation_fails_with_configured_message() {
    let fired = Arc::new(AtomicUsize::new(0));
    let hook_fired = fired.clone();

    let outcome: Result<u32, TestError> = with_timeout(
        async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(1)
        },
        TimeoutOptions::after(Duration::from_millis(50))
            .message("Merging PDFs timed out")
            .on_timeout(move || {
                hook_fired.fetch_add(1, Ordering::SeqCst);
            }),
    )
    .await;

    assert_eq!(
        outcome,
        Err(TestError::Timeout("Merging PDFs timed out".to_string()))
    );
    assert_eq!(fired.load(Ordering::SeqCst), 1, "hook runs exactly once");
}

#[tokio::test(start_paused = true)]
async fn hook_is_not_invoked_when_operation_settles_in_time() {
    let fired = Arc::new(AtomicUsize::new(0));
    let hook_fired = fired.clone();

    let outcome: Result<u32, TestError> = with_timeout(
        async { Ok(7) },
        TimeoutOptions::after(Duration::from_secs(1)).on_timeout(move || {
            hook_fired.fetch_add(1, Ordering::SeqCst);
        }),
    )
    .await;

    assert_eq!(outcome, Ok(7));
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn operation_failure_is_not_reclassified() {
    let outcome: Result<u32, TestError> =
        with_timeout(async { Err(TestError::Boom) }, TimeoutOptions::default()).await;

    assert_eq!(outcome, Err(TestError::Boom));
}

#[tokio::test(start_paused = true)]
async fn default_deadline_is_thirty_seconds() {
    let ok: Result<u32, TestError> = with_timeout(
        async {
            tokio::time::sleep(Duration::from_secs(29)).await;
            Ok(7)
        },
        TimeoutOptions::default(),
    )
    .await;
    assert_eq!(ok, Ok(7));

    let err: Result<u32, TestError> = with_timeout(
        async {
            tokio::time::sleep(Duration::from_secs(31)).await;
            Ok(7)
        },
        TimeoutOptions::default(),
    )
    .await;
    assert_eq!(
        err,
        Err(TestError::Timeout("Operation timed out".to_string()))
    );
}

#[tokio::test(start_paused = true)]
async fn min_loading_time_floors_fast_operations() {
    let started = tokio::time::Instant::now();
    let value = with_min_loading_time(async { 5 }, Duration::from_millis(400)).await;

    assert_eq!(value, 5);
    assert!(started.elapsed() >= Duration::from_millis(400));
}

#[tokio::test(start_paused = true)]
async fn min_loading_time_adds_nothing_to_slow_operations() {
    let started = tokio::time::Instant::now();
    let value = with_min_loading_time(
        async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            9
        },
        Duration::from_millis(400),
    )
    .await;

    assert_eq!(value, 9);
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(1) && elapsed < Duration::from_secs(2));
}
