//! Asynchronous chaining with `Outcome::and_then`.
//!
//! Continuations must only start once the outcome is known to be a success,
//! and non-success values must resolve without touching them.

use std::sync::atomic::{AtomicUsize, Ordering};

use outcome::Outcome;
use rstest::rstest;

async fn double(value: i32) -> Outcome<i32> {
    tokio::task::yield_now().await;
    Outcome::success(value * 2)
}

#[rstest]
#[tokio::test]
async fn success_runs_the_continuation() {
    let chained = Outcome::success(42).and_then(double).await;
    assert_eq!(chained, Outcome::success(84));
}

#[rstest]
#[case::error(Outcome::error("e"))]
#[case::loading(Outcome::loading())]
#[tokio::test]
async fn non_success_short_circuits(#[case] start: Outcome<i32>) {
    let calls = AtomicUsize::new(0);
    let chained = start
        .clone()
        .and_then(|value| {
            calls.fetch_add(1, Ordering::SeqCst);
            double(value)
        })
        .await;
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(chained, start);
}

#[rstest]
#[tokio::test]
async fn error_message_survives_a_type_change() {
    let failed: Outcome<i32> = Outcome::error("patient record locked");
    let chained: Outcome<String> = failed
        .and_then(|value| async move { Outcome::success(value.to_string()) })
        .await;
    assert_eq!(chained.error_message(), Some("patient record locked"));
}

#[rstest]
#[tokio::test]
async fn chains_stop_at_the_first_failure() {
    let reject_large = |value: i32| async move {
        if value > 100 {
            Outcome::error(format!("{value} exceeds quota"))
        } else {
            Outcome::success(value)
        }
    };

    let chained = Outcome::success(30)
        .and_then(double)
        .await
        .and_then(double)
        .await
        .and_then(reject_large)
        .await
        .and_then(double)
        .await;
    assert_eq!(chained.error_message(), Some("120 exceeds quota"));
}

#[rstest]
#[tokio::test]
async fn continuation_runs_on_spawned_tasks() -> anyhow::Result<()> {
    let handle = tokio::spawn(async { Outcome::success(5).and_then(double).await });
    let chained = handle.await?;
    assert_eq!(chained, Outcome::success(10));
    Ok(())
}
