//! Unit tests for construction, queries and combinators.

use std::{
    cell::Cell,
    hash::{DefaultHasher, Hash, Hasher},
    panic::{AssertUnwindSafe, catch_unwind},
};

use rstest::rstest;

use super::{Failure, Outcome, State};

#[derive(Debug, thiserror::Error)]
#[error("timeout after 30s")]
struct Timeout;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[rstest]
#[case::success(Outcome::success(1), State::Success)]
#[case::error(Outcome::error("e"), State::Error)]
#[case::loading(Outcome::loading(), State::Loading)]
fn exactly_one_query_is_true(#[case] outcome: Outcome<i32>, #[case] expected: State) {
    let flags = [outcome.is_success(), outcome.is_error(), outcome.is_loading()];
    assert_eq!(flags.iter().filter(|flag| **flag).count(), 1);
    assert_eq!(outcome.state(), expected);
}

#[rstest]
fn accessors_expose_only_the_matching_payload() {
    let ok = Outcome::success("v");
    assert_eq!(ok.value(), Some(&"v"));
    assert_eq!(ok.error_message(), None);
    assert!(ok.cause().is_none());

    let failed: Outcome<&str> = Outcome::error_with_cause("sync failed", Timeout);
    assert_eq!(failed.value(), None);
    assert_eq!(failed.error_message(), Some("sync failed"));
    assert_eq!(
        failed.cause().map(ToString::to_string).as_deref(),
        Some("timeout after 30s")
    );

    let pending: Outcome<&str> = Outcome::loading();
    assert_eq!(pending.value(), None);
    assert_eq!(pending.error_message(), None);
    assert!(pending.trace().is_none());
}

#[rstest]
fn blank_messages_are_normalised() {
    let failed: Outcome<()> = Outcome::error("   ");
    assert_eq!(failed.error_message(), Some("unspecified failure"));
}

#[rstest]
fn trace_is_carried_but_ignored_by_equality() {
    let traced: Outcome<()> = Outcome::failure(Failure::new("boom").capture_trace());
    assert!(traced.trace().is_some());
    assert_eq!(traced, Outcome::error("boom"));
}

#[rstest]
fn map_transforms_success() {
    assert_eq!(Outcome::success(42).map(|x| x * 2), Outcome::success(84));
}

#[rstest]
#[case::error(Outcome::error("e"))]
#[case::loading(Outcome::loading())]
fn map_never_calls_the_closure_on_non_success(#[case] outcome: Outcome<i32>) {
    let calls = Cell::new(0);
    let mapped = outcome.clone().map(|x| {
        calls.set(calls.get() + 1);
        x * 2
    });
    assert_eq!(calls.get(), 0);
    assert_eq!(mapped, outcome);
}

#[rstest]
fn map_preserves_error_cause() {
    let failed: Outcome<i32> = Outcome::error_with_cause("sync failed", Timeout);
    let mapped = failed.map(|x| x.to_string());
    assert_eq!(mapped.error_message(), Some("sync failed"));
    assert!(mapped.cause().is_some());
}

#[rstest]
#[case::success(Outcome::success(42), 84)]
#[case::error(Outcome::error("e"), 0)]
#[case::loading(Outcome::loading(), 0)]
fn map_or_falls_back_to_default(#[case] outcome: Outcome<i32>, #[case] expected: i32) {
    assert_eq!(outcome.map_or(0, |x| x * 2), expected);
}

#[rstest]
#[case::error(Outcome::error("e"))]
#[case::loading(Outcome::loading())]
fn map_or_else_computes_default_once(#[case] outcome: Outcome<i32>) {
    let calls = Cell::new(0);
    let value = outcome.map_or_else(
        || {
            calls.set(calls.get() + 1);
            -1
        },
        |x| x * 2,
    );
    assert_eq!((value, calls.get()), (-1, 1));
}

#[rstest]
fn map_or_else_skips_default_on_success() {
    let value = Outcome::success(5).map_or_else(|| panic!("default must not run"), |x| x + 1);
    assert_eq!(value, 6);
}

#[rstest]
fn and_then_sync_chains_and_short_circuits() {
    let halve = |x: i32| {
        if x % 2 == 0 {
            Outcome::success(x / 2)
        } else {
            Outcome::error(format!("{x} is odd"))
        }
    };
    assert_eq!(Outcome::success(8).and_then_sync(halve), Outcome::success(4));
    assert_eq!(
        Outcome::success(8)
            .and_then_sync(halve)
            .and_then_sync(halve)
            .and_then_sync(halve)
            .and_then_sync(halve)
            .error_message(),
        Some("1 is odd")
    );
    let pending: Outcome<i32> = Outcome::loading();
    assert!(pending.and_then_sync(halve).is_loading());
}

#[rstest]
fn unwrap_returns_success_value() {
    assert_eq!(Outcome::success("v").unwrap(), "v");
}

#[rstest]
#[case::error(Outcome::error("e"), "error")]
#[case::loading(Outcome::loading(), "loading")]
fn unwrap_panics_on_non_success(#[case] outcome: Outcome<&str>, #[case] state: &str) {
    let payload = catch_unwind(AssertUnwindSafe(|| outcome.unwrap()))
        .expect_err("unwrap must panic on a non-success value");
    let message = payload
        .downcast_ref::<String>()
        .cloned()
        .unwrap_or_default();
    assert!(message.contains("non-success"), "unexpected panic: {message}");
    if state == "error" {
        assert!(message.contains(": e"), "missing failure message: {message}");
    }
}

#[rstest]
#[case::error(Outcome::error("e"))]
#[case::loading(Outcome::loading())]
fn unwrap_or_variants_use_defaults(#[case] outcome: Outcome<i32>) {
    assert_eq!(outcome.clone().unwrap_or(7), 7);
    assert_eq!(outcome.clone().unwrap_or_else(|| 9), 9);
    assert_eq!(outcome.unwrap_or_default(), 0);
}

#[rstest]
fn unwrap_or_variants_return_success_value() {
    assert_eq!(Outcome::success(3).unwrap_or(7), 3);
    assert_eq!(
        Outcome::success(3).unwrap_or_else(|| panic!("must not run")),
        3
    );
}

#[rstest]
fn hooks_fire_only_for_their_variant() {
    let successes = Cell::new(0);
    let errors = Cell::new(0);
    let loads = Cell::new(0);
    let run = |outcome: Outcome<i32>| {
        outcome
            .on_success(|_| successes.set(successes.get() + 1))
            .on_error(|_, _| errors.set(errors.get() + 1))
            .on_loading(|| loads.set(loads.get() + 1))
    };

    assert_eq!(run(Outcome::success(1)), Outcome::success(1));
    assert_eq!(run(Outcome::error("e")), Outcome::error("e"));
    assert_eq!(run(Outcome::loading()), Outcome::loading());
    assert_eq!((successes.get(), errors.get(), loads.get()), (1, 1, 1));
}

#[rstest]
fn on_error_receives_message_and_cause() {
    let mut seen = None;
    let _ = Outcome::<()>::error_with_cause("sync failed", Timeout).on_error(|message, cause| {
        seen = Some((message.to_owned(), cause.map(ToString::to_string)));
    });
    assert_eq!(
        seen,
        Some(("sync failed".to_owned(), Some("timeout after 30s".to_owned())))
    );
}

#[rstest]
fn log_failure_returns_outcome_unchanged() {
    let failed: Outcome<u8> = Outcome::error("unreachable host");
    assert_eq!(failed.clone().log_failure("fetch"), failed);
}

#[rstest]
fn equality_is_structural() {
    assert_eq!(Outcome::success("test"), Outcome::success("test"));
    assert_ne!(Outcome::success("a"), Outcome::success("b"));
    assert_eq!(Outcome::<()>::error("e"), Outcome::error("e"));
    assert_ne!(Outcome::<()>::error("e"), Outcome::error("f"));
    assert_eq!(Outcome::<()>::loading(), Outcome::loading());
    assert_ne!(Outcome::success(()), Outcome::loading());
    assert_eq!(
        hash_of(&Outcome::success("test")),
        hash_of(&Outcome::success("test"))
    );
    assert_eq!(
        hash_of(&Outcome::<()>::error("e")),
        hash_of(&Outcome::<()>::error("e"))
    );
}

#[rstest]
fn errors_with_different_causes_are_not_equal() {
    let with_cause: Outcome<()> = Outcome::error_with_cause("e", Timeout);
    assert_ne!(with_cause, Outcome::error("e"));
}

#[rstest]
#[case::success(Outcome::success("x"), "Success(x)")]
#[case::error(Outcome::error("e"), "Error(e)")]
#[case::loading(Outcome::loading(), "Loading()")]
fn display_names_the_variant(#[case] outcome: Outcome<&str>, #[case] expected: &str) {
    assert_eq!(outcome.to_string(), expected);
}

#[rstest]
fn map_error_rewrites_only_errors() {
    let failed: Outcome<u8> = Outcome::error_with_cause("timeout", Timeout);
    let rewritten = failed.map_error(|message| format!("loading referrals: {message}"));
    assert_eq!(rewritten.error_message(), Some("loading referrals: timeout"));
    assert!(rewritten.cause().is_some());
    assert_eq!(
        Outcome::success(1).map_error(|_| panic!("must not run")),
        Outcome::success(1)
    );
}

#[rstest]
fn zip_reports_the_first_non_success() {
    assert_eq!(
        Outcome::success(1).zip(Outcome::success("a")),
        Outcome::success((1, "a"))
    );
    let left: Outcome<(i32, &str)> = Outcome::<i32>::error("left").zip(Outcome::loading());
    assert_eq!(left.error_message(), Some("left"));
    let right: Outcome<(i32, &str)> = Outcome::success(1).zip(Outcome::error("right"));
    assert_eq!(right.error_message(), Some("right"));
}

#[rstest]
fn collect_stops_at_the_first_failure() {
    let calls = Cell::new(0);
    let items = [Outcome::success(1), Outcome::error("second"), Outcome::success(3)];
    let collected: Outcome<Vec<i32>> = items
        .into_iter()
        .inspect(|_| calls.set(calls.get() + 1))
        .collect();
    assert_eq!(collected.error_message(), Some("second"));
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn default_outcome_is_loading() {
    assert!(Outcome::<String>::default().is_loading());
}

#[rstest]
fn as_ref_borrows_the_payload() {
    let owned = Outcome::success(String::from("dr. okafor"));
    assert_eq!(owned.as_ref().map(String::len), Outcome::success(10));
    assert!(owned.is_success());
}
