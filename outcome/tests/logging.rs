//! Diagnostics emitted through `tracing`.

use outcome::{Failure, Outcome};
use rstest::rstest;
use test_helpers::logs;

#[derive(Debug, thiserror::Error)]
#[error("socket closed")]
struct Closed;

#[rstest]
fn log_failure_emits_a_warning_with_context() {
    let (outcome, output) = logs::capture(|| {
        Outcome::<u8>::error_with_cause("could not load referrals", Closed)
            .log_failure("referral_list")
    });
    assert!(outcome.is_error());
    assert!(output.contains("WARN"), "missing level: {output}");
    assert!(output.contains("referral_list"), "missing context: {output}");
    assert!(output.contains("could not load referrals"), "missing message: {output}");
    assert!(output.contains("socket closed"), "missing cause: {output}");
}

#[rstest]
#[case::success(Outcome::success(1))]
#[case::loading(Outcome::loading())]
fn log_failure_is_silent_for_other_states(#[case] outcome: Outcome<u8>) {
    let (_, output) = logs::capture(|| outcome.log_failure("noop"));
    assert!(output.is_empty(), "unexpected output: {output}");
}

#[rstest]
fn blank_failure_message_is_reported() {
    let (failure, output) = logs::capture(|| Failure::new(""));
    assert_eq!(failure.message(), "unspecified failure");
    assert!(output.contains("failure constructed without a message"));
}
