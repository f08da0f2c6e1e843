//! Unit tests for the sign-in service.

use std::time::{Duration, SystemTime};

use outcome::Outcome;
use rstest::{fixture, rstest};

use super::{Account, AuthPolicy, AuthService, Role};

const PASSWORD: &str = "s3cure-pass";

#[fixture]
fn policy() -> AuthPolicy {
    AuthPolicy {
        min_password_length: 8,
        admin_domains: vec!["medrefer.admin".to_owned()],
        specialist_domains: vec!["heart.clinic".to_owned()],
        reset_token_ttl: Duration::from_secs(600),
    }
}

#[fixture]
fn service(policy: AuthPolicy) -> AuthService {
    let mut service = AuthService::new(policy);
    assert!(service.register("gp@surgery.org", PASSWORD).is_success());
    service
}

#[rstest]
#[case("ops@medrefer.admin", Role::Admin)]
#[case("Dr.Heart@HEART.clinic", Role::Specialist)]
#[case("gp@surgery.org", Role::Referrer)]
#[case("no-domain", Role::Referrer)]
fn roles_follow_the_email_domain(policy: AuthPolicy, #[case] email: &str, #[case] role: Role) {
    assert_eq!(policy.derive_role(email), role);
}

#[rstest]
fn register_normalises_and_assigns_role(policy: AuthPolicy) {
    let mut service = AuthService::new(policy);
    assert_eq!(
        service.register("  Cardio@Heart.Clinic ", PASSWORD),
        Outcome::success(Account {
            email: "cardio@heart.clinic".to_owned(),
            role: Role::Specialist,
        })
    );
}

#[rstest]
fn register_rejects_duplicates(mut service: AuthService) {
    assert_eq!(
        service.register("GP@surgery.org", PASSWORD).error_message(),
        Some("an account for gp@surgery.org already exists")
    );
}

#[rstest]
#[case::bad_email("gp-at-surgery", PASSWORD, "'gp-at-surgery' is not a valid email address")]
#[case::short_password("new@surgery.org", "a1", "password must be at least 8 characters")]
#[case::weak_password("new@surgery.org", "letters-only", "password must contain a letter and a digit")]
fn register_reports_validation_failures(
    policy: AuthPolicy,
    #[case] email: &str,
    #[case] password: &str,
    #[case] message: &str,
) {
    let mut service = AuthService::new(policy);
    assert_eq!(service.register(email, password).error_message(), Some(message));
}

#[rstest]
fn login_then_authenticate(mut service: AuthService) {
    let session = service.login("gp@surgery.org", PASSWORD).unwrap();
    assert_eq!(session.account.role, Role::Referrer);
    assert_eq!(service.authenticate(&session.token), Outcome::success(session.account));
}

#[rstest]
#[case::wrong_password("gp@surgery.org", "wrong-pass1")]
#[case::unknown_email("nobody@surgery.org", PASSWORD)]
fn login_failures_share_one_message(mut service: AuthService, #[case] email: &str, #[case] password: &str) {
    assert_eq!(
        service.login(email, password).error_message(),
        Some("invalid email or password")
    );
}

#[rstest]
fn logout_invalidates_the_token(mut service: AuthService) {
    let session = service.login("gp@surgery.org", PASSWORD).unwrap();
    assert_eq!(service.logout(&session.token), Outcome::success(()));
    assert!(service.authenticate(&session.token).is_error());
    assert!(service.logout(&session.token).is_error());
}

#[rstest]
#[tokio::test]
async fn login_async_validates_before_signing_in(mut service: AuthService) {
    let rejected = service.login_async("not an email", PASSWORD).await;
    assert_eq!(
        rejected.error_message(),
        Some("'not an email' is not a valid email address")
    );

    let session = service.login_async("GP@Surgery.org", PASSWORD).await;
    assert_eq!(
        session.map(|s| s.account.email),
        Outcome::success("gp@surgery.org".to_owned())
    );
}

#[rstest]
fn reset_flow_replaces_the_password(mut service: AuthService) {
    let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
    let open = service.login("gp@surgery.org", PASSWORD).unwrap();
    let reset = service.request_password_reset("gp@surgery.org", now).unwrap();

    let later = now + Duration::from_secs(60);
    assert_eq!(
        service.reset_password(&reset.token, "n3w-password", later),
        Outcome::success(())
    );
    assert!(service.authenticate(&open.token).is_error());
    assert!(service.login("gp@surgery.org", PASSWORD).is_error());
    assert!(service.login("gp@surgery.org", "n3w-password").is_success());
    assert_eq!(
        service
            .reset_password(&reset.token, "an0ther-password", later)
            .error_message(),
        Some("reset token already used")
    );
}

#[rstest]
fn expired_reset_tokens_are_rejected(mut service: AuthService) {
    let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
    let reset = service.request_password_reset("gp@surgery.org", now).unwrap();
    let too_late = now + Duration::from_secs(601);
    assert_eq!(
        service
            .reset_password(&reset.token, "n3w-password", too_late)
            .error_message(),
        Some("reset token expired")
    );
}

#[rstest]
fn reset_requires_a_known_account_and_token(mut service: AuthService) {
    let now = SystemTime::UNIX_EPOCH;
    assert_eq!(
        service
            .request_password_reset("ghost@surgery.org", now)
            .error_message(),
        Some("no account registered for ghost@surgery.org")
    );
    assert_eq!(
        service.reset_password("bogus", "n3w-password", now).error_message(),
        Some("invalid reset token")
    );
}

#[rstest]
fn weak_reset_password_keeps_the_token_usable(mut service: AuthService) {
    let now = SystemTime::UNIX_EPOCH;
    let reset = service.request_password_reset("gp@surgery.org", now).unwrap();
    assert!(service.reset_password(&reset.token, "short", now).is_error());
    assert!(service.reset_password(&reset.token, "l0nger-password", now).is_success());
}

#[rstest]
fn stale_reset_tokens_are_discarded(mut service: AuthService) {
    let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
    let used = service.request_password_reset("gp@surgery.org", now).unwrap();
    assert!(service.reset_password(&used.token, "n3w-password", now).is_success());
    let stale = service.request_password_reset("gp@surgery.org", now).unwrap();
    assert_eq!(service.resets.len(), 2);

    let too_late = now + Duration::from_secs(601);
    assert_eq!(
        service
            .reset_password(&stale.token, "an0ther-password", too_late)
            .error_message(),
        Some("reset token expired")
    );
    assert!(service.resets.is_empty());
    assert_eq!(
        service
            .reset_password(&stale.token, "an0ther-password", too_late)
            .error_message(),
        Some("invalid reset token")
    );
}

#[rstest]
fn new_reset_requests_discard_expired_tokens(mut service: AuthService) {
    let now = SystemTime::UNIX_EPOCH;
    assert!(service.request_password_reset("gp@surgery.org", now).is_success());
    let later = now + Duration::from_secs(601);
    let fresh = service.request_password_reset("gp@surgery.org", later).unwrap();
    assert_eq!(service.resets.len(), 1);
    assert!(service.resets.contains_key(&fresh.token));
}
