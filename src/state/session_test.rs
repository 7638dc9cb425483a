use super::*;

// Native tests exercise the process-local token slot, which follows the same
// contract as localStorage in browser builds.

fn fresh() -> Session {
    token_store::clear();
    Session::default()
}

// =============================================================
// Defaults and restoration
// =============================================================

#[test]
fn default_session_is_not_ready() {
    let session = fresh();
    assert!(!session.ready());
    assert!(session.token().is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn restore_with_empty_storage_is_logged_out() {
    let mut session = fresh();
    session.restore();
    assert!(session.ready());
    assert!(session.token().is_none());
    assert!(session.user().is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn restore_picks_up_stored_token() {
    let mut session = fresh();
    token_store::write("abc123");
    session.restore();
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("abc123"));
    assert!(session.user().is_some());
    token_store::clear();
}

#[test]
fn second_restore_is_a_no_op() {
    let mut session = fresh();
    session.restore();
    token_store::write("late");
    session.restore();
    assert!(session.token().is_none());
    token_store::clear();
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_sets_token_user_and_storage() {
    let mut session = fresh();
    session.restore();
    session.login("xyz");
    assert_eq!(session.token(), Some("xyz"));
    assert!(session.user().is_some());
    assert!(session.is_authenticated());
    assert_eq!(token_store::read(), Some("xyz".to_owned()));
    token_store::clear();
}

#[test]
fn login_survives_simulated_reload() {
    let mut session = fresh();
    session.restore();
    session.login("xyz");

    let mut reloaded = Session::default();
    reloaded.restore();
    assert_eq!(reloaded.token(), Some("xyz"));
    assert!(reloaded.is_authenticated());
    token_store::clear();
}

#[test]
fn login_rejects_empty_credential() {
    let mut session = fresh();
    session.restore();
    session.login("");
    assert!(session.token().is_none());
    assert_eq!(token_store::read(), None);
}

#[test]
fn authenticated_requires_ready() {
    let mut session = fresh();
    session.login("xyz");
    // Token held but restoration never ran: not authenticated yet.
    assert!(!session.is_authenticated());
    token_store::clear();
}

// =============================================================
// Logout
// =============================================================

#[test]
fn login_then_logout_clears_everything() {
    let mut session = fresh();
    session.restore();
    session.login("t-1");
    session.logout();
    assert!(session.token().is_none());
    assert!(session.user().is_none());
    assert!(!session.is_authenticated());
    assert_eq!(token_store::read(), None);
}

#[test]
fn logout_is_idempotent() {
    let mut session = fresh();
    session.restore();
    session.login("t-1");
    session.logout();
    session.logout();
    assert!(session.token().is_none());
    assert!(!session.is_authenticated());
    assert_eq!(token_store::read(), None);
}

#[test]
fn logout_when_never_logged_in_is_harmless() {
    let mut session = fresh();
    session.restore();
    session.logout();
    assert!(session.ready());
    assert!(!session.is_authenticated());
}
