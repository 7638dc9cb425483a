use super::*;
use crate::util::token_store;

fn session_with(stored: Option<&str>, restored: bool) -> Session {
    token_store::clear();
    if let Some(token) = stored {
        token_store::write(token);
    }
    let mut session = Session::default();
    if restored {
        session.restore();
    }
    session
}

// =============================================================
// Gate decisions
// =============================================================

#[test]
fn gate_before_restore_is_checking() {
    let session = session_with(None, false);
    assert_eq!(gate(&session), Gate::Checking);
}

#[test]
fn gate_before_restore_never_redirects_even_with_stored_token() {
    let session = session_with(Some("abc123"), false);
    assert_eq!(gate(&session), Gate::Checking);
    token_store::clear();
}

#[test]
fn gate_after_restore_without_token_redirects_to_login() {
    let session = session_with(None, true);
    assert_eq!(gate(&session), Gate::RedirectToLogin);
}

#[test]
fn gate_after_restore_with_token_allows() {
    let session = session_with(Some("abc123"), true);
    assert_eq!(gate(&session), Gate::Allow);
    token_store::clear();
}

// =============================================================
// Gate over session transitions
// =============================================================

#[test]
fn login_flips_gate_to_allow() {
    let mut session = session_with(None, true);
    assert_eq!(gate(&session), Gate::RedirectToLogin);
    session.login("t-1");
    assert_eq!(gate(&session), Gate::Allow);
    token_store::clear();
}

#[test]
fn logout_flips_gate_back_to_redirect() {
    let mut session = session_with(Some("abc123"), true);
    assert_eq!(gate(&session), Gate::Allow);
    session.logout();
    assert_eq!(gate(&session), Gate::RedirectToLogin);
}
