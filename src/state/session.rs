#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::token_store;

/// Placeholder marker for the logged-in user.
///
/// Set on login and restoration; the real profile record is fetched
/// separately by the views that need it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserStub;

/// Authentication state: bearer token, user marker, and restoration flag.
///
/// One instance exists per application run, provided through context from the
/// root component. `ready` stays false until the persisted token has been
/// read back exactly once; no routing decision is made before that, which is
/// what keeps a returning authenticated user from being bounced through the
/// login page while restoration is in flight.
#[derive(Clone, Debug, Default)]
pub struct Session {
    token: Option<String>,
    user: Option<UserStub>,
    ready: bool,
}

impl Session {
    /// Read the persisted token back into memory and mark the session ready.
    ///
    /// Called once at startup. A missing stored token is the normal
    /// logged-out outcome, not a failure; an unreadable storage layer
    /// degrades to the same thing.
    pub fn restore(&mut self) {
        if self.ready {
            return;
        }
        self.token = token_store::read();
        self.user = self.token.as_ref().map(|_| UserStub);
        self.ready = true;
    }

    /// Adopt a token obtained from a successful login exchange.
    ///
    /// Persists the token before the in-memory state is updated. Does not
    /// navigate; routing reacts to the state change. An empty credential is
    /// never stored.
    pub fn login(&mut self, token: &str) {
        if token.is_empty() {
            return;
        }
        token_store::write(token);
        self.token = Some(token.to_owned());
        self.user = Some(UserStub);
    }

    /// Drop the session. Erases the persisted token first; calling while
    /// already logged out is a no-op with the same post-state.
    pub fn logout(&mut self) {
        token_store::clear();
        self.token = None;
        self.user = None;
    }

    /// The current bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The user marker, present while logged in.
    pub fn user(&self) -> Option<UserStub> {
        self.user
    }

    /// Whether restoration has completed.
    pub fn ready(&self) -> bool {
        self.ready
    }

    /// Restored and holding a credential.
    pub fn is_authenticated(&self) -> bool {
        self.ready && self.token.is_some()
    }
}
