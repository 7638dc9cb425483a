//! Bearer token persistence.
//!
//! One localStorage slot holds the raw token string; presence or absence of
//! that slot is the only durable record of session identity across page
//! reloads. Browser builds go through `web_sys`; non-browser builds (SSR and
//! native tests) keep the slot in a process-local cell so the same contract
//! holds everywhere.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "fintrack_token";

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static SLOT: std::cell::RefCell<Option<String>> =
        const { std::cell::RefCell::new(None) };
}

/// Read the persisted token, if any.
///
/// An unreadable or empty slot reads as no token; storage problems are never
/// an error at this layer.
pub fn read() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage
            .get_item(STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SLOT.with(|s| s.borrow().clone().filter(|t| !t.is_empty()))
    }
}

/// Persist the token.
pub fn write(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SLOT.with(|s| *s.borrow_mut() = Some(token.to_owned()));
    }
}

/// Delete the persisted token. Deleting an empty slot is a no-op.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SLOT.with(|s| *s.borrow_mut() = None);
    }
}
