//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The session singleton is the only shared mutable state in the client. It
//! is provided once from the root component as `RwSignal<Session>` and read
//! reactively everywhere; mutation happens solely through the three session
//! operations (`restore`, `login`, `logout`).

pub mod session;
