//! Small support modules: token persistence and calendar arithmetic.

pub mod dates;
pub mod token_store;
