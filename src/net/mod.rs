//! Backend REST integration: wire types and request helpers.

pub mod api;
pub mod types;
