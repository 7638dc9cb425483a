//! Page components, one per route.

pub mod dashboard;
pub mod expenses;
pub mod login;
pub mod profile;
pub mod register;
pub mod reports;
pub mod summary;
pub mod transactions;
