//! Shared UI components: the route guard layout, sidebar, and summary cards.

pub mod protected;
pub mod sidebar;
pub mod summary_cards;
