//! Data models
//!
//! Shared between bistro-server and its API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod employee;
pub mod menu;
pub mod menu_item;
pub mod timesheet;

// Re-exports
pub use employee::*;
pub use menu::*;
pub use menu_item::*;
pub use timesheet::*;
