//! Academy Ledger
//!
//! Administrative web tool for a small academy. A single administrator keeps
//! the student and teacher rosters, records fee and salary payments, views
//! outstanding balances accrued per calendar month, downloads PDF receipts
//! and reviews per-class reports.

pub mod config;
pub mod database;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod templates;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{AcademyError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use handlers::create_router;
pub use services::ServiceFactory;
pub use state::AppState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
