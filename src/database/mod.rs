//! Database module
//!
//! This module handles database connections and operations

pub mod connection;
pub mod repositories;
pub mod service;

// Re-export commonly used database components
pub use connection::{DatabasePool, create_pool, run_migrations, health_check};
pub use repositories::{StudentRepository, StudentPaymentRepository, TeacherRepository, TeacherPaymentRepository};
pub use service::DatabaseService;

/// Fresh migrated in-memory database for unit tests
#[cfg(test)]
pub(crate) async fn test_pool() -> DatabasePool {
    let config = crate::config::DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    let pool = create_pool(&config).await.expect("in-memory database");
    run_migrations(&pool).await.expect("migrations");
    pool
}
