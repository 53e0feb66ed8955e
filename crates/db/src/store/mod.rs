//! Store abstraction handed to the HTTP layer.
//!
//! Handlers only ever see `Arc<dyn MovieStore>`, so the PostgreSQL backend
//! can be swapped for [`InMemoryMovieStore`] in tests or local runs.

use async_trait::async_trait;
use filmes_core::types::DbId;

use crate::models::movie::{Movie, NewMovie};

mod memory;
mod postgres;

pub use memory::InMemoryMovieStore;
pub use postgres::PgMovieStore;

/// Failure reported by a store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Persistence operations for movie records.
#[async_trait]
pub trait MovieStore: Send + Sync + 'static {
    /// Persist a new record and return it with its assigned id.
    async fn create(&self, input: NewMovie) -> Result<Movie, StoreError>;

    /// Return up to `take` records after skipping `skip`, in id order.
    async fn list(&self, skip: i64, take: i64) -> Result<Vec<Movie>, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, StoreError>;

    /// Overwrite every mutable field. `None` if the id does not exist.
    async fn update(&self, id: DbId, input: NewMovie) -> Result<Option<Movie>, StoreError>;

    /// Remove a record. `true` if something was deleted.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
