use async_trait::async_trait;
use filmes_core::types::DbId;

use super::{MovieStore, StoreError};
use crate::models::movie::{Movie, NewMovie};
use crate::repositories::MovieRepo;
use crate::DbPool;

/// [`MovieStore`] backed by PostgreSQL through [`MovieRepo`].
#[derive(Clone)]
pub struct PgMovieStore {
    pool: DbPool,
}

impl PgMovieStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn create(&self, input: NewMovie) -> Result<Movie, StoreError> {
        Ok(MovieRepo::create(&self.pool, &input).await?)
    }

    async fn list(&self, skip: i64, take: i64) -> Result<Vec<Movie>, StoreError> {
        Ok(MovieRepo::list(&self.pool, skip, take).await?)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, StoreError> {
        Ok(MovieRepo::find_by_id(&self.pool, id).await?)
    }

    async fn update(&self, id: DbId, input: NewMovie) -> Result<Option<Movie>, StoreError> {
        Ok(MovieRepo::update(&self.pool, id, &input).await?)
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(MovieRepo::delete(&self.pool, id).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
