use std::collections::BTreeMap;

use async_trait::async_trait;
use filmes_core::types::DbId;
use tokio::sync::RwLock;

use super::{MovieStore, StoreError};
use crate::models::movie::{Movie, NewMovie};

/// Process-local [`MovieStore`].
///
/// Ids start at 1 and are never reused, even after a delete, matching
/// BIGSERIAL behaviour.
#[derive(Default)]
pub struct InMemoryMovieStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: DbId,
    rows: BTreeMap<DbId, Movie>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn create(&self, input: NewMovie) -> Result<Movie, StoreError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let movie = Movie {
            id: inner.last_id,
            title: input.title,
            genre: input.genre,
            duration: input.duration,
        };
        inner.rows.insert(movie.id, movie.clone());
        Ok(movie)
    }

    async fn list(&self, skip: i64, take: i64) -> Result<Vec<Movie>, StoreError> {
        let skip = usize::try_from(skip).unwrap_or(0);
        let take = usize::try_from(take).unwrap_or(0);
        let inner = self.inner.read().await;
        Ok(inner.rows.values().skip(skip).take(take).cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Movie>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn update(&self, id: DbId, input: NewMovie) -> Result<Option<Movie>, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.get_mut(&id).map(|movie| {
            movie.title = input.title;
            movie.genre = input.genre;
            movie.duration = input.duration;
            movie.clone()
        }))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }
}
