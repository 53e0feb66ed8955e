//! Repository for the `filmes` table.

use sqlx::PgPool;
use filmes_core::types::DbId;

use crate::models::movie::{Movie, NewMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, genre, duration";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row with its assigned id.
    pub async fn create(pool: &PgPool, input: &NewMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO filmes (title, genre, duration)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(input.duration)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM filmes WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a window of movies in id (insertion) order.
    pub async fn list(pool: &PgPool, skip: i64, take: i64) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM filmes ORDER BY id ASC LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Movie>(&query)
            .bind(take)
            .bind(skip)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every mutable column of a movie.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE filmes SET
                title = $2,
                genre = $3,
                duration = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(input.duration)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a movie by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM filmes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
