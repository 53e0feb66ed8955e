//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the [`MovieStore`](filmes_db::MovieStore) held in
//! `AppState` and map errors via [`AppError`](crate::error::AppError).

pub mod movie;
