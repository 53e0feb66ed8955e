pub mod docs;
pub mod health;
pub mod movie;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /filme          list, create
/// /filme/{id}     get, update, patch, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/filme", movie::router())
}
