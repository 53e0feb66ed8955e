//! OpenAPI document for the HTTP surface.
//!
//! Paths come from the `#[utoipa::path]` annotations on the handlers.

use filmes_core::patch::{PatchOp, PatchOperation};
use filmes_db::models::movie::{CreateMovie, MovieResponse, UpdateMovie};
use utoipa::OpenApi;

use crate::handlers::movie;

#[derive(OpenApi)]
#[openapi(
    info(title = "Filmes API", description = "CRUD service for movie records"),
    paths(
        movie::create,
        movie::list,
        movie::get_by_id,
        movie::update,
        movie::patch,
        movie::delete,
    ),
    components(schemas(CreateMovie, UpdateMovie, MovieResponse, PatchOperation, PatchOp)),
    tags((name = "filme", description = "Movie records"))
)]
pub struct ApiDoc;
