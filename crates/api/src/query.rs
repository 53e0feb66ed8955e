//! Shared query parameter types for API handlers.

use serde::Deserialize;
use utoipa::IntoParams;

/// Skip/take pagination parameters (`?skip=&take=`).
///
/// Values are clamped in the handler via `clamp_skip` / `clamp_take`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SkipTakeParams {
    /// Records to skip. Negative values count as 0.
    pub skip: Option<i64>,
    /// Page size, 50 when absent, capped by `MAX_PAGE_SIZE`.
    pub take: Option<i64>,
}
