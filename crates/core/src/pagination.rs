//! Skip/take window helpers for list endpoints.

/// Number of records returned when `take` is omitted.
pub const DEFAULT_TAKE: i64 = 50;

/// Hard ceiling on `take` when the server config does not override it.
pub const MAX_TAKE: i64 = 200;

/// Clamp a user-provided `take` into `0..=max`, defaulting to [`DEFAULT_TAKE`].
pub fn clamp_take(take: Option<i64>, max: i64) -> i64 {
    take.unwrap_or(DEFAULT_TAKE).clamp(0, max.max(0))
}

/// Clamp a user-provided `skip` to non-negative.
pub fn clamp_skip(skip: Option<i64>) -> i64 {
    skip.unwrap_or(0).max(0)
}
