//! Handler for the world-clock endpoint.

use super::error::ApiError;
use crate::clock;

use axum::Json;
use axum::extract::Query;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub(super) struct ClockQuery {
    #[serde(default = "default_zone")]
    tz: String,
}

fn default_zone() -> String {
    "UTC".to_string()
}

#[derive(Serialize)]
pub(super) struct ClockResponse {
    tz: &'static str,
    iso: String,
    epoch_ms: i64,
}

/// GET /clock?tz=KEY: current time in an allow-listed zone (default UTC).
pub(super) async fn get_clock(
    Query(query): Query<ClockQuery>,
) -> Result<Json<ClockResponse>, ApiError> {
    let time = clock::resolve(&query.tz)?;
    Ok(Json(ClockResponse {
        tz: time.zone,
        iso: time.iso,
        epoch_ms: time.epoch_ms,
    }))
}
