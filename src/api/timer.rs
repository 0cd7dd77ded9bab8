//! Handlers for the stopwatch endpoints.

use super::error::ApiError;
use super::state::ApiState;
use crate::stopwatch::{Lap, TimerState};

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use std::sync::Arc;

/// Wire shape of one lap, as returned by `POST /timer/lap` and inside the
/// `laps` array of `GET /timer`.
#[derive(Serialize)]
pub(super) struct LapBody {
    lap_index: u32,
    lap_elapsed_ms: u64,
    total_elapsed_ms: u64,
}

impl From<Lap> for LapBody {
    fn from(lap: Lap) -> Self {
        Self {
            lap_index: lap.index,
            lap_elapsed_ms: lap.interval_ms,
            total_elapsed_ms: lap.cumulative_ms,
        }
    }
}

#[derive(Serialize)]
pub(super) struct TimerResponse {
    state: TimerState,
    elapsed_ms: u64,
    laps: Vec<LapBody>,
}

#[derive(Serialize)]
pub(super) struct TransitionResponse {
    state: TimerState,
    elapsed_ms: u64,
}

#[derive(Serialize)]
pub(super) struct ResetResponse {
    state: TimerState,
    elapsed_ms: u64,
    laps: Vec<LapBody>,
}

/// GET /timer: snapshot of state, elapsed time, and recorded laps.
pub(super) async fn get_timer(State(state): State<Arc<ApiState>>) -> Json<TimerResponse> {
    let snapshot = state.stopwatch.lock().await.snapshot();
    Json(TimerResponse {
        state: snapshot.state,
        elapsed_ms: snapshot.elapsed_ms,
        laps: snapshot.laps.into_iter().map(LapBody::from).collect(),
    })
}

/// POST /timer/start: stopped to running; 409 if already running.
pub(super) async fn start_timer(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<TransitionResponse>, ApiError> {
    let transition = state.stopwatch.lock().await.start()?;
    Ok(Json(TransitionResponse {
        state: transition.state,
        elapsed_ms: transition.elapsed_ms,
    }))
}

/// POST /timer/stop: running to stopped, reporting the banked total.
pub(super) async fn stop_timer(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<TransitionResponse>, ApiError> {
    let transition = state.stopwatch.lock().await.stop()?;
    Ok(Json(TransitionResponse {
        state: transition.state,
        elapsed_ms: transition.elapsed_ms,
    }))
}

/// POST /timer/lap: record a checkpoint; 201 with the created lap.
pub(super) async fn lap_timer(
    State(state): State<Arc<ApiState>>,
) -> Result<(StatusCode, Json<LapBody>), ApiError> {
    let lap = state.stopwatch.lock().await.lap()?;
    Ok((StatusCode::CREATED, Json(lap.into())))
}

/// POST /timer/reset: clear banked time and laps; 409 while running.
pub(super) async fn reset_timer(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ResetResponse>, ApiError> {
    let transition = state.stopwatch.lock().await.reset()?;
    Ok(Json(ResetResponse {
        state: transition.state,
        elapsed_ms: transition.elapsed_ms,
        laps: Vec::new(),
    }))
}
