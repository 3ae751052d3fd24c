//! Rutas del simulador VR

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::vr_session_controller::VrSessionController;
use crate::dto::common::ApiResponse;
use crate::dto::vr_dto::{CreateVrSessionRequest, VrHistoryResponse};
use crate::middleware::auth::AuthUser;
use crate::models::vr_session::{VrScenario, VrSession};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn vr_routes() -> Router<AppState> {
    Router::new()
        .route("/scenarios", get(list_scenarios))
        .route("/sessions", post(record_session))
        .route("/sessions/:id", get(get_session))
        .route("/student/:student_id/history", get(student_history))
}

async fn list_scenarios(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<VrScenario>>, AppError> {
    let controller = VrSessionController::new(state.pool.clone());
    Ok(Json(controller.scenarios()))
}

async fn record_session(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(request): Json<CreateVrSessionRequest>,
) -> Result<Json<ApiResponse<VrSession>>, AppError> {
    let controller = VrSessionController::new(state.pool.clone());
    let response = controller.store(request).await?;
    Ok(Json(response))
}

async fn get_session(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<VrSession>, AppError> {
    let controller = VrSessionController::new(state.pool.clone());
    let session = controller.get_by_id(id).await?;
    Ok(Json(session))
}

async fn student_history(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(student_id): Path<Uuid>,
) -> Result<Json<VrHistoryResponse>, AppError> {
    auth.require_staff()?;
    let controller = VrSessionController::new(state.pool.clone());
    let history = controller.history_for_student(student_id).await?;
    Ok(Json(history))
}
