//! Rutas de sesiones y disponibilidad

use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::schedule_controller::ScheduleController;
use crate::dto::common::{ApiResponse, Paginated};
use crate::dto::schedule_dto::{
    AvailableSlotsQuery, CreateScheduleRequest, InstructorSlots, ScheduleDetail,
    ScheduleFilters, UpdateScheduleRequest,
};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn schedule_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_schedules))
        .route("/", post(create_schedule))
        .route("/:id", get(get_schedule))
        .route("/:id", put(update_schedule))
}

/// Montada aparte porque vive en /api/available-slots, no bajo /schedules
pub fn availability_routes() -> Router<AppState> {
    Router::new().route("/available-slots", get(available_slots))
}

async fn list_schedules(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filters): Query<ScheduleFilters>,
) -> Result<Json<Paginated<ScheduleDetail>>, AppError> {
    auth.require_staff()?;
    let controller = ScheduleController::new(state.pool.clone());
    let page = controller.list(filters).await?;
    Ok(Json(page))
}

async fn create_schedule(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(request): Json<CreateScheduleRequest>,
) -> Result<Json<ApiResponse<ScheduleDetail>>, AppError> {
    let controller = ScheduleController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_schedule(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ScheduleDetail>, AppError> {
    let controller = ScheduleController::new(state.pool.clone());
    let detail = controller.get_by_id(id).await?;
    Ok(Json(detail))
}

async fn update_schedule(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateScheduleRequest>,
) -> Result<Json<ApiResponse<ScheduleDetail>>, AppError> {
    auth.require_staff()?;
    let controller = ScheduleController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn available_slots(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<AvailableSlotsQuery>,
) -> Result<Json<Vec<InstructorSlots>>, AppError> {
    let controller = ScheduleController::new(state.pool.clone());
    let slots = controller.available_slots(query).await?;
    Ok(Json(slots))
}
