//! Rutas de matrículas: CRUD, pagos y progreso

use axum::{
    extract::{Path, Query, State},
    routing::{get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::enrollment_controller::EnrollmentController;
use crate::dto::common::{ApiResponse, Paginated};
use crate::dto::enrollment_dto::{
    AddPaymentRequest, CreateEnrollmentRequest, EnrollmentDetail, EnrollmentFilters,
    UpdateProgressRequest,
};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn enrollment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_enrollments))
        .route("/", post(create_enrollment))
        .route("/:id", get(get_enrollment))
        .route("/:id/payment", post(add_payment))
        .route("/:id/progress", patch(update_progress))
}

async fn list_enrollments(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filters): Query<EnrollmentFilters>,
) -> Result<Json<Paginated<EnrollmentDetail>>, AppError> {
    auth.require_staff()?;
    let controller = EnrollmentController::new(state.pool.clone());
    let page = controller.list(filters).await?;
    Ok(Json(page))
}

async fn create_enrollment(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<CreateEnrollmentRequest>,
) -> Result<Json<ApiResponse<EnrollmentDetail>>, AppError> {
    auth.require_admin()?;
    let controller = EnrollmentController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_enrollment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<EnrollmentDetail>, AppError> {
    auth.require_staff()?;
    let controller = EnrollmentController::new(state.pool.clone());
    let detail = controller.get_by_id(id).await?;
    Ok(Json(detail))
}

async fn add_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<AddPaymentRequest>,
) -> Result<Json<ApiResponse<EnrollmentDetail>>, AppError> {
    auth.require_admin()?;
    let controller = EnrollmentController::new(state.pool.clone());
    let response = controller.add_payment(id, request).await?;
    Ok(Json(response))
}

async fn update_progress(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateProgressRequest>,
) -> Result<Json<ApiResponse<EnrollmentDetail>>, AppError> {
    auth.require_staff()?;
    let controller = EnrollmentController::new(state.pool.clone());
    let response = controller.update_progress(id, request).await?;
    Ok(Json(response))
}
