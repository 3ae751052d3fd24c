//! Rutas de los portales de estudiante e instructor
//!
//! Todas resuelven el sujeto desde el token, nunca desde la URL.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::certificate_controller::CertificateController;
use crate::controllers::dashboard_controller::DashboardController;
use crate::controllers::enrollment_controller::EnrollmentController;
use crate::controllers::schedule_controller::ScheduleController;
use crate::controllers::student_controller::StudentController;
use crate::controllers::vr_session_controller::VrSessionController;
use crate::dto::common::{Paginated, PaginationQuery};
use crate::dto::dashboard_dto::{InstructorDashboardResponse, StudentDashboardResponse};
use crate::dto::enrollment_dto::EnrollmentDetail;
use crate::dto::schedule_dto::{ScheduleDetail, ScheduleFilters};
use crate::dto::vr_dto::VrHistoryResponse;
use crate::middleware::auth::AuthUser;
use crate::models::certificate::Certificate;
use crate::models::student::Student;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn student_portal_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(student_dashboard))
        .route("/schedules", get(my_schedules))
        .route("/progress", get(my_progress))
        .route("/certificates", get(my_certificates))
        .route("/vr-history", get(vr_history))
}

pub fn instructor_portal_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(instructor_dashboard))
        .route("/schedules", get(instructor_schedules))
        .route("/students", get(instructor_students))
}

async fn student_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<StudentDashboardResponse>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.student_dashboard(auth).await?;
    Ok(Json(response))
}

async fn my_schedules(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<Paginated<ScheduleDetail>>, AppError> {
    let controller = ScheduleController::new(state.pool.clone());
    let page = controller.my_schedules(auth, pagination).await?;
    Ok(Json(page))
}

async fn my_progress(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Option<EnrollmentDetail>>, AppError> {
    let controller = EnrollmentController::new(state.pool.clone());
    let detail = controller.my_progress(auth).await?;
    Ok(Json(detail))
}

async fn my_certificates(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Certificate>>, AppError> {
    let controller = CertificateController::new(state.pool.clone());
    let certificates = controller.my_certificates(auth).await?;
    Ok(Json(certificates))
}

async fn vr_history(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<VrHistoryResponse>, AppError> {
    let controller = VrSessionController::new(state.pool.clone());
    let history = controller.student_history(auth).await?;
    Ok(Json(history))
}

async fn instructor_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<InstructorDashboardResponse>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.instructor_dashboard(auth).await?;
    Ok(Json(response))
}

async fn instructor_schedules(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filters): Query<ScheduleFilters>,
) -> Result<Json<Paginated<ScheduleDetail>>, AppError> {
    let controller = ScheduleController::new(state.pool.clone());
    let page = controller.instructor_schedules(auth, filters).await?;
    Ok(Json(page))
}

async fn instructor_students(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Student>>, AppError> {
    let instructor_id = auth
        .instructor_id
        .ok_or_else(|| AppError::Forbidden("Instructor account required".to_string()))?;
    let controller = StudentController::new(state.pool.clone());
    let students = controller.list_by_instructor(instructor_id).await?;
    Ok(Json(students))
}
