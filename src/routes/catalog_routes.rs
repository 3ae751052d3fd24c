//! Rutas de catálogos (cursos, instructores) y certificados

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::certificate_controller::CertificateController;
use crate::dto::certificate_dto::IssueCertificateRequest;
use crate::dto::common::ApiResponse;
use crate::middleware::auth::AuthUser;
use crate::models::certificate::Certificate;
use crate::models::course::Course;
use crate::models::instructor::Instructor;
use crate::repositories::course_repository::CourseRepository;
use crate::repositories::instructor_repository::InstructorRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/courses", get(list_courses))
        .route("/instructors", get(list_instructors))
        .route("/certificates", post(issue_certificate))
}

async fn list_courses(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<Course>>, AppError> {
    let repository = CourseRepository::new(state.pool.clone());
    let courses = repository.list_active().await?;
    Ok(Json(courses))
}

async fn list_instructors(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<Instructor>>, AppError> {
    let repository = InstructorRepository::new(state.pool.clone());
    let instructors = repository.list_active().await?;
    Ok(Json(instructors))
}

async fn issue_certificate(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<IssueCertificateRequest>,
) -> Result<Json<ApiResponse<Certificate>>, AppError> {
    auth.require_admin()?;
    let controller = CertificateController::new(state.pool.clone());
    let response = controller.issue(request).await?;
    Ok(Json(response))
}
