//! Rutas de estudiantes (administración)

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::student_controller::StudentController;
use crate::dto::common::{ApiResponse, Paginated};
use crate::dto::student_dto::{CreateStudentRequest, StudentFilters, UpdateStudentRequest};
use crate::middleware::auth::AuthUser;
use crate::models::student::Student;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students))
        .route("/", post(create_student))
        .route("/:id", get(get_student))
        .route("/:id", put(update_student))
        .route("/:id", delete(archive_student))
}

async fn list_students(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filters): Query<StudentFilters>,
) -> Result<Json<Paginated<Student>>, AppError> {
    auth.require_staff()?;
    let controller = StudentController::new(state.pool.clone());
    let page = controller.list(filters).await?;
    Ok(Json(page))
}

async fn create_student(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<CreateStudentRequest>,
) -> Result<Json<ApiResponse<Student>>, AppError> {
    auth.require_admin()?;
    let controller = StudentController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_student(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Student>, AppError> {
    auth.require_staff()?;
    let controller = StudentController::new(state.pool.clone());
    let student = controller.get_by_id(id).await?;
    Ok(Json(student))
}

async fn update_student(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStudentRequest>,
) -> Result<Json<ApiResponse<Student>>, AppError> {
    auth.require_admin()?;
    let controller = StudentController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn archive_student(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    auth.require_admin()?;
    let controller = StudentController::new(state.pool.clone());
    controller.archive(id).await?;
    Ok(Json(ApiResponse::success_with_message(
        (),
        "Student archived successfully".to_string(),
    )))
}
