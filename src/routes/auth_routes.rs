//! Rutas de autenticación y perfil

use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, UpdateProfileRequest};
use crate::middleware::auth::AuthUser;
use crate::models::user::User;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/me", get(me))
        .route("/profile", put(update_profile))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.jwt_config());
    let response = controller.login(request).await?;
    Ok(Json(response))
}

async fn me(State(state): State<AppState>, auth: AuthUser) -> Result<Json<User>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.jwt_config());
    let user = controller.me(auth).await?;
    Ok(Json(user))
}

async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<User>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.jwt_config());
    let user = controller.update_profile(auth, request).await?;
    Ok(Json(user))
}
