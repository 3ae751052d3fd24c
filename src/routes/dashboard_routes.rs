//! Rutas de dashboards

use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::dashboard_dto::AdminDashboardResponse;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(admin_dashboard))
}

async fn admin_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<AdminDashboardResponse>, AppError> {
    auth.require_admin()?;
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.admin_dashboard().await?;
    Ok(Json(response))
}
