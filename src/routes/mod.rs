pub mod auth_routes;
pub mod catalog_routes;
pub mod dashboard_routes;
pub mod enrollment_routes;
pub mod portal_routes;
pub mod schedule_routes;
pub mod student_routes;
pub mod vehicle_routes;
pub mod vr_routes;

use axum::Router;

use crate::state::AppState;

/// Árbol de rutas completo bajo /api
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(auth_routes::auth_routes())
        .merge(dashboard_routes::dashboard_routes())
        .merge(catalog_routes::catalog_routes())
        .merge(schedule_routes::availability_routes())
        .nest("/students", student_routes::student_routes())
        .nest("/enrollments", enrollment_routes::enrollment_routes())
        .nest("/schedules", schedule_routes::schedule_routes())
        .nest("/vehicles", vehicle_routes::vehicle_routes())
        .nest("/vr", vr_routes::vr_routes())
        .nest("/student", portal_routes::student_portal_routes())
        .nest("/instructor", portal_routes::instructor_portal_routes())
}
