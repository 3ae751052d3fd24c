pub mod auth_controller;
pub mod certificate_controller;
pub mod dashboard_controller;
pub mod enrollment_controller;
pub mod schedule_controller;
pub mod student_controller;
pub mod vehicle_controller;
pub mod vr_session_controller;
