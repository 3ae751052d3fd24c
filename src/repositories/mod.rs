//! Repositorios de acceso a datos
//!
//! Todo el SQL vive aquí; los controladores nunca tocan el pool directamente.

pub mod certificate_repository;
pub mod course_repository;
pub mod enrollment_repository;
pub mod instructor_repository;
pub mod schedule_repository;
pub mod student_repository;
pub mod user_repository;
pub mod vehicle_repository;
pub mod vr_session_repository;
