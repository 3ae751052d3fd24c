//! DTOs de la API
//!
//! Requests con validación y responses serializables.

pub mod auth_dto;
pub mod certificate_dto;
pub mod common;
pub mod dashboard_dto;
pub mod enrollment_dto;
pub mod schedule_dto;
pub mod student_dto;
pub mod vehicle_dto;
pub mod vr_dto;
