//! DTOs de estudiantes

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

/// Request para registrar un estudiante
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, max = 255))]
    pub first_name: String,

    #[validate(length(min = 1, max = 255))]
    pub last_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 20))]
    pub phone: String,

    pub birth_date: NaiveDate,

    #[validate(length(min = 1))]
    pub address: String,

    /// non-pro | professional | motorcycle
    pub license_type: String,

    #[validate(length(max = 255))]
    pub emergency_contact_name: Option<String>,

    #[validate(length(max = 20))]
    pub emergency_contact_phone: Option<String>,

    pub medical_conditions: Option<serde_json::Value>,
}

/// Request para actualizar un estudiante existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStudentRequest {
    #[validate(length(min = 1, max = 255))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub last_name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 20))]
    pub phone: Option<String>,

    pub address: Option<String>,

    /// pending | enrolled | in_progress | completed | dropped
    pub status: Option<String>,

    #[validate(length(max = 255))]
    pub emergency_contact_name: Option<String>,

    #[validate(length(max = 20))]
    pub emergency_contact_phone: Option<String>,
}

/// Filtros para búsqueda de estudiantes
#[derive(Debug, Deserialize)]
pub struct StudentFilters {
    pub search: Option<String>,
    pub status: Option<String>,
    pub license_type: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
