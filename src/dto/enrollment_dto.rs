//! DTOs de matrículas

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;
use uuid::Uuid;

use crate::models::course::Course;
use crate::models::enrollment::Enrollment;
use crate::models::student::Student;

/// Request para crear una matrícula
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEnrollmentRequest {
    pub student_id: Uuid,
    pub course_id: Uuid,
    /// Pago inicial, puede ser cero
    pub amount_paid: Decimal,
}

/// Request para registrar un pago
#[derive(Debug, Deserialize, Validate)]
pub struct AddPaymentRequest {
    pub amount: Decimal,
}

/// Request para fijar manualmente los contadores de progreso
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProgressRequest {
    #[validate(range(min = 0.0))]
    pub theory_hours: Option<f64>,

    #[validate(range(min = 0.0))]
    pub practical_hours: Option<f64>,

    #[validate(range(min = 0.0))]
    pub vr_hours: Option<f64>,
}

/// Filtros de listado de matrículas
#[derive(Debug, Deserialize)]
pub struct EnrollmentFilters {
    pub status: Option<String>,
    pub payment_status: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Matrícula con sus relaciones cargadas y el avance derivado
#[derive(Debug, Serialize)]
pub struct EnrollmentDetail {
    #[serde(flatten)]
    pub enrollment: Enrollment,
    pub progress_percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<Student>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<Course>,
}

impl EnrollmentDetail {
    pub fn new(enrollment: Enrollment, student: Option<Student>, course: Option<Course>) -> Self {
        let progress_percentage = course
            .as_ref()
            .map(|c| enrollment.progress_percentage(c))
            .unwrap_or(0.0);

        Self {
            enrollment,
            progress_percentage,
            student,
            course,
        }
    }
}
