//! Modelo de Enrollment
//!
//! Matrícula de un estudiante en un curso. Lleva las horas completadas
//! por categoría y el estado de pago contra el precio del curso.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::course::Course;

/// Estados válidos de una matrícula
pub const ENROLLMENT_STATUSES: [&str; 4] = ["active", "completed", "expired", "cancelled"];

/// Estados de pago válidos
pub const PAYMENT_STATUSES: [&str; 3] = ["pending", "partial", "paid"];

/// Enrollment principal - mapea exactamente a la tabla enrollments
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Enrollment {
    pub id: Uuid,
    pub enrollment_number: String,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub enrollment_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub status: String,
    pub amount_paid: Decimal,
    pub balance: Decimal,
    pub payment_status: String,
    pub theory_hours_completed: f64,
    pub practical_hours_completed: f64,
    pub vr_hours_completed: f64,
    pub created_at: DateTime<Utc>,
}

impl Enrollment {
    /// Porcentaje de avance: horas completadas / horas requeridas × 100,
    /// redondeado a un decimal. Valor derivado, nunca almacenado.
    pub fn progress_percentage(&self, course: &Course) -> f64 {
        let total_required = course.total_hours();
        if total_required <= 0.0 {
            return 0.0;
        }

        let total_completed = self.theory_hours_completed
            + self.practical_hours_completed
            + self.vr_hours_completed;

        ((total_completed / total_required) * 1000.0).round() / 10.0
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date < today
    }

    pub fn is_completed(&self) -> bool {
        self.status == "completed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn course(theory: f64, practical: f64, vr: f64) -> Course {
        Course {
            id: Uuid::new_v4(),
            code: "B-STD".to_string(),
            name: "Standard License B".to_string(),
            description: None,
            license_type: "non-pro".to_string(),
            theory_hours: theory,
            practical_hours: practical,
            vr_simulation_hours: vr,
            price: Decimal::new(550000, 2),
            validity_days: 365,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn enrollment(theory: f64, practical: f64, vr: f64) -> Enrollment {
        Enrollment {
            id: Uuid::new_v4(),
            enrollment_number: "ENR-202412-0001".to_string(),
            student_id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            enrollment_date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            status: "active".to_string(),
            amount_paid: Decimal::ZERO,
            balance: Decimal::new(550000, 2),
            payment_status: "pending".to_string(),
            theory_hours_completed: theory,
            practical_hours_completed: practical,
            vr_hours_completed: vr,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_progress_percentage_rounds_to_one_decimal() {
        let course = course(15.0, 20.0, 10.0);
        let e = enrollment(5.0, 7.0, 3.0);
        // 15 de 45 = 33.333... -> 33.3
        assert_eq!(e.progress_percentage(&course), 33.3);
    }

    #[test]
    fn test_progress_percentage_zero_required_hours() {
        let course = course(0.0, 0.0, 0.0);
        let e = enrollment(5.0, 0.0, 0.0);
        assert_eq!(e.progress_percentage(&course), 0.0);
    }

    #[test]
    fn test_is_expired() {
        let e = enrollment(0.0, 0.0, 0.0);
        assert!(!e.is_expired(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()));
        assert!(e.is_expired(NaiveDate::from_ymd_opt(2025, 12, 2).unwrap()));
    }
}
