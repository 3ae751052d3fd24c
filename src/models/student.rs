//! Modelo de Student
//!
//! Este módulo contiene el struct Student y sus estados.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estados válidos de un estudiante
pub const STUDENT_STATUSES: [&str; 5] =
    ["pending", "enrolled", "in_progress", "completed", "dropped"];

/// Tipos de licencia válidos
pub const LICENSE_TYPES: [&str; 3] = ["non-pro", "professional", "motorcycle"];

/// Student principal - mapea exactamente a la tabla students
///
/// El archivado es un estado explícito (`archived`), no un soft-delete
/// implícito: DELETE marca el registro como archivado y los listados
/// lo excluyen.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: Uuid,
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub license_type: String,
    pub status: String,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub medical_conditions: Option<serde_json::Value>,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Edad en años cumplidos a la fecha indicada
    pub fn age_at(&self, today: NaiveDate) -> i32 {
        let mut age = today.years_since(self.birth_date).unwrap_or(0) as i32;
        if age < 0 {
            age = 0;
        }
        age
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn student(birth_date: NaiveDate) -> Student {
        Student {
            id: Uuid::new_v4(),
            student_code: "STU-2024-00001".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Reyes".to_string(),
            email: "ana.reyes@example.com".to_string(),
            phone: "+63 912 555 0101".to_string(),
            birth_date,
            address: "Quezon City".to_string(),
            license_type: "non-pro".to_string(),
            status: "pending".to_string(),
            emergency_contact_name: None,
            emergency_contact_phone: None,
            medical_conditions: None,
            archived: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_full_name() {
        let s = student(NaiveDate::from_ymd_opt(2000, 6, 15).unwrap());
        assert_eq!(s.full_name(), "Ana Reyes");
    }

    #[test]
    fn test_age_at_counts_completed_years() {
        let s = student(NaiveDate::from_ymd_opt(2000, 6, 15).unwrap());
        // Un día antes del cumpleaños todavía no suma el año
        assert_eq!(s.age_at(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()), 23);
        assert_eq!(s.age_at(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()), 24);
    }
}
