//! Modelo de Instructor
//!
//! Mapea exactamente a la tabla instructors.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Instructor principal - mapea exactamente a la tabla instructors
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Instructor {
    pub id: Uuid,
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub license_number: String,
    pub license_expiry: NaiveDate,
    pub specializations: Option<serde_json::Value>,
    pub status: String,
    pub hourly_rate: Decimal,
    pub max_daily_hours: i32,
    pub created_at: DateTime<Utc>,
}

impl Instructor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_vr_certified(&self) -> bool {
        self.specializations
            .as_ref()
            .and_then(|s| s.as_array())
            .map(|arr| arr.iter().any(|v| v == "vr_certified"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    fn instructor(specializations: Option<serde_json::Value>) -> Instructor {
        Instructor {
            id: Uuid::new_v4(),
            employee_code: "EMP-001".to_string(),
            first_name: "Carlos".to_string(),
            last_name: "Dizon".to_string(),
            email: "carlos.dizon@example.com".to_string(),
            phone: "+63 917 555 0202".to_string(),
            license_number: "N01-23-456789".to_string(),
            license_expiry: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
            specializations,
            status: "active".to_string(),
            hourly_rate: Decimal::new(50000, 2),
            max_daily_hours: 8,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_vr_certification_from_specializations() {
        assert!(instructor(Some(json!(["defensive", "vr_certified"]))).is_vr_certified());
        assert!(!instructor(Some(json!(["defensive"]))).is_vr_certified());
        assert!(!instructor(None).is_vr_certified());
    }
}
