//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus variantes para CRUD operations.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estados válidos de un vehículo
pub const VEHICLE_STATUSES: [&str; 4] = ["available", "in_use", "maintenance", "retired"];

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub plate_number: String,
    pub make: String,
    pub model: String,
    pub year: Option<i32>,
    pub transmission: Option<String>,
    pub vehicle_type: Option<String>,
    pub status: String,
    pub registration_expiry: Option<NaiveDate>,
    pub insurance_expiry: Option<NaiveDate>,
    pub last_maintenance: Option<NaiveDate>,
    pub next_maintenance: Option<NaiveDate>,
    pub mileage: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn display_name(&self) -> String {
        format!("{} {} ({})", self.make, self.model, self.plate_number)
    }

    /// Mantenimiento vence dentro de los próximos 7 días
    pub fn needs_maintenance(&self, today: NaiveDate) -> bool {
        self.next_maintenance
            .map(|next| next <= today + chrono::Duration::days(7))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn vehicle(next_maintenance: Option<NaiveDate>) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            plate_number: "ABC-1234".to_string(),
            make: "Toyota".to_string(),
            model: "Vios".to_string(),
            year: Some(2022),
            transmission: Some("manual".to_string()),
            vehicle_type: Some("sedan".to_string()),
            status: "available".to_string(),
            registration_expiry: None,
            insurance_expiry: None,
            last_maintenance: None,
            next_maintenance,
            mileage: Some(42000),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(vehicle(None).display_name(), "Toyota Vios (ABC-1234)");
    }

    #[test]
    fn test_needs_maintenance_within_a_week() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert!(vehicle(NaiveDate::from_ymd_opt(2024, 12, 5)).needs_maintenance(today));
        assert!(!vehicle(NaiveDate::from_ymd_opt(2025, 1, 15)).needs_maintenance(today));
        assert!(!vehicle(None).needs_maintenance(today));
    }
}
