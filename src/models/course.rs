//! Modelo de Course
//!
//! Catálogo fijo de cursos: horas requeridas por categoría y precio.
//! Inmutable durante la vida de una matrícula.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Course principal - mapea exactamente a la tabla courses
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub license_type: String,
    pub theory_hours: f64,
    pub practical_hours: f64,
    pub vr_simulation_hours: f64,
    pub price: Decimal,
    pub validity_days: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Course {
    pub fn total_hours(&self) -> f64 {
        self.theory_hours + self.practical_hours + self.vr_simulation_hours
    }
}
