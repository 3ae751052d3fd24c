//! Modelo de VrSession
//!
//! Resultados de una sesión de simulador VR ligada a un schedule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Nota mínima para aprobar un escenario VR
pub const VR_PASSING_SCORE: i32 = 70;

/// VrSession principal - mapea exactamente a la tabla vr_sessions
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VrSession {
    pub id: Uuid,
    pub schedule_id: Uuid,
    pub scenario_id: String,
    pub scenario_name: String,
    pub difficulty: String,
    pub duration_minutes: i32,
    pub performance_metrics: serde_json::Value,
    pub score: Option<i32>,
    pub passed: bool,
    pub incidents: Option<serde_json::Value>,
    pub ai_feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Escenario del catálogo VR
#[derive(Debug, Clone, Serialize)]
pub struct VrScenario {
    pub id: &'static str,
    pub name: &'static str,
    pub difficulty: &'static str,
}

/// Catálogo fijo de escenarios disponibles
pub fn vr_scenarios() -> Vec<VrScenario> {
    vec![
        VrScenario { id: "city_basic", name: "City Driving - Basic", difficulty: "beginner" },
        VrScenario { id: "city_traffic", name: "City Driving - Heavy Traffic", difficulty: "intermediate" },
        VrScenario { id: "highway", name: "Highway Driving", difficulty: "intermediate" },
        VrScenario { id: "night_driving", name: "Night Driving", difficulty: "intermediate" },
        VrScenario { id: "rain_conditions", name: "Rainy Conditions", difficulty: "advanced" },
        VrScenario { id: "emergency", name: "Emergency Situations", difficulty: "advanced" },
        VrScenario { id: "parking", name: "Parking Scenarios", difficulty: "beginner" },
        VrScenario { id: "mountain", name: "Mountain Roads", difficulty: "advanced" },
    ]
}
