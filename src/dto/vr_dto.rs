//! DTOs de sesiones VR

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vr_session::VrSession;

/// Request para registrar los resultados de una sesión VR
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVrSessionRequest {
    pub schedule_id: Uuid,

    #[validate(length(min = 1))]
    pub scenario_id: String,

    #[validate(length(min = 1))]
    pub scenario_name: String,

    /// beginner | intermediate | advanced
    pub difficulty: String,

    #[validate(range(min = 1))]
    pub duration_minutes: i32,

    pub performance_metrics: serde_json::Value,

    #[validate(range(min = 0, max = 100))]
    pub score: Option<i32>,

    pub incidents: Option<serde_json::Value>,
}

/// Estadísticas agregadas del historial VR de un estudiante
#[derive(Debug, Serialize)]
pub struct VrHistoryStats {
    pub total_sessions: i64,
    pub average_score: f64,
    pub pass_rate: f64,
    pub total_time: i64,
}

/// Historial VR: sesiones + agregados
#[derive(Debug, Serialize)]
pub struct VrHistoryResponse {
    pub sessions: Vec<VrSession>,
    pub stats: VrHistoryStats,
}
