//! Modelo de Schedule
//!
//! Sesión reservada (teórica, práctica, VR o examen). Las sesiones nunca
//! se eliminan físicamente: el ciclo de vida es vía status.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipo de sesión - mapea al ENUM session_type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionType {
    Theory,
    Practical,
    VrSimulation,
    Exam,
}

impl SessionType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "theory" => Some(Self::Theory),
            "practical" => Some(Self::Practical),
            "vr_simulation" => Some(Self::VrSimulation),
            "exam" => Some(Self::Exam),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Theory => "theory",
            Self::Practical => "practical",
            Self::VrSimulation => "vr_simulation",
            Self::Exam => "exam",
        }
    }

    /// Las sesiones prácticas y de examen ocupan un vehículo
    pub fn uses_vehicle(&self) -> bool {
        matches!(self, Self::Practical | Self::Exam)
    }
}

/// Estados válidos de una sesión
pub const SCHEDULE_STATUSES: [&str; 6] = [
    "scheduled",
    "confirmed",
    "in_progress",
    "completed",
    "cancelled",
    "no_show",
];

/// Schedule principal - mapea exactamente a la tabla schedules
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Schedule {
    pub id: Uuid,
    pub enrollment_id: Uuid,
    pub instructor_id: Uuid,
    pub vehicle_id: Option<Uuid>,
    pub session_type: String,
    pub scheduled_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
    pub notes: Option<String>,
    pub rating: Option<i32>,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Schedule {
    /// Duración en horas: minutos entre inicio y fin / 60
    pub fn duration_hours(&self) -> f64 {
        let minutes = (self.end_time - self.start_time).num_minutes();
        minutes as f64 / 60.0
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(start: (u32, u32), end: (u32, u32)) -> Schedule {
        Schedule {
            id: Uuid::new_v4(),
            enrollment_id: Uuid::new_v4(),
            instructor_id: Uuid::new_v4(),
            vehicle_id: None,
            session_type: "practical".to_string(),
            scheduled_date: NaiveDate::from_ymd_opt(2024, 12, 27).unwrap(),
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            status: "scheduled".to_string(),
            notes: None,
            rating: None,
            feedback: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_duration_hours() {
        assert_eq!(schedule((9, 0), (11, 0)).duration_hours(), 2.0);
        assert_eq!(schedule((9, 0), (10, 30)).duration_hours(), 1.5);
    }

    #[test]
    fn test_session_type_parse() {
        assert_eq!(SessionType::parse("theory"), Some(SessionType::Theory));
        assert_eq!(
            SessionType::parse("vr_simulation"),
            Some(SessionType::VrSimulation)
        );
        assert_eq!(SessionType::parse("invalid"), None);
    }

    #[test]
    fn test_uses_vehicle() {
        assert!(SessionType::Practical.uses_vehicle());
        assert!(SessionType::Exam.uses_vehicle());
        assert!(!SessionType::Theory.uses_vehicle());
        assert!(!SessionType::VrSimulation.uses_vehicle());
    }
}
