//! DTOs de sesiones

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::instructor::Instructor;
use crate::models::schedule::Schedule;

/// Request para reservar una sesión
#[derive(Debug, Deserialize, Validate)]
pub struct CreateScheduleRequest {
    pub enrollment_id: Uuid,
    pub instructor_id: Uuid,
    pub vehicle_id: Option<Uuid>,

    /// theory | practical | vr_simulation | exam
    pub session_type: String,

    pub scheduled_date: NaiveDate,

    /// Formato HH:MM
    pub start_time: String,

    /// Formato HH:MM, estrictamente posterior a start_time
    pub end_time: String,

    pub notes: Option<String>,
}

/// Request para actualizar una sesión (transición de estado, calificación)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateScheduleRequest {
    /// scheduled | confirmed | in_progress | completed | cancelled | no_show
    pub status: Option<String>,

    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,

    pub feedback: Option<String>,
    pub notes: Option<String>,
}

/// Filtros de listado de sesiones
#[derive(Debug, Deserialize)]
pub struct ScheduleFilters {
    pub date: Option<NaiveDate>,
    pub instructor_id: Option<Uuid>,
    pub status: Option<String>,
    pub session_type: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Query de slots disponibles
#[derive(Debug, Deserialize)]
pub struct AvailableSlotsQuery {
    pub date: NaiveDate,
    pub instructor_id: Option<Uuid>,
    /// theory | practical | vr_simulation | exam
    pub session_type: String,
}

/// Slots libres de un instructor para una fecha
#[derive(Debug, Serialize)]
pub struct InstructorSlots {
    pub instructor: Instructor,
    pub available_times: Vec<String>,
}

/// Sesión con nombres de sus relaciones para los listados
#[derive(Debug, Serialize)]
pub struct ScheduleDetail {
    #[serde(flatten)]
    pub schedule: Schedule,
    pub duration_hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_name: Option<String>,
}

impl ScheduleDetail {
    pub fn new(
        schedule: Schedule,
        student_name: Option<String>,
        instructor_name: Option<String>,
        vehicle_name: Option<String>,
    ) -> Self {
        let duration_hours = schedule.duration_hours();
        Self {
            schedule,
            duration_hours,
            student_name,
            instructor_name,
            vehicle_name,
        }
    }
}

/// Parsea un horario HH:MM (acepta HH:MM:SS y descarta los segundos)
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_formats() {
        assert_eq!(
            parse_time("09:30"),
            Some(NaiveTime::from_hms_opt(9, 30, 0).unwrap())
        );
        assert_eq!(
            parse_time("09:30:45"),
            Some(NaiveTime::from_hms_opt(9, 30, 45).unwrap())
        );
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("morning"), None);
    }
}
