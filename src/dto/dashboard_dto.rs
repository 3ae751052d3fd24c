//! DTOs del dashboard

use rust_decimal::Decimal;
use serde::Serialize;

use crate::dto::enrollment_dto::EnrollmentDetail;
use crate::dto::schedule_dto::ScheduleDetail;

/// Contadores principales del dashboard de administración
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_students: i64,
    pub active_enrollments: i64,
    pub todays_sessions: i64,
    pub monthly_revenue: Decimal,
    pub pending_payments: Decimal,
    pub active_instructors: i64,
    pub available_vehicles: i64,
    pub certificates_issued: i64,
}

/// Punto de la serie de matrículas por mes
#[derive(Debug, Serialize)]
pub struct TrendPoint {
    pub month: String,
    pub count: i64,
}

/// Conteo de sesiones por tipo
#[derive(Debug, Serialize)]
pub struct SessionDistribution {
    pub theory: i64,
    pub practical: i64,
    pub vr_simulation: i64,
    pub exam: i64,
}

/// Dashboard de administración
#[derive(Debug, Serialize)]
pub struct AdminDashboardResponse {
    pub stats: DashboardStats,
    pub todays_schedule: Vec<ScheduleDetail>,
    pub recent_enrollments: Vec<EnrollmentDetail>,
    pub enrollment_trend: Vec<TrendPoint>,
    pub session_distribution: SessionDistribution,
}

/// Estadísticas del portal del estudiante
#[derive(Debug, Serialize)]
pub struct StudentDashboardStats {
    pub completed_sessions: i64,
    pub certificates_earned: i64,
    pub progress: f64,
}

/// Dashboard del estudiante
#[derive(Debug, Serialize)]
pub struct StudentDashboardResponse {
    pub enrollment: Option<EnrollmentDetail>,
    pub upcoming_schedules: Vec<ScheduleDetail>,
    pub stats: StudentDashboardStats,
}

/// Estadísticas del portal del instructor
#[derive(Debug, Serialize)]
pub struct InstructorDashboardStats {
    pub todays_sessions: i64,
    pub completed_this_week: i64,
    pub assigned_students: i64,
}

/// Dashboard del instructor
#[derive(Debug, Serialize)]
pub struct InstructorDashboardResponse {
    pub todays_schedule: Vec<ScheduleDetail>,
    pub stats: InstructorDashboardStats,
}
