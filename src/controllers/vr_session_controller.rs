//! Controlador de sesiones VR
//!
//! Registra los resultados del simulador, marca la sesión de agenda como
//! completada (lo que dispara la contabilidad de progreso por el mismo
//! camino que el resto de sesiones) y expone el catálogo de escenarios y
//! el historial del estudiante.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::controllers::schedule_controller::ScheduleController;
use crate::dto::common::ApiResponse;
use crate::dto::vr_dto::{CreateVrSessionRequest, VrHistoryResponse, VrHistoryStats};
use crate::middleware::auth::AuthUser;
use crate::models::vr_session::{vr_scenarios, VrScenario, VrSession};
use crate::repositories::schedule_repository::ScheduleRepository;
use crate::repositories::vr_session_repository::VrSessionRepository;
use crate::services::vr_service::{generate_feedback, is_passing_score};
use crate::utils::errors::AppError;

pub struct VrSessionController {
    vr_sessions: VrSessionRepository,
    schedules: ScheduleRepository,
    schedule_controller: ScheduleController,
}

impl VrSessionController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            vr_sessions: VrSessionRepository::new(pool.clone()),
            schedules: ScheduleRepository::new(pool.clone()),
            schedule_controller: ScheduleController::new(pool),
        }
    }

    /// Catálogo fijo de escenarios disponibles
    pub fn scenarios(&self) -> Vec<VrScenario> {
        vr_scenarios()
    }

    /// Registra los resultados de una sesión VR y completa la sesión de
    /// agenda asociada.
    pub async fn store(
        &self,
        request: CreateVrSessionRequest,
    ) -> Result<ApiResponse<VrSession>, AppError> {
        request.validate()?;

        let schedule = self
            .schedules
            .find_by_id(request.schedule_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Schedule not found".to_string()))?;

        if schedule.session_type != "vr_simulation" {
            return Err(AppError::BadRequest(
                "Schedule is not a VR simulation session".to_string(),
            ));
        }

        let passed = is_passing_score(request.score);
        let feedback = generate_feedback(&request.performance_metrics, request.incidents.as_ref());

        let session = self
            .vr_sessions
            .create(
                request.schedule_id,
                request.scenario_id,
                request.scenario_name,
                request.difficulty,
                request.duration_minutes,
                request.performance_metrics,
                request.score,
                passed,
                request.incidents,
                feedback,
            )
            .await?;

        // La transición a completada aplica las horas VR a la matrícula
        self.schedule_controller
            .complete_session(schedule.id)
            .await?;

        log::info!(
            "🥽 Sesión VR registrada: {} ({}, score {:?}, passed {})",
            session.id,
            session.scenario_name,
            session.score,
            session.passed
        );

        Ok(ApiResponse::success_with_message(
            session,
            "VR session recorded successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VrSession, AppError> {
        self.vr_sessions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("VR session not found".to_string()))
    }

    /// Historial VR del estudiante autenticado con agregados
    pub async fn student_history(&self, auth: AuthUser) -> Result<VrHistoryResponse, AppError> {
        let student_id = auth
            .student_id
            .ok_or_else(|| AppError::Forbidden("Student account required".to_string()))?;

        self.history_for_student(student_id).await
    }

    /// Historial VR de un estudiante por id (vista de personal)
    pub async fn history_for_student(
        &self,
        student_id: Uuid,
    ) -> Result<VrHistoryResponse, AppError> {
        let sessions = self.vr_sessions.list_by_student(student_id).await?;

        Ok(VrHistoryResponse {
            stats: Self::stats(&sessions),
            sessions,
        })
    }

    fn stats(sessions: &[VrSession]) -> VrHistoryStats {
        let total_sessions = sessions.len() as i64;

        let scored: Vec<i32> = sessions.iter().filter_map(|s| s.score).collect();
        let average_score = if scored.is_empty() {
            0.0
        } else {
            let sum: i32 = scored.iter().sum();
            // Redondeo a un decimal
            (sum as f64 / scored.len() as f64 * 10.0).round() / 10.0
        };

        let pass_rate = if total_sessions == 0 {
            0.0
        } else {
            let passed = sessions.iter().filter(|s| s.passed).count();
            (passed as f64 / total_sessions as f64 * 1000.0).round() / 10.0
        };

        let total_time = sessions.iter().map(|s| s.duration_minutes as i64).sum();

        VrHistoryStats {
            total_sessions,
            average_score,
            pass_rate,
            total_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn session(score: Option<i32>, passed: bool, minutes: i32) -> VrSession {
        VrSession {
            id: Uuid::new_v4(),
            schedule_id: Uuid::new_v4(),
            scenario_id: "city_basic".to_string(),
            scenario_name: "City Driving - Basic".to_string(),
            difficulty: "beginner".to_string(),
            duration_minutes: minutes,
            performance_metrics: json!({}),
            score,
            passed,
            incidents: None,
            ai_feedback: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_stats_on_empty_history() {
        let stats = VrSessionController::stats(&[]);
        assert_eq!(stats.total_sessions, 0);
        assert_eq!(stats.average_score, 0.0);
        assert_eq!(stats.pass_rate, 0.0);
        assert_eq!(stats.total_time, 0);
    }

    #[test]
    fn test_stats_aggregates() {
        let sessions = vec![
            session(Some(80), true, 30),
            session(Some(65), false, 45),
            session(None, false, 20),
        ];

        let stats = VrSessionController::stats(&sessions);
        assert_eq!(stats.total_sessions, 3);
        // Solo las sesiones con nota cuentan para el promedio
        assert_eq!(stats.average_score, 72.5);
        assert_eq!(stats.pass_rate, 33.3);
        assert_eq!(stats.total_time, 95);
    }
}
