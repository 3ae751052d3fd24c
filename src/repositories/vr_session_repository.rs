//! Repositorio de sesiones VR

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vr_session::VrSession;
use crate::utils::errors::AppError;

pub struct VrSessionRepository {
    pool: PgPool,
}

impl VrSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        schedule_id: Uuid,
        scenario_id: String,
        scenario_name: String,
        difficulty: String,
        duration_minutes: i32,
        performance_metrics: serde_json::Value,
        score: Option<i32>,
        passed: bool,
        incidents: Option<serde_json::Value>,
        ai_feedback: String,
    ) -> Result<VrSession, AppError> {
        let session = sqlx::query_as::<_, VrSession>(
            r#"
            INSERT INTO vr_sessions (
                id, schedule_id, scenario_id, scenario_name, difficulty,
                duration_minutes, performance_metrics, score, passed, incidents,
                ai_feedback, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(schedule_id)
        .bind(scenario_id)
        .bind(scenario_name)
        .bind(difficulty)
        .bind(duration_minutes)
        .bind(performance_metrics)
        .bind(score)
        .bind(passed)
        .bind(incidents)
        .bind(ai_feedback)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(session)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<VrSession>, AppError> {
        let session = sqlx::query_as::<_, VrSession>("SELECT * FROM vr_sessions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(session)
    }

    /// Historial VR de un estudiante, más reciente primero
    pub async fn list_by_student(&self, student_id: Uuid) -> Result<Vec<VrSession>, AppError> {
        let sessions = sqlx::query_as::<_, VrSession>(
            r#"
            SELECT v.* FROM vr_sessions v
            JOIN schedules s ON s.id = v.schedule_id
            JOIN enrollments e ON e.id = s.enrollment_id
            WHERE e.student_id = $1
            ORDER BY v.created_at DESC
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(sessions)
    }
}
