//! Repositorio de sesiones
//!
//! Además del CRUD, expone las lecturas que alimentan el chequeo de
//! conflictos y la enumeración de slots: intervalos y horarios de inicio
//! de las sesiones no canceladas de un recurso en una fecha.

use chrono::{NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::schedule::Schedule;
use crate::utils::errors::AppError;

pub struct ScheduleRepository {
    pool: PgPool,
}

impl ScheduleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        enrollment_id: Uuid,
        instructor_id: Uuid,
        vehicle_id: Option<Uuid>,
        session_type: &str,
        scheduled_date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        notes: Option<String>,
    ) -> Result<Schedule, AppError> {
        let schedule = sqlx::query_as::<_, Schedule>(
            r#"
            INSERT INTO schedules (
                id, enrollment_id, instructor_id, vehicle_id, session_type,
                scheduled_date, start_time, end_time, status, notes, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'scheduled', $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(enrollment_id)
        .bind(instructor_id)
        .bind(vehicle_id)
        .bind(session_type)
        .bind(scheduled_date)
        .bind(start_time)
        .bind(end_time)
        .bind(notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(schedule)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Schedule>, AppError> {
        let schedule = sqlx::query_as::<_, Schedule>("SELECT * FROM schedules WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(schedule)
    }

    /// Intervalos ocupados por un instructor en una fecha (excluye canceladas)
    pub async fn instructor_intervals(
        &self,
        instructor_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<(NaiveTime, NaiveTime)>, AppError> {
        let intervals: Vec<(NaiveTime, NaiveTime)> = sqlx::query_as(
            r#"
            SELECT start_time, end_time FROM schedules
            WHERE instructor_id = $1 AND scheduled_date = $2 AND status <> 'cancelled'
            "#,
        )
        .bind(instructor_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(intervals)
    }

    /// Intervalos ocupados por un vehículo en una fecha (excluye canceladas)
    pub async fn vehicle_intervals(
        &self,
        vehicle_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<(NaiveTime, NaiveTime)>, AppError> {
        let intervals: Vec<(NaiveTime, NaiveTime)> = sqlx::query_as(
            r#"
            SELECT start_time, end_time FROM schedules
            WHERE vehicle_id = $1 AND scheduled_date = $2 AND status <> 'cancelled'
            "#,
        )
        .bind(vehicle_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(intervals)
    }

    /// Horarios de inicio reservados de un instructor en una fecha
    pub async fn booked_start_times(
        &self,
        instructor_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<NaiveTime>, AppError> {
        let times: Vec<(NaiveTime,)> = sqlx::query_as(
            r#"
            SELECT start_time FROM schedules
            WHERE instructor_id = $1 AND scheduled_date = $2 AND status <> 'cancelled'
            "#,
        )
        .bind(instructor_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(times.into_iter().map(|(t,)| t).collect())
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn list(
        &self,
        date: Option<NaiveDate>,
        instructor_id: Option<Uuid>,
        status: Option<String>,
        session_type: Option<String>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Schedule>, i64), AppError> {
        let schedules = sqlx::query_as::<_, Schedule>(
            r#"
            SELECT * FROM schedules
            WHERE ($1::date IS NULL OR scheduled_date = $1)
              AND ($2::uuid IS NULL OR instructor_id = $2)
              AND ($3::text IS NULL OR status = $3)
              AND ($4::text IS NULL OR session_type = $4)
            ORDER BY scheduled_date, start_time
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(date)
        .bind(instructor_id)
        .bind(status.clone())
        .bind(session_type.clone())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM schedules
            WHERE ($1::date IS NULL OR scheduled_date = $1)
              AND ($2::uuid IS NULL OR instructor_id = $2)
              AND ($3::text IS NULL OR status = $3)
              AND ($4::text IS NULL OR session_type = $4)
            "#,
        )
        .bind(date)
        .bind(instructor_id)
        .bind(status)
        .bind(session_type)
        .fetch_one(&self.pool)
        .await?;

        Ok((schedules, total.0))
    }

    pub async fn update(
        &self,
        id: Uuid,
        status: Option<String>,
        rating: Option<i32>,
        feedback: Option<String>,
        notes: Option<String>,
    ) -> Result<Schedule, AppError> {
        let schedule = sqlx::query_as::<_, Schedule>(
            r#"
            UPDATE schedules
            SET status = COALESCE($2, status),
                rating = COALESCE($3, rating),
                feedback = COALESCE($4, feedback),
                notes = COALESCE($5, notes)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .bind(rating)
        .bind(feedback)
        .bind(notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(schedule)
    }

    /// Sesiones de un estudiante, más recientes primero
    pub async fn list_by_student(
        &self,
        student_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Schedule>, i64), AppError> {
        let schedules = sqlx::query_as::<_, Schedule>(
            r#"
            SELECT s.* FROM schedules s
            JOIN enrollments e ON e.id = s.enrollment_id
            WHERE e.student_id = $1
            ORDER BY s.scheduled_date DESC, s.start_time
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(student_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM schedules s
            JOIN enrollments e ON e.id = s.enrollment_id
            WHERE e.student_id = $1
            "#,
        )
        .bind(student_id)
        .fetch_one(&self.pool)
        .await?;

        Ok((schedules, total.0))
    }

    pub async fn list_by_instructor(
        &self,
        instructor_id: Uuid,
        date: Option<NaiveDate>,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Schedule>, i64), AppError> {
        let schedules = sqlx::query_as::<_, Schedule>(
            r#"
            SELECT * FROM schedules
            WHERE instructor_id = $1
              AND ($2::date IS NULL OR scheduled_date = $2)
              AND ($3::date IS NULL OR scheduled_date >= $3)
              AND ($4::date IS NULL OR scheduled_date <= $4)
            ORDER BY scheduled_date, start_time
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(instructor_id)
        .bind(date)
        .bind(from)
        .bind(to)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM schedules
            WHERE instructor_id = $1
              AND ($2::date IS NULL OR scheduled_date = $2)
              AND ($3::date IS NULL OR scheduled_date >= $3)
              AND ($4::date IS NULL OR scheduled_date <= $4)
            "#,
        )
        .bind(instructor_id)
        .bind(date)
        .bind(from)
        .bind(to)
        .fetch_one(&self.pool)
        .await?;

        Ok((schedules, total.0))
    }

    pub async fn list_on_date(
        &self,
        date: NaiveDate,
        limit: i64,
    ) -> Result<Vec<Schedule>, AppError> {
        let schedules = sqlx::query_as::<_, Schedule>(
            r#"
            SELECT * FROM schedules
            WHERE scheduled_date = $1
            ORDER BY start_time
            LIMIT $2
            "#,
        )
        .bind(date)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(schedules)
    }

    pub async fn upcoming_by_student(
        &self,
        student_id: Uuid,
        from: NaiveDate,
        limit: i64,
    ) -> Result<Vec<Schedule>, AppError> {
        let schedules = sqlx::query_as::<_, Schedule>(
            r#"
            SELECT s.* FROM schedules s
            JOIN enrollments e ON e.id = s.enrollment_id
            WHERE e.student_id = $1
              AND s.scheduled_date >= $2
              AND s.status IN ('scheduled', 'confirmed')
            ORDER BY s.scheduled_date, s.start_time
            LIMIT $3
            "#,
        )
        .bind(student_id)
        .bind(from)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(schedules)
    }

    pub async fn count_on_date(&self, date: NaiveDate) -> Result<i64, AppError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM schedules WHERE scheduled_date = $1")
                .bind(date)
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0)
    }

    pub async fn count_by_type(&self, session_type: &str) -> Result<i64, AppError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM schedules WHERE session_type = $1")
                .bind(session_type)
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0)
    }

    pub async fn count_completed_by_student(&self, student_id: Uuid) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM schedules s
            JOIN enrollments e ON e.id = s.enrollment_id
            WHERE e.student_id = $1 AND s.status = 'completed'
            "#,
        )
        .bind(student_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }

    pub async fn count_on_date_by_instructor(
        &self,
        instructor_id: Uuid,
        date: NaiveDate,
    ) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM schedules WHERE instructor_id = $1 AND scheduled_date = $2",
        )
        .bind(instructor_id)
        .bind(date)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }

    pub async fn count_completed_since_by_instructor(
        &self,
        instructor_id: Uuid,
        since: NaiveDate,
    ) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM schedules
            WHERE instructor_id = $1 AND status = 'completed' AND scheduled_date >= $2
            "#,
        )
        .bind(instructor_id)
        .bind(since)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }

    pub async fn list_on_date_by_instructor(
        &self,
        instructor_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Schedule>, AppError> {
        let schedules = sqlx::query_as::<_, Schedule>(
            r#"
            SELECT * FROM schedules
            WHERE instructor_id = $1 AND scheduled_date = $2
            ORDER BY start_time
            "#,
        )
        .bind(instructor_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(schedules)
    }
}
