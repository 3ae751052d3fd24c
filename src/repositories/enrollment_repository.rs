//! Repositorio de matrículas

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::enrollment::Enrollment;
use crate::utils::errors::AppError;

pub struct EnrollmentRepository {
    pool: PgPool,
}

impl EnrollmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Genera el número ENR-YYYYMM-NNNN siguiendo el contador del mes
    pub async fn generate_enrollment_number(&self) -> Result<String, AppError> {
        let now = Utc::now();
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM enrollments
            WHERE EXTRACT(YEAR FROM created_at) = $1
              AND EXTRACT(MONTH FROM created_at) = $2
            "#,
        )
        .bind(now.year())
        .bind(now.month() as i32)
        .fetch_one(&self.pool)
        .await?;

        Ok(format!(
            "ENR-{}{:02}-{:04}",
            now.year(),
            now.month(),
            count.0 + 1
        ))
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        enrollment_number: String,
        student_id: Uuid,
        course_id: Uuid,
        enrollment_date: NaiveDate,
        expiry_date: NaiveDate,
        amount_paid: Decimal,
        balance: Decimal,
        payment_status: String,
    ) -> Result<Enrollment, AppError> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            r#"
            INSERT INTO enrollments (
                id, enrollment_number, student_id, course_id, enrollment_date,
                expiry_date, status, amount_paid, balance, payment_status,
                theory_hours_completed, practical_hours_completed, vr_hours_completed,
                created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, 'active', $7, $8, $9, 0, 0, 0, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(enrollment_number)
        .bind(student_id)
        .bind(course_id)
        .bind(enrollment_date)
        .bind(expiry_date)
        .bind(amount_paid)
        .bind(balance)
        .bind(payment_status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(enrollment)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Enrollment>, AppError> {
        let enrollment =
            sqlx::query_as::<_, Enrollment>("SELECT * FROM enrollments WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(enrollment)
    }

    pub async fn find_active_by_student(
        &self,
        student_id: Uuid,
    ) -> Result<Option<Enrollment>, AppError> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            "SELECT * FROM enrollments WHERE student_id = $1 AND status = 'active' LIMIT 1",
        )
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(enrollment)
    }

    pub async fn list(
        &self,
        status: Option<String>,
        payment_status: Option<String>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Enrollment>, i64), AppError> {
        let enrollments = sqlx::query_as::<_, Enrollment>(
            r#"
            SELECT * FROM enrollments
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::text IS NULL OR payment_status = $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(status.clone())
        .bind(payment_status.clone())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM enrollments
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::text IS NULL OR payment_status = $2)
            "#,
        )
        .bind(status)
        .bind(payment_status)
        .fetch_one(&self.pool)
        .await?;

        Ok((enrollments, total.0))
    }

    pub async fn update_payment(
        &self,
        id: Uuid,
        amount_paid: Decimal,
        balance: Decimal,
        payment_status: &str,
    ) -> Result<Enrollment, AppError> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            r#"
            UPDATE enrollments
            SET amount_paid = $2, balance = $3, payment_status = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(amount_paid)
        .bind(balance)
        .bind(payment_status)
        .fetch_one(&self.pool)
        .await?;

        Ok(enrollment)
    }

    pub async fn set_progress_hours(
        &self,
        id: Uuid,
        theory: f64,
        practical: f64,
        vr: f64,
    ) -> Result<Enrollment, AppError> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            r#"
            UPDATE enrollments
            SET theory_hours_completed = $2,
                practical_hours_completed = $3,
                vr_hours_completed = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(theory)
        .bind(practical)
        .bind(vr)
        .fetch_one(&self.pool)
        .await?;

        Ok(enrollment)
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE enrollments SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn count_by_status(&self, status: &str) -> Result<i64, AppError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM enrollments WHERE status = $1")
                .bind(status)
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0)
    }

    /// Ingresos del periodo: suma de lo pagado en matrículas creadas desde la fecha
    pub async fn revenue_since(&self, since: NaiveDate) -> Result<Decimal, AppError> {
        let sum: (Option<Decimal>,) = sqlx::query_as(
            "SELECT SUM(amount_paid) FROM enrollments WHERE created_at >= $1",
        )
        .bind(since.and_hms_opt(0, 0, 0).unwrap().and_utc())
        .fetch_one(&self.pool)
        .await?;

        Ok(sum.0.unwrap_or(Decimal::ZERO))
    }

    /// Saldos pendientes: suma de balances de matrículas sin pagar por completo
    pub async fn pending_balance_total(&self) -> Result<Decimal, AppError> {
        let sum: (Option<Decimal>,) = sqlx::query_as(
            "SELECT SUM(balance) FROM enrollments WHERE payment_status <> 'paid'",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(sum.0.unwrap_or(Decimal::ZERO))
    }

    pub async fn count_in_month(&self, year: i32, month: u32) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM enrollments
            WHERE EXTRACT(YEAR FROM created_at) = $1
              AND EXTRACT(MONTH FROM created_at) = $2
            "#,
        )
        .bind(year)
        .bind(month as i32)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }

    pub async fn recent(&self, limit: i64) -> Result<Vec<Enrollment>, AppError> {
        let enrollments = sqlx::query_as::<_, Enrollment>(
            "SELECT * FROM enrollments ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(enrollments)
    }
}
