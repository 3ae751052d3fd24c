//! Repositorio de certificados

use chrono::{Datelike, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::certificate::{certificate_prefix, Certificate};
use crate::utils::errors::AppError;

pub struct CertificateRepository {
    pool: PgPool,
}

impl CertificateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Genera el número PREFIX-YYYY-NNNNNN según tipo y contador anual
    pub async fn generate_certificate_number(
        &self,
        certificate_type: &str,
    ) -> Result<String, AppError> {
        let year = Utc::now().year();
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM certificates
            WHERE EXTRACT(YEAR FROM created_at) = $1 AND certificate_type = $2
            "#,
        )
        .bind(year)
        .bind(certificate_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(format!(
            "{}-{}-{:06}",
            certificate_prefix(certificate_type),
            year,
            count.0 + 1
        ))
    }

    pub async fn create(
        &self,
        certificate_number: String,
        enrollment_id: Uuid,
        certificate_type: &str,
        issue_date: NaiveDate,
        expiry_date: Option<NaiveDate>,
        verification_url: Option<String>,
    ) -> Result<Certificate, AppError> {
        let certificate = sqlx::query_as::<_, Certificate>(
            r#"
            INSERT INTO certificates (
                id, certificate_number, enrollment_id, issue_date, expiry_date,
                certificate_type, qr_code, verification_url, is_valid, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, true, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(certificate_number.clone())
        .bind(enrollment_id)
        .bind(issue_date)
        .bind(expiry_date)
        .bind(certificate_type)
        .bind(certificate_number)
        .bind(verification_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(certificate)
    }

    pub async fn list_by_student(&self, student_id: Uuid) -> Result<Vec<Certificate>, AppError> {
        let certificates = sqlx::query_as::<_, Certificate>(
            r#"
            SELECT c.* FROM certificates c
            JOIN enrollments e ON e.id = c.enrollment_id
            WHERE e.student_id = $1
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(certificates)
    }

    pub async fn count_by_student(&self, student_id: Uuid) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM certificates c
            JOIN enrollments e ON e.id = c.enrollment_id
            WHERE e.student_id = $1
            "#,
        )
        .bind(student_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }

    pub async fn count_issued_in_month(&self, year: i32, month: u32) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM certificates
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
}
