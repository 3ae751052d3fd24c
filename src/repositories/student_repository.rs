//! Repositorio de estudiantes

use chrono::{Datelike, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::student_dto::{CreateStudentRequest, UpdateStudentRequest};
use crate::models::student::Student;
use crate::utils::errors::AppError;

pub struct StudentRepository {
    pool: PgPool,
}

impl StudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Genera el código STU-YYYY-NNNNN siguiendo el contador del año
    pub async fn generate_student_code(&self) -> Result<String, AppError> {
        let year = Utc::now().year();
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM students WHERE EXTRACT(YEAR FROM created_at) = $1",
        )
        .bind(year)
        .fetch_one(&self.pool)
        .await?;

        Ok(format!("STU-{}-{:05}", year, count.0 + 1))
    }

    pub async fn create(
        &self,
        student_code: String,
        request: CreateStudentRequest,
    ) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (
                id, student_code, first_name, last_name, email, phone, birth_date,
                address, license_type, status, emergency_contact_name,
                emergency_contact_phone, medical_conditions, archived, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'pending', $10, $11, $12, false, $13)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(student_code)
        .bind(request.first_name)
        .bind(request.last_name)
        .bind(request.email)
        .bind(request.phone)
        .bind(request.birth_date)
        .bind(request.address)
        .bind(request.license_type)
        .bind(request.emergency_contact_name)
        .bind(request.emergency_contact_phone)
        .bind(request.medical_conditions)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(student)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Student>, AppError> {
        let student = sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(student)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM students WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Listado con filtros opcionales; excluye siempre los archivados
    pub async fn list(
        &self,
        search: Option<String>,
        status: Option<String>,
        license_type: Option<String>,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Student>, i64), AppError> {
        let pattern = search.map(|s| format!("%{}%", s));

        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT * FROM students
            WHERE archived = false
              AND ($1::text IS NULL OR first_name ILIKE $1 OR last_name ILIKE $1
                   OR email ILIKE $1 OR student_code ILIKE $1)
              AND ($2::text IS NULL OR status = $2)
              AND ($3::text IS NULL OR license_type = $3)
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(pattern.clone())
        .bind(status.clone())
        .bind(license_type.clone())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM students
            WHERE archived = false
              AND ($1::text IS NULL OR first_name ILIKE $1 OR last_name ILIKE $1
                   OR email ILIKE $1 OR student_code ILIKE $1)
              AND ($2::text IS NULL OR status = $2)
              AND ($3::text IS NULL OR license_type = $3)
            "#,
        )
        .bind(pattern)
        .bind(status)
        .bind(license_type)
        .fetch_one(&self.pool)
        .await?;

        Ok((students, total.0))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateStudentRequest,
    ) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            UPDATE students
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                address = COALESCE($6, address),
                status = COALESCE($7, status),
                emergency_contact_name = COALESCE($8, emergency_contact_name),
                emergency_contact_phone = COALESCE($9, emergency_contact_phone)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.first_name)
        .bind(request.last_name)
        .bind(request.email)
        .bind(request.phone)
        .bind(request.address)
        .bind(request.status)
        .bind(request.emergency_contact_name)
        .bind(request.emergency_contact_phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(student)
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE students SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Archivado explícito: el registro nunca se elimina físicamente
    pub async fn archive(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("UPDATE students SET archived = true WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Estudiantes con sesiones a cargo de un instructor
    pub async fn list_by_instructor(&self, instructor_id: Uuid) -> Result<Vec<Student>, AppError> {
        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT DISTINCT s.* FROM students s
            JOIN enrollments e ON e.student_id = s.id
            JOIN schedules sch ON sch.enrollment_id = e.id
            WHERE sch.instructor_id = $1 AND s.archived = false
            ORDER BY s.created_at DESC
            "#,
        )
        .bind(instructor_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }

    pub async fn count_all(&self) -> Result<i64, AppError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM students WHERE archived = false")
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0)
    }
}
