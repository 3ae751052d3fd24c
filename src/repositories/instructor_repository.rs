//! Repositorio de instructores

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::instructor::Instructor;
use crate::utils::errors::AppError;

pub struct InstructorRepository {
    pool: PgPool,
}

impl InstructorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Instructor>, AppError> {
        let instructor =
            sqlx::query_as::<_, Instructor>("SELECT * FROM instructors WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(instructor)
    }

    /// Instructores activos en orden natural de id
    pub async fn list_active(&self) -> Result<Vec<Instructor>, AppError> {
        let instructors = sqlx::query_as::<_, Instructor>(
            "SELECT * FROM instructors WHERE status = 'active' ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(instructors)
    }

    pub async fn count_active(&self) -> Result<i64, AppError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM instructors WHERE status = 'active'")
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0)
    }
}
