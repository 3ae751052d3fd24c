//! Repositorio de cursos

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::course::Course;
use crate::utils::errors::AppError;

pub struct CourseRepository {
    pool: PgPool,
}

impl CourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, AppError> {
        let course = sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(course)
    }

    pub async fn list_active(&self) -> Result<Vec<Course>, AppError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT * FROM courses WHERE is_active = true ORDER BY code",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(courses)
    }
}
