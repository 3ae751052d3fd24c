//! Controlador de estudiantes

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::{ApiResponse, Paginated, PaginationQuery};
use crate::dto::student_dto::{CreateStudentRequest, StudentFilters, UpdateStudentRequest};
use crate::models::student::{Student, LICENSE_TYPES, STUDENT_STATUSES};
use crate::repositories::student_repository::StudentRepository;
use crate::utils::errors::AppError;

const DEFAULT_PER_PAGE: i64 = 15;

pub struct StudentController {
    repository: StudentRepository,
}

impl StudentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: StudentRepository::new(pool),
        }
    }

    pub async fn list(&self, filters: StudentFilters) -> Result<Paginated<Student>, AppError> {
        let pagination = PaginationQuery {
            page: filters.page,
            per_page: filters.per_page,
        };

        let (students, total) = self
            .repository
            .list(
                filters.search,
                filters.status,
                filters.license_type,
                pagination.per_page(DEFAULT_PER_PAGE),
                pagination.offset(DEFAULT_PER_PAGE),
            )
            .await?;

        Ok(Paginated {
            data: students,
            total,
            page: pagination.page(),
            per_page: pagination.per_page(DEFAULT_PER_PAGE),
        })
    }

    pub async fn create(
        &self,
        request: CreateStudentRequest,
    ) -> Result<ApiResponse<Student>, AppError> {
        request.validate()?;

        if !LICENSE_TYPES.contains(&request.license_type.as_str()) {
            return Err(AppError::BadRequest("Invalid license type".to_string()));
        }

        if self.repository.email_exists(&request.email).await? {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }

        let student_code = self.repository.generate_student_code().await?;
        let student = self.repository.create(student_code, request).await?;

        log::info!("🎓 Estudiante registrado: {}", student.student_code);

        Ok(ApiResponse::success_with_message(
            student,
            "Student registered successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Student, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateStudentRequest,
    ) -> Result<ApiResponse<Student>, AppError> {
        request.validate()?;

        if let Some(status) = &request.status {
            if !STUDENT_STATUSES.contains(&status.as_str()) {
                return Err(AppError::BadRequest("Invalid student status".to_string()));
            }
        }

        // Verificar que existe antes de actualizar
        self.get_by_id(id).await?;

        let student = self.repository.update(id, request).await?;

        Ok(ApiResponse::success_with_message(
            student,
            "Student updated successfully".to_string(),
        ))
    }

    /// Archivado explícito en lugar de borrado físico
    pub async fn archive(&self, id: Uuid) -> Result<(), AppError> {
        self.get_by_id(id).await?;
        self.repository.archive(id).await?;

        log::info!("🗄️ Estudiante archivado: {}", id);
        Ok(())
    }

    pub async fn list_by_instructor(
        &self,
        instructor_id: Uuid,
    ) -> Result<Vec<Student>, AppError> {
        self.repository.list_by_instructor(instructor_id).await
    }
}
