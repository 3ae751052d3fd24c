//! Controlador de matrículas
//!
//! Alta de matrículas, ledger de pagos y contabilidad de progreso.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::{ApiResponse, Paginated, PaginationQuery};
use crate::dto::enrollment_dto::{
    AddPaymentRequest, CreateEnrollmentRequest, EnrollmentDetail, EnrollmentFilters,
    UpdateProgressRequest,
};
use crate::middleware::auth::AuthUser;
use crate::models::enrollment::{Enrollment, ENROLLMENT_STATUSES, PAYMENT_STATUSES};
use crate::repositories::course_repository::CourseRepository;
use crate::repositories::enrollment_repository::EnrollmentRepository;
use crate::repositories::student_repository::StudentRepository;
use crate::services::payment_service::{apply_payment, classify_payment};
use crate::services::progress_service::check_completion;
use crate::utils::errors::AppError;

const DEFAULT_PER_PAGE: i64 = 15;

pub struct EnrollmentController {
    enrollments: EnrollmentRepository,
    students: StudentRepository,
    courses: CourseRepository,
}

impl EnrollmentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            enrollments: EnrollmentRepository::new(pool.clone()),
            students: StudentRepository::new(pool.clone()),
            courses: CourseRepository::new(pool),
        }
    }

    /// Carga las relaciones y el avance derivado de una matrícula
    pub async fn detail(&self, enrollment: Enrollment) -> Result<EnrollmentDetail, AppError> {
        let student = self.students.find_by_id(enrollment.student_id).await?;
        let course = self.courses.find_by_id(enrollment.course_id).await?;
        Ok(EnrollmentDetail::new(enrollment, student, course))
    }

    pub async fn list(
        &self,
        filters: EnrollmentFilters,
    ) -> Result<Paginated<EnrollmentDetail>, AppError> {
        if let Some(status) = &filters.status {
            if !ENROLLMENT_STATUSES.contains(&status.as_str()) {
                return Err(AppError::BadRequest(
                    "Invalid enrollment status".to_string(),
                ));
            }
        }
        if let Some(payment_status) = &filters.payment_status {
            if !PAYMENT_STATUSES.contains(&payment_status.as_str()) {
                return Err(AppError::BadRequest("Invalid payment status".to_string()));
            }
        }

        let pagination = PaginationQuery {
            page: filters.page,
            per_page: filters.per_page,
        };

        let (enrollments, total) = self
            .enrollments
            .list(
                filters.status,
                filters.payment_status,
                pagination.per_page(DEFAULT_PER_PAGE),
                pagination.offset(DEFAULT_PER_PAGE),
            )
            .await?;

        let mut data = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            data.push(self.detail(enrollment).await?);
        }

        Ok(Paginated {
            data,
            total,
            page: pagination.page(),
            per_page: pagination.per_page(DEFAULT_PER_PAGE),
        })
    }

    pub async fn create(
        &self,
        request: CreateEnrollmentRequest,
    ) -> Result<ApiResponse<EnrollmentDetail>, AppError> {
        request.validate()?;

        if request.amount_paid < Decimal::ZERO {
            return Err(AppError::BadRequest(
                "Initial payment cannot be negative".to_string(),
            ));
        }

        let course = self
            .courses
            .find_by_id(request.course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        let student = self
            .students
            .find_by_id(request.student_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        // Un estudiante solo puede tener una matrícula activa
        if self
            .enrollments
            .find_active_by_student(student.id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "Student already has an active enrollment".to_string(),
            ));
        }

        let number = self.enrollments.generate_enrollment_number().await?;
        let today = Utc::now().date_naive();
        let expiry = today + Duration::days(course.validity_days as i64);
        let outcome = classify_payment(course.price, request.amount_paid);

        let enrollment = self
            .enrollments
            .create(
                number,
                student.id,
                course.id,
                today,
                expiry,
                outcome.amount_paid,
                outcome.balance,
                outcome.payment_status,
            )
            .await?;

        self.students.update_status(student.id, "enrolled").await?;

        log::info!("📋 Matrícula creada: {}", enrollment.enrollment_number);

        let detail = self.detail(enrollment).await?;
        Ok(ApiResponse::success_with_message(
            detail,
            "Enrollment created successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<EnrollmentDetail, AppError> {
        let enrollment = self
            .enrollments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Enrollment not found".to_string()))?;

        self.detail(enrollment).await
    }

    pub async fn add_payment(
        &self,
        id: Uuid,
        request: AddPaymentRequest,
    ) -> Result<ApiResponse<EnrollmentDetail>, AppError> {
        let enrollment = self
            .enrollments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Enrollment not found".to_string()))?;

        let course = self
            .courses
            .find_by_id(enrollment.course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        // Rechaza montos <= 0 antes de cualquier mutación
        let outcome = apply_payment(course.price, enrollment.amount_paid, request.amount)?;

        let updated = self
            .enrollments
            .update_payment(
                enrollment.id,
                outcome.amount_paid,
                outcome.balance,
                &outcome.payment_status,
            )
            .await?;

        log::info!(
            "💰 Pago registrado en {}: saldo {}",
            updated.enrollment_number,
            updated.balance
        );

        let detail = self.detail(updated).await?;
        Ok(ApiResponse::success_with_message(
            detail,
            "Payment recorded successfully".to_string(),
        ))
    }

    /// Fija contadores de progreso manualmente y re-evalúa el cierre
    pub async fn update_progress(
        &self,
        id: Uuid,
        request: UpdateProgressRequest,
    ) -> Result<ApiResponse<EnrollmentDetail>, AppError> {
        request.validate()?;

        let enrollment = self
            .enrollments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Enrollment not found".to_string()))?;

        let mut updated = self
            .enrollments
            .set_progress_hours(
                enrollment.id,
                request.theory_hours.unwrap_or(enrollment.theory_hours_completed),
                request
                    .practical_hours
                    .unwrap_or(enrollment.practical_hours_completed),
                request.vr_hours.unwrap_or(enrollment.vr_hours_completed),
            )
            .await?;

        let course = self
            .courses
            .find_by_id(updated.course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        if check_completion(&mut updated, &course) {
            self.enrollments
                .update_status(updated.id, "completed")
                .await?;
            self.students
                .update_status(updated.student_id, "completed")
                .await?;
            log::info!("🏁 Matrícula completada: {}", updated.enrollment_number);
        }

        let detail = self.detail(updated).await?;
        Ok(ApiResponse::success_with_message(
            detail,
            "Progress updated successfully".to_string(),
        ))
    }

    /// Progreso del estudiante autenticado (portal)
    pub async fn my_progress(&self, auth: AuthUser) -> Result<Option<EnrollmentDetail>, AppError> {
        let student_id = match auth.student_id {
            Some(id) => id,
            None => return Ok(None),
        };

        match self.enrollments.find_active_by_student(student_id).await? {
            Some(enrollment) => Ok(Some(self.detail(enrollment).await?)),
            None => Ok(None),
        }
    }
}
