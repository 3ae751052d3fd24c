//! Controlador de certificados

use chrono::Utc;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::certificate_dto::IssueCertificateRequest;
use crate::dto::common::ApiResponse;
use crate::middleware::auth::AuthUser;
use crate::models::certificate::{Certificate, CERTIFICATE_TYPES};
use crate::repositories::certificate_repository::CertificateRepository;
use crate::repositories::enrollment_repository::EnrollmentRepository;
use crate::utils::errors::AppError;

pub struct CertificateController {
    certificates: CertificateRepository,
    enrollments: EnrollmentRepository,
}

impl CertificateController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            certificates: CertificateRepository::new(pool.clone()),
            enrollments: EnrollmentRepository::new(pool),
        }
    }

    /// Emite un certificado sobre una matrícula existente
    pub async fn issue(
        &self,
        request: IssueCertificateRequest,
    ) -> Result<ApiResponse<Certificate>, AppError> {
        request.validate()?;

        if !CERTIFICATE_TYPES.contains(&request.certificate_type.as_str()) {
            return Err(AppError::BadRequest("Invalid certificate type".to_string()));
        }

        self.enrollments
            .find_by_id(request.enrollment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Enrollment not found".to_string()))?;

        let certificate_number = self
            .certificates
            .generate_certificate_number(&request.certificate_type)
            .await?;

        let certificate = self
            .certificates
            .create(
                certificate_number,
                request.enrollment_id,
                &request.certificate_type,
                Utc::now().date_naive(),
                request.expiry_date,
                None,
            )
            .await?;

        log::info!("📜 Certificado emitido: {}", certificate.certificate_number);

        Ok(ApiResponse::success_with_message(
            certificate,
            "Certificate issued successfully".to_string(),
        ))
    }

    /// Certificados del estudiante autenticado
    pub async fn my_certificates(&self, auth: AuthUser) -> Result<Vec<Certificate>, AppError> {
        let student_id = auth
            .student_id
            .ok_or_else(|| AppError::Forbidden("Student account required".to_string()))?;

        self.certificates.list_by_student(student_id).await
    }
}
