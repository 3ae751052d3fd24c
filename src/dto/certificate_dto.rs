//! DTOs de certificados

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Request para emitir un certificado
#[derive(Debug, Deserialize, Validate)]
pub struct IssueCertificateRequest {
    pub enrollment_id: Uuid,

    /// completion | theory_exam | practical_exam | lto_ready
    pub certificate_type: String,

    pub expiry_date: Option<NaiveDate>,
}
