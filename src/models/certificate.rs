//! Modelo de Certificate
//!
//! Certificados emitidos contra una matrícula.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipos de certificado válidos
pub const CERTIFICATE_TYPES: [&str; 4] =
    ["completion", "theory_exam", "practical_exam", "lto_ready"];

/// Certificate principal - mapea exactamente a la tabla certificates
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Certificate {
    pub id: Uuid,
    pub certificate_number: String,
    pub enrollment_id: Uuid,
    pub issue_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub certificate_type: String,
    pub qr_code: Option<String>,
    pub verification_url: Option<String>,
    pub is_valid: bool,
    pub created_at: DateTime<Utc>,
}

/// Prefijo del número de certificado según tipo
pub fn certificate_prefix(certificate_type: &str) -> &'static str {
    match certificate_type {
        "theory_exam" => "THE",
        "practical_exam" => "PRA",
        "lto_ready" => "LTO",
        _ => "CERT",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_certificate_prefix() {
        assert_eq!(certificate_prefix("completion"), "CERT");
        assert_eq!(certificate_prefix("theory_exam"), "THE");
        assert_eq!(certificate_prefix("practical_exam"), "PRA");
        assert_eq!(certificate_prefix("lto_ready"), "LTO");
        assert_eq!(certificate_prefix("unknown"), "CERT");
    }
}
