//! Middleware de autenticación
//!
//! Extrae y valida el Bearer token del header Authorization.
//! El usuario autenticado se pasa como parámetro explícito a los
//! handlers mediante el extractor `AuthUser`.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use uuid::Uuid;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Usuario autenticado extraído del JWT
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: String,
    pub student_id: Option<Uuid>,
    pub instructor_id: Option<Uuid>,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }

    pub fn is_instructor(&self) -> bool {
        self.role == "instructor"
    }

    pub fn is_student(&self) -> bool {
        self.role == "student"
    }

    /// Guard para endpoints de administración
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Forbidden("Admin access required".to_string()))
        }
    }

    /// Guard para endpoints de personal (admin o instructor)
    pub fn require_staff(&self) -> Result<(), AppError> {
        if self.is_admin() || self.is_instructor() {
            Ok(())
        } else {
            Err(AppError::Forbidden("Staff access required".to_string()))
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extraer token del header Authorization
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("Invalid Authorization header".to_string()))?;

        let claims = verify_token(token, &state.jwt_config())?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))?;

        let student_id = claims
            .student_id
            .as_deref()
            .and_then(|id| Uuid::parse_str(id).ok());
        let instructor_id = claims
            .instructor_id
            .as_deref()
            .and_then(|id| Uuid::parse_str(id).ok());

        Ok(AuthUser {
            user_id,
            role: claims.role,
            student_id,
            instructor_id,
        })
    }
}
