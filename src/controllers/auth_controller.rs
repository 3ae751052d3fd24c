//! Controlador de autenticación

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse, UpdateProfileRequest};
use crate::middleware::auth::AuthUser;
use crate::models::user::User;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

pub struct AuthController {
    repository: UserRepository,
    jwt_config: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt_config: JwtConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            jwt_config,
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        request.validate()?;

        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                AppError::Unauthorized("The provided credentials are incorrect".to_string())
            })?;

        let valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(e.to_string()))?;
        if !valid {
            return Err(AppError::Unauthorized(
                "The provided credentials are incorrect".to_string(),
            ));
        }

        if !user.is_active {
            return Err(AppError::Unauthorized(
                "Your account has been deactivated".to_string(),
            ));
        }

        self.repository.touch_last_login(user.id).await?;

        let token = generate_token(
            user.id,
            &user.role,
            user.student_id,
            user.instructor_id,
            &self.jwt_config,
        )?;

        log::info!("🔐 Login exitoso para {}", user.email);

        Ok(LoginResponse { user, token })
    }

    pub async fn me(&self, auth: AuthUser) -> Result<User, AppError> {
        self.repository
            .find_by_id(auth.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn update_profile(
        &self,
        auth: AuthUser,
        request: UpdateProfileRequest,
    ) -> Result<User, AppError> {
        request.validate()?;

        let user = self
            .repository
            .find_by_id(auth.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if let Some(email) = &request.email {
            if self.repository.email_taken_by_other(email, user.id).await? {
                return Err(AppError::Conflict("Email is already in use".to_string()));
            }
        }

        // Cambio de password requiere el password actual
        let password_hash = match (&request.new_password, &request.current_password) {
            (Some(new_password), Some(current)) => {
                let valid = verify(current, &user.password_hash)
                    .map_err(|e| AppError::Hash(e.to_string()))?;
                if !valid {
                    return Err(AppError::BadRequest(
                        "Current password is incorrect".to_string(),
                    ));
                }
                Some(hash(new_password, DEFAULT_COST).map_err(|e| AppError::Hash(e.to_string()))?)
            }
            (Some(_), None) => {
                return Err(AppError::BadRequest(
                    "Current password is required to set a new password".to_string(),
                ));
            }
            _ => None,
        };

        self.repository
            .update_profile(user.id, request.name, request.email, password_hash)
            .await
    }
}
