//! Controlador de vehículos

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::vehicle::{Vehicle, VEHICLE_STATUSES};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        self.repository.list().await
    }

    pub async fn list_available(&self) -> Result<Vec<Vehicle>, AppError> {
        self.repository.list_available().await
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<Vehicle>, AppError> {
        request.validate()?;

        if self.repository.plate_exists(&request.plate_number).await? {
            return Err(AppError::Conflict(
                "A vehicle with this plate number already exists".to_string(),
            ));
        }

        let vehicle = self.repository.create(request).await?;

        log::info!("🚗 Vehículo registrado: {}", vehicle.plate_number);

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehicle created successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Vehicle, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<Vehicle>, AppError> {
        request.validate()?;

        if let Some(status) = &request.status {
            if !VEHICLE_STATUSES.contains(&status.as_str()) {
                return Err(AppError::BadRequest("Invalid vehicle status".to_string()));
            }
        }

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        if let Some(plate_number) = &request.plate_number {
            if &current.plate_number != plate_number
                && self.repository.plate_exists(plate_number).await?
            {
                return Err(AppError::Conflict(
                    "A vehicle with this plate number already exists".to_string(),
                ));
            }
        }

        let vehicle = self.repository.update(id, request).await?;

        Ok(ApiResponse::success_with_message(
            vehicle,
            "Vehicle updated successfully".to_string(),
        ))
    }
}
