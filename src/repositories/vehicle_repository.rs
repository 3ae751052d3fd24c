//! Repositorio de vehículos

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest};
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (
                id, plate_number, make, model, year, transmission, vehicle_type,
                status, registration_expiry, insurance_expiry, mileage, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'available', $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.plate_number)
        .bind(request.make)
        .bind(request.model)
        .bind(request.year)
        .bind(request.transmission)
        .bind(request.vehicle_type)
        .bind(request.registration_expiry)
        .bind(request.insurance_expiry)
        .bind(request.mileage)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn plate_exists(&self, plate_number: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE plate_number = $1)")
                .bind(plate_number)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(vehicles)
    }

    pub async fn list_available(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE status = 'available' ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET plate_number = COALESCE($2, plate_number),
                make = COALESCE($3, make),
                model = COALESCE($4, model),
                year = COALESCE($5, year),
                transmission = COALESCE($6, transmission),
                vehicle_type = COALESCE($7, vehicle_type),
                status = COALESCE($8, status),
                registration_expiry = COALESCE($9, registration_expiry),
                insurance_expiry = COALESCE($10, insurance_expiry),
                last_maintenance = COALESCE($11, last_maintenance),
                next_maintenance = COALESCE($12, next_maintenance),
                mileage = COALESCE($13, mileage)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.plate_number)
        .bind(request.make)
        .bind(request.model)
        .bind(request.year)
        .bind(request.transmission)
        .bind(request.vehicle_type)
        .bind(request.status)
        .bind(request.registration_expiry)
        .bind(request.insurance_expiry)
        .bind(request.last_maintenance)
        .bind(request.next_maintenance)
        .bind(request.mileage)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn count_available(&self) -> Result<i64, AppError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM vehicles WHERE status = 'available'")
                .fetch_one(&self.pool)
                .await?;

        Ok(count.0)
    }
}
