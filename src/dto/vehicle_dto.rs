//! DTOs de vehículos

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

/// Request para registrar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 5, max = 20))]
    pub plate_number: String,

    #[validate(length(min = 2, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1990, max = 2030))]
    pub year: Option<i32>,

    /// manual | automatic
    pub transmission: Option<String>,

    /// sedan | motorcycle | truck ...
    pub vehicle_type: Option<String>,

    pub registration_expiry: Option<NaiveDate>,
    pub insurance_expiry: Option<NaiveDate>,
    pub mileage: Option<i32>,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 5, max = 20))]
    pub plate_number: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1990, max = 2030))]
    pub year: Option<i32>,

    pub transmission: Option<String>,
    pub vehicle_type: Option<String>,

    /// available | in_use | maintenance | retired
    pub status: Option<String>,

    pub registration_expiry: Option<NaiveDate>,
    pub insurance_expiry: Option<NaiveDate>,
    pub last_maintenance: Option<NaiveDate>,
    pub next_maintenance: Option<NaiveDate>,
    pub mileage: Option<i32>,
}
