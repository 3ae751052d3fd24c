//! Servicios de negocio
//!
//! La lógica central del sistema: reservas, progreso, pagos y VR.

pub mod booking_service;
pub mod payment_service;
pub mod progress_service;
pub mod vr_service;
