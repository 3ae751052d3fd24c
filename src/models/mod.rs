//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod certificate;
pub mod course;
pub mod enrollment;
pub mod instructor;
pub mod schedule;
pub mod student;
pub mod user;
pub mod vehicle;
pub mod vr_session;
