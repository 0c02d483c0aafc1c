//! Controladores del sistema
//!
//! Orquestan validación y acceso a los repositorios.

pub mod vehicle_controller;
