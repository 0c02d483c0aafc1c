//! DTOs de la API
//!
//! Requests, responses y envoltorios JSON del recurso Vehicle.

pub mod vehicle_dto;
