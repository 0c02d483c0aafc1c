//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y el enum VehicleType.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Tipo de vehículo - mapea al ENUM vehicle_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "vehicle_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Motorcycle,
    Truck,
    Van,
    Bus,
    Other,
}

impl VehicleType {
    /// Los seis tipos admitidos, en el orden del schema
    pub const ALL: [VehicleType; 6] = [
        VehicleType::Car,
        VehicleType::Motorcycle,
        VehicleType::Truck,
        VehicleType::Van,
        VehicleType::Bus,
        VehicleType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Motorcycle => "motorcycle",
            VehicleType::Truck => "truck",
            VehicleType::Van => "van",
            VehicleType::Bus => "bus",
            VehicleType::Other => "other",
        }
    }

    /// Etiqueta legible para formularios y listados
    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Car => "Coche",
            VehicleType::Motorcycle => "Moto",
            VehicleType::Truck => "Camión",
            VehicleType::Van => "Furgoneta",
            VehicleType::Bus => "Autobús",
            VehicleType::Other => "Otro",
        }
    }

    /// Parsear un literal del enum; None si no es uno de los seis valores
    pub fn parse(value: &str) -> Option<VehicleType> {
        match value {
            "car" => Some(VehicleType::Car),
            "motorcycle" => Some(VehicleType::Motorcycle),
            "truck" => Some(VehicleType::Truck),
            "van" => Some(VehicleType::Van),
            "bus" => Some(VehicleType::Bus),
            "other" => Some(VehicleType::Other),
            _ => None,
        }
    }
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Vehicle {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub vehicle_type: VehicleType,
    pub color: String,
    pub owner_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vehicle_type() {
        assert_eq!(VehicleType::parse("car"), Some(VehicleType::Car));
        assert_eq!(VehicleType::parse("bus"), Some(VehicleType::Bus));
        assert_eq!(VehicleType::parse("spaceship"), None);
        assert_eq!(VehicleType::parse(""), None);
        // literales en mayúsculas no son válidos
        assert_eq!(VehicleType::parse("Car"), None);
    }

    #[test]
    fn test_as_str_round_trip() {
        for vehicle_type in VehicleType::ALL {
            assert_eq!(VehicleType::parse(vehicle_type.as_str()), Some(vehicle_type));
        }
    }

    #[test]
    fn test_labels_are_distinct() {
        let mut labels: Vec<&str> = VehicleType::ALL.iter().map(|t| t.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 6);
    }
}
