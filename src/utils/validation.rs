//! Utilidades de validación
//!
//! Funciones de validación personalizadas que el derive de `validator`
//! no cubre: el año con tope dinámico y el enum de tipos de vehículo.

use chrono::{Datelike, Utc};
use validator::ValidationError;

use crate::models::vehicle::VehicleType;

pub const MIN_YEAR: i32 = 1900;

/// Año máximo admitido: el año natural en curso más uno.
/// Se calcula en el momento de validar, no es una constante.
pub fn max_year() -> i32 {
    Utc::now().year() + 1
}

/// Validar el año de fabricación
pub fn validate_year(year: i32) -> Result<(), ValidationError> {
    let max = max_year();
    if year < MIN_YEAR || year > max {
        let mut error = ValidationError::new("year_out_of_range");
        error.message = Some("El año debe estar entre 1900 y el año próximo.".into());
        error.add_param("min".into(), &MIN_YEAR);
        error.add_param("max".into(), &max);
        return Err(error);
    }
    Ok(())
}

/// Validar que el tipo sea uno de los seis literales del enum
pub fn validate_vehicle_type(value: &str) -> Result<(), ValidationError> {
    if VehicleType::parse(value).is_none() {
        let mut error = ValidationError::new("vehicle_type");
        error.message = Some("El tipo de vehículo no es válido.".into());
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_year_boundaries() {
        assert!(validate_year(1900).is_ok());
        assert!(validate_year(1899).is_err());

        let max = max_year();
        assert!(validate_year(max).is_ok());
        assert!(validate_year(max + 1).is_err());
    }

    #[test]
    fn test_validate_vehicle_type() {
        assert!(validate_vehicle_type("car").is_ok());
        assert!(validate_vehicle_type("other").is_ok());
        assert!(validate_vehicle_type("spaceship").is_err());
        assert!(validate_vehicle_type("").is_err());
    }
}
