//! DTOs del recurso Vehicle
//!
//! Requests validables, responses y metadatos de paginación.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::query::{FilterSpec, PER_PAGE};
use crate::models::vehicle::{Vehicle, VehicleType};
use crate::utils::validation::{validate_vehicle_type, validate_year};

/// Request para crear o actualizar un vehículo
///
/// Contiene exactamente los siete campos escribibles; cualquier campo
/// desconocido queda rechazado en la deserialización por construcción.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct VehicleInput {
    #[validate(length(
        min = 1,
        max = 255,
        message = "La marca es obligatoria y admite como máximo 255 caracteres."
    ))]
    pub brand: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "El modelo es obligatorio y admite como máximo 255 caracteres."
    ))]
    pub model: String,

    #[validate(custom = "validate_year")]
    pub year: i32,

    #[validate(length(
        min = 1,
        max = 15,
        message = "El número de matrícula es obligatorio y admite como máximo 15 caracteres."
    ))]
    pub license_plate: String,

    #[validate(custom = "validate_vehicle_type")]
    pub vehicle_type: String,

    #[validate(length(
        min = 1,
        max = 50,
        message = "El color es obligatorio y admite como máximo 50 caracteres."
    ))]
    pub color: String,

    #[validate(length(
        min = 1,
        max = 255,
        message = "El nombre del propietario es obligatorio y admite como máximo 255 caracteres."
    ))]
    pub owner_name: String,
}

/// Response de vehículo para la API
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VehicleResponse {
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

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            brand: vehicle.brand,
            model: vehicle.model,
            year: vehicle.year,
            license_plate: vehicle.license_plate,
            vehicle_type: vehicle.vehicle_type,
            color: vehicle.color,
            owner_name: vehicle.owner_name,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}

/// Parámetros de búsqueda del listado (query string)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleFilters {
    pub search: Option<String>,
    pub brand: Option<String>,
    pub vehicle_type: Option<String>,
    pub page: Option<i64>,
}

impl VehicleFilters {
    /// Filtros normalizados para el repositorio
    pub fn spec(&self) -> FilterSpec {
        FilterSpec::new(
            self.search.clone(),
            self.brand.clone(),
            self.vehicle_type.clone(),
        )
    }

    /// Página pedida, nunca menor que 1
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Filtros tal como se devuelven al cliente (strings vacíos si ausentes)
    pub fn echo(&self) -> EchoedFilters {
        EchoedFilters {
            search: self.search.clone().unwrap_or_default(),
            brand: self.brand.clone().unwrap_or_default(),
            vehicle_type: self.vehicle_type.clone().unwrap_or_default(),
        }
    }
}

/// Filtros activos devueltos junto al listado
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EchoedFilters {
    pub search: String,
    pub brand: String,
    pub vehicle_type: String,
}

/// Página de resultados con metadatos de paginación
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub current_page: i64,
    pub last_page: i64,
    pub per_page: i64,
    pub total: i64,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: i64, current_page: i64) -> Self {
        // last_page nunca es cero: una búsqueda sin resultados sigue
        // siendo una página válida
        let last_page = ((total + PER_PAGE - 1) / PER_PAGE).max(1);
        Self {
            data,
            current_page,
            last_page,
            per_page: PER_PAGE,
            total,
        }
    }
}

/// Opción de tipo para los controles de formulario (literal + etiqueta)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VehicleTypeOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Mapa fijo literal -> etiqueta, en el orden del schema
pub fn vehicle_type_options() -> Vec<VehicleTypeOption> {
    VehicleType::ALL
        .iter()
        .map(|t| VehicleTypeOption {
            value: t.as_str(),
            label: t.label(),
        })
        .collect()
}

/// Payload del listado: página + datos para los controles de filtrado
#[derive(Debug, Serialize)]
pub struct VehicleIndexResponse {
    pub vehicles: Page<VehicleResponse>,
    pub brands: Vec<String>,
    pub vehicle_types: Vec<VehicleTypeOption>,
    pub filters: EchoedFilters,
}

/// Metadatos para el formulario de alta
#[derive(Debug, Serialize)]
pub struct VehicleFormResponse {
    pub vehicle_types: Vec<VehicleTypeOption>,
}

/// Payload de detalle y de edición
#[derive(Debug, Serialize)]
pub struct VehicleShowResponse {
    pub vehicle: VehicleResponse,
    pub vehicle_types: Vec<VehicleTypeOption>,
}

/// Response genérica con mensaje de operación
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> VehicleInput {
        VehicleInput {
            brand: "Toyota".to_string(),
            model: "Avanza".to_string(),
            year: 2020,
            license_plate: "B 1234 ABC".to_string(),
            vehicle_type: "car".to_string(),
            color: "Blanco".to_string(),
            owner_name: "Ahmad Santoso".to_string(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn test_unknown_fields_rejected_at_deserialization() {
        let json = serde_json::json!({
            "brand": "Toyota",
            "model": "Avanza",
            "year": 2020,
            "license_plate": "B 1234 ABC",
            "vehicle_type": "car",
            "color": "Blanco",
            "owner_name": "Ahmad Santoso",
            "is_admin": true,
        });
        assert!(serde_json::from_value::<VehicleInput>(json).is_err());

        let json = serde_json::json!({
            "brand": "Toyota",
            "model": "Avanza",
            "year": 2020,
            "license_plate": "B 1234 ABC",
            "vehicle_type": "car",
            "color": "Blanco",
            "owner_name": "Ahmad Santoso",
        });
        assert!(serde_json::from_value::<VehicleInput>(json).is_ok());
    }

    #[test]
    fn test_field_length_limits() {
        let mut input = valid_input();
        input.brand = String::new();
        assert!(input.validate().is_err());

        let mut input = valid_input();
        input.brand = "a".repeat(256);
        assert!(input.validate().is_err());

        let mut input = valid_input();
        input.license_plate = "a".repeat(16);
        assert!(input.validate().is_err());

        let mut input = valid_input();
        input.license_plate = "a".repeat(15);
        assert!(input.validate().is_ok());

        let mut input = valid_input();
        input.color = "a".repeat(51);
        assert!(input.validate().is_err());

        let mut input = valid_input();
        input.owner_name = "a".repeat(255);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_all_field_errors_collected_in_one_pass() {
        let input = VehicleInput {
            brand: String::new(),
            model: String::new(),
            year: 1800,
            license_plate: String::new(),
            vehicle_type: "spaceship".to_string(),
            color: String::new(),
            owner_name: String::new(),
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields.len(), 7);
    }

    #[test]
    fn test_page_metadata() {
        let page = Page::new(vec![1; 10], 25, 1);
        assert_eq!(page.last_page, 3);
        assert_eq!(page.per_page, 10);
        assert_eq!(page.total, 25);

        // sin resultados la página sigue siendo válida
        let page: Page<i32> = Page::new(Vec::new(), 0, 1);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.last_page, 1);
        assert_eq!(page.total, 0);

        let page: Page<i32> = Page::new(vec![1; 10], 10, 1);
        assert_eq!(page.last_page, 1);
    }

    #[test]
    fn test_filters_page_clamped_and_echoed() {
        let filters = VehicleFilters {
            page: Some(-3),
            ..Default::default()
        };
        assert_eq!(filters.page(), 1);

        let filters = VehicleFilters {
            search: Some("Ahmad".to_string()),
            ..Default::default()
        };
        let echoed = filters.echo();
        assert_eq!(echoed.search, "Ahmad");
        assert_eq!(echoed.brand, "");
        assert_eq!(echoed.vehicle_type, "");
    }

    #[test]
    fn test_vehicle_type_options_complete() {
        let options = vehicle_type_options();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0].value, "car");
        assert_eq!(options[0].label, "Coche");
        assert_eq!(options[5].value, "other");
    }
}
