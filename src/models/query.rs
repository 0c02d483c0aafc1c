//! Motor de filtrado en memoria
//!
//! Funciones puras que implementan los predicados de búsqueda sobre
//! vehículos. El repositorio en memoria las usa directamente; el
//! repositorio Postgres empuja los mismos predicados a SQL (ILIKE),
//! así que las semánticas de coincidencia son las mismas en ambos.
//!
//! La coincidencia por substring es deliberadamente case-insensitive.

use crate::models::vehicle::Vehicle;

/// Tamaño fijo de página del listado
pub const PER_PAGE: i64 = 10;

/// Filtros normalizados de una búsqueda de vehículos
///
/// Un string vacío en la query equivale a no enviar el filtro, por eso
/// aquí solo viven valores no vacíos.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    pub search: Option<String>,
    pub brand: Option<String>,
    pub vehicle_type: Option<String>,
}

impl FilterSpec {
    pub fn new(
        search: Option<String>,
        brand: Option<String>,
        vehicle_type: Option<String>,
    ) -> Self {
        Self {
            search: normalize(search),
            brand: normalize(brand),
            vehicle_type: normalize(vehicle_type),
        }
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Substring case-insensitive, equivalente a ILIKE '%term%'
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Coincidencia exacta de tipo; un literal desconocido no coincide nunca
pub fn matches_type(vehicle: &Vehicle, vehicle_type: &str) -> bool {
    vehicle.vehicle_type.as_str() == vehicle_type
}

pub fn matches_brand(vehicle: &Vehicle, brand: &str) -> bool {
    contains_ci(&vehicle.brand, brand)
}

/// El término de búsqueda coincide si aparece en cualquiera de los
/// campos de texto del vehículo (OR entre campos)
pub fn matches_search(vehicle: &Vehicle, term: &str) -> bool {
    contains_ci(&vehicle.brand, term)
        || contains_ci(&vehicle.model, term)
        || contains_ci(&vehicle.license_plate, term)
        || contains_ci(&vehicle.color, term)
        || contains_ci(&vehicle.owner_name, term)
}

/// Aplica los filtros activos combinados con AND
pub fn apply_filters(vehicles: &[Vehicle], filters: &FilterSpec) -> Vec<Vehicle> {
    vehicles
        .iter()
        .filter(|v| {
            filters
                .vehicle_type
                .as_deref()
                .map_or(true, |t| matches_type(v, t))
        })
        .filter(|v| filters.brand.as_deref().map_or(true, |b| matches_brand(v, b)))
        .filter(|v| filters.search.as_deref().map_or(true, |s| matches_search(v, s)))
        .cloned()
        .collect()
}

/// Orden del listado: más recientes primero, empates por id descendente
pub fn sort_newest_first(vehicles: &mut [Vehicle]) {
    vehicles.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}

/// Recorta la página pedida (1-based); fuera de rango devuelve vacío
pub fn page_slice(vehicles: &[Vehicle], page: i64) -> Vec<Vehicle> {
    // aritmética saturante: un número de página hostil no debe desbordar
    let start = page.max(1).saturating_sub(1).saturating_mul(PER_PAGE) as usize;
    vehicles
        .iter()
        .skip(start)
        .take(PER_PAGE as usize)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::VehicleType;
    use chrono::{Duration, Utc};

    fn vehicle(id: i64, brand: &str, vehicle_type: VehicleType, owner: &str) -> Vehicle {
        let created_at = Utc::now() + Duration::seconds(id);
        Vehicle {
            id,
            brand: brand.to_string(),
            model: "Modelo".to_string(),
            year: 2020,
            license_plate: format!("B {:04} XX", id),
            vehicle_type,
            color: "Blanco".to_string(),
            owner_name: owner.to_string(),
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn test_normalize_empty_filters() {
        let spec = FilterSpec::new(Some(String::new()), None, Some("".to_string()));
        assert_eq!(spec, FilterSpec::default());

        let spec = FilterSpec::new(Some("Ahmad".to_string()), None, None);
        assert_eq!(spec.search.as_deref(), Some("Ahmad"));
    }

    #[test]
    fn test_matches_brand_is_case_insensitive_substring() {
        let v = vehicle(1, "Toyota", VehicleType::Car, "Ahmad Santoso");
        assert!(matches_brand(&v, "toyo"));
        assert!(matches_brand(&v, "TOYOTA"));
        assert!(!matches_brand(&v, "Honda"));
    }

    #[test]
    fn test_matches_type_is_exact() {
        let v = vehicle(1, "Toyota", VehicleType::Car, "Ahmad Santoso");
        assert!(matches_type(&v, "car"));
        assert!(!matches_type(&v, "truck"));
        assert!(!matches_type(&v, "Car"));
        assert!(!matches_type(&v, "spaceship"));
    }

    #[test]
    fn test_matches_search_any_field() {
        let v = vehicle(7, "Toyota", VehicleType::Car, "Ahmad Santoso");
        assert!(matches_search(&v, "ahmad"));
        assert!(matches_search(&v, "toyota"));
        assert!(matches_search(&v, "0007"));
        assert!(matches_search(&v, "blanco"));
        assert!(!matches_search(&v, "zzz-nomatch"));
    }

    #[test]
    fn test_apply_filters_combines_with_and() {
        let vehicles = vec![
            vehicle(1, "Toyota", VehicleType::Car, "Ahmad Santoso"),
            vehicle(2, "Toyota", VehicleType::Truck, "Budi Hartono"),
            vehicle(3, "Honda", VehicleType::Car, "Ahmad Santoso"),
        ];

        let spec = FilterSpec::new(
            Some("Ahmad".to_string()),
            Some("Toyota".to_string()),
            Some("car".to_string()),
        );
        let result = apply_filters(&vehicles, &spec);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);

        // sin filtros no se aplica ningún predicado
        let result = apply_filters(&vehicles, &FilterSpec::default());
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_sort_newest_first_breaks_ties_by_id() {
        let now = Utc::now();
        let mut vehicles = vec![
            vehicle(1, "Toyota", VehicleType::Car, "A"),
            vehicle(2, "Honda", VehicleType::Car, "B"),
            vehicle(3, "Suzuki", VehicleType::Car, "C"),
        ];
        for v in &mut vehicles {
            v.created_at = now;
        }
        sort_newest_first(&mut vehicles);
        let ids: Vec<i64> = vehicles.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_page_slice_bounds() {
        let vehicles: Vec<Vehicle> = (1..=25)
            .map(|id| vehicle(id, "Toyota", VehicleType::Car, "A"))
            .collect();

        assert_eq!(page_slice(&vehicles, 1).len(), 10);
        assert_eq!(page_slice(&vehicles, 3).len(), 5);
        assert!(page_slice(&vehicles, 4).is_empty());
        // páginas no positivas se tratan como la primera
        assert_eq!(page_slice(&vehicles, 0)[0].id, 1);
        // un número de página hostil no desborda, solo queda vacío
        assert!(page_slice(&vehicles, i64::MAX).is_empty());
    }
}
