//! Repositorio de vehículos en memoria
//!
//! Implementación para la suite de tests. Reutiliza el motor de filtrado
//! puro de `models::query`, así las semánticas de búsqueda son las mismas
//! que las del repositorio Postgres.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::VehicleRepository;
use crate::dto::vehicle_dto::VehicleInput;
use crate::models::query::{self, FilterSpec};
use crate::models::vehicle::{Vehicle, VehicleType};
use crate::utils::errors::{duplicate_plate_error, AppError, AppResult};

#[derive(Default)]
pub struct InMemoryVehicleRepository {
    inner: RwLock<Store>,
}

#[derive(Default)]
struct Store {
    vehicles: Vec<Vehicle>,
    // contador monótono: los ids no se reutilizan tras borrar
    next_id: i64,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn parse_type(input: &VehicleInput) -> AppResult<VehicleType> {
        VehicleType::parse(&input.vehicle_type).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Tipo de vehículo desconocido: {}",
                input.vehicle_type
            ))
        })
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn create(&self, input: &VehicleInput) -> AppResult<Vehicle> {
        let vehicle_type = Self::parse_type(input)?;
        let mut store = self.inner.write().await;

        // equivalente al índice único: autoridad final también aquí
        if store
            .vehicles
            .iter()
            .any(|v| v.license_plate == input.license_plate)
        {
            return Err(duplicate_plate_error());
        }

        store.next_id += 1;
        let now = Utc::now();
        let vehicle = Vehicle {
            id: store.next_id,
            brand: input.brand.clone(),
            model: input.model.clone(),
            year: input.year,
            license_plate: input.license_plate.clone(),
            vehicle_type,
            color: input.color.clone(),
            owner_name: input.owner_name.clone(),
            created_at: now,
            updated_at: now,
        };
        store.vehicles.push(vehicle.clone());

        Ok(vehicle)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Vehicle>> {
        let store = self.inner.read().await;
        Ok(store.vehicles.iter().find(|v| v.id == id).cloned())
    }

    async fn update(&self, id: i64, input: &VehicleInput) -> AppResult<Option<Vehicle>> {
        let vehicle_type = Self::parse_type(input)?;
        let mut store = self.inner.write().await;

        if store
            .vehicles
            .iter()
            .any(|v| v.id != id && v.license_plate == input.license_plate)
        {
            return Err(duplicate_plate_error());
        }

        let Some(vehicle) = store.vehicles.iter_mut().find(|v| v.id == id) else {
            return Ok(None);
        };

        vehicle.brand = input.brand.clone();
        vehicle.model = input.model.clone();
        vehicle.year = input.year;
        vehicle.license_plate = input.license_plate.clone();
        vehicle.vehicle_type = vehicle_type;
        vehicle.color = input.color.clone();
        vehicle.owner_name = input.owner_name.clone();
        vehicle.updated_at = Utc::now();

        Ok(Some(vehicle.clone()))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut store = self.inner.write().await;
        let before = store.vehicles.len();
        store.vehicles.retain(|v| v.id != id);
        Ok(store.vehicles.len() < before)
    }

    async fn list(&self, filters: &FilterSpec, page: i64) -> AppResult<(Vec<Vehicle>, i64)> {
        let store = self.inner.read().await;

        let mut matches = query::apply_filters(&store.vehicles, filters);
        query::sort_newest_first(&mut matches);

        let total = matches.len() as i64;
        let rows = query::page_slice(&matches, page);

        Ok((rows, total))
    }

    async fn license_plate_taken(&self, plate: &str, exclude_id: Option<i64>) -> AppResult<bool> {
        let store = self.inner.read().await;
        Ok(store
            .vehicles
            .iter()
            .any(|v| v.license_plate == plate && exclude_id != Some(v.id)))
    }

    async fn distinct_brands(&self) -> AppResult<Vec<String>> {
        let store = self.inner.read().await;
        let mut brands: Vec<String> = store.vehicles.iter().map(|v| v.brand.clone()).collect();
        brands.sort();
        brands.dedup();
        Ok(brands)
    }
}
