//! Repositorios de acceso a datos
//!
//! El trait `VehicleRepository` aísla el validador y el motor de filtrado
//! del motor de almacenamiento concreto: en producción se usa Postgres y
//! en la suite de tests una implementación en memoria.

pub mod memory;
pub mod vehicle_repository;

use async_trait::async_trait;

use crate::dto::vehicle_dto::VehicleInput;
use crate::models::query::FilterSpec;
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppResult;

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Inserta un vehículo nuevo; asigna id y timestamps
    async fn create(&self, input: &VehicleInput) -> AppResult<Vehicle>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Vehicle>>;

    /// Reemplaza todos los campos escribibles y refresca updated_at;
    /// None si el id no existe
    async fn update(&self, id: i64, input: &VehicleInput) -> AppResult<Option<Vehicle>>;

    /// true si se borró una fila
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// Filas de la página pedida (1-based) y total de coincidencias
    async fn list(&self, filters: &FilterSpec, page: i64) -> AppResult<(Vec<Vehicle>, i64)>;

    /// Pre-chequeo de unicidad de matrícula; en update el propio registro
    /// queda exento vía exclude_id
    async fn license_plate_taken(&self, plate: &str, exclude_id: Option<i64>) -> AppResult<bool>;

    /// Marcas distintas presentes en el registro, ordenadas alfabéticamente
    async fn distinct_brands(&self) -> AppResult<Vec<String>>;
}

pub use memory::InMemoryVehicleRepository;
pub use vehicle_repository::PgVehicleRepository;
