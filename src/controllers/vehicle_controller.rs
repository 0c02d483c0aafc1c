//! Controlador del recurso Vehicle
//!
//! Orquesta validación, pre-chequeo de unicidad de matrícula y acceso al
//! repositorio. Es genérico sobre el trait del repositorio para que los
//! tests puedan sustituir Postgres por la implementación en memoria.

use validator::Validate;

use crate::dto::vehicle_dto::{
    vehicle_type_options, ApiResponse, Page, VehicleFilters, VehicleFormResponse,
    VehicleIndexResponse, VehicleInput, VehicleResponse, VehicleShowResponse,
};
use crate::repositories::VehicleRepository;
use crate::utils::errors::{duplicate_plate_error, AppError, AppResult};

pub struct VehicleController<R: VehicleRepository> {
    repository: R,
}

impl<R: VehicleRepository> VehicleController<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Listado con búsqueda, filtros y paginación
    pub async fn index(&self, filters: &VehicleFilters) -> AppResult<VehicleIndexResponse> {
        let spec = filters.spec();
        let page = filters.page();

        let (rows, total) = self.repository.list(&spec, page).await?;
        // la lista de marcas se recalcula en cada request, no se cachea
        let brands = self.repository.distinct_brands().await?;

        let vehicles = Page::new(
            rows.into_iter().map(VehicleResponse::from).collect(),
            total,
            page,
        );

        Ok(VehicleIndexResponse {
            vehicles,
            brands,
            vehicle_types: vehicle_type_options(),
            filters: filters.echo(),
        })
    }

    /// Metadatos del formulario de alta
    pub fn create_form(&self) -> VehicleFormResponse {
        VehicleFormResponse {
            vehicle_types: vehicle_type_options(),
        }
    }

    pub async fn create(&self, input: VehicleInput) -> AppResult<ApiResponse<VehicleResponse>> {
        input.validate()?;

        // Pre-chequeo consultivo; el índice único tiene la última palabra
        if self
            .repository
            .license_plate_taken(&input.license_plate, None)
            .await?
        {
            return Err(duplicate_plate_error());
        }

        let vehicle = self.repository.create(&input).await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo registrado exitosamente.".to_string(),
        ))
    }

    pub async fn show(&self, id: i64) -> AppResult<VehicleShowResponse> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehículo {} no encontrado", id)))?;

        Ok(VehicleShowResponse {
            vehicle: vehicle.into(),
            vehicle_types: vehicle_type_options(),
        })
    }

    /// Mismo payload que el detalle; existe para la ruta /:id/edit
    pub async fn edit(&self, id: i64) -> AppResult<VehicleShowResponse> {
        self.show(id).await
    }

    pub async fn update(
        &self,
        id: i64,
        input: VehicleInput,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        input.validate()?;

        // la matrícula actual del propio registro queda exenta del chequeo
        if self
            .repository
            .license_plate_taken(&input.license_plate, Some(id))
            .await?
        {
            return Err(duplicate_plate_error());
        }

        let vehicle = self
            .repository
            .update(id, &input)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehículo {} no encontrado", id)))?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo actualizado exitosamente.".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> AppResult<ApiResponse<()>> {
        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound(format!("Vehículo {} no encontrado", id)));
        }

        Ok(ApiResponse::message(
            "Vehículo eliminado exitosamente.".to_string(),
        ))
    }
}
