//! Repositorio de vehículos sobre PostgreSQL
//!
//! Los tres filtros del listado se resuelven con binds opcionales: un
//! bind NULL desactiva su predicado, así la query es estática. La
//! coincidencia por substring usa ILIKE (case-insensitive, decisión
//! documentada en DESIGN.md); los comodines % y _ del término se
//! escapan para que el texto del usuario coincida de forma literal,
//! igual que en el motor en memoria.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

use super::VehicleRepository;
use crate::dto::vehicle_dto::VehicleInput;
use crate::models::query::{FilterSpec, PER_PAGE};
use crate::models::vehicle::{Vehicle, VehicleType};
use crate::utils::errors::{duplicate_plate_error, is_unique_violation, AppError, AppResult};

pub struct PgVehicleRepository {
    pool: PgPool,
}

/// Escapa los comodines de ILIKE para que el término se compare literal
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

impl PgVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn parse_type(input: &VehicleInput) -> AppResult<VehicleType> {
        // el controlador valida antes; esto solo cubre usos directos
        VehicleType::parse(&input.vehicle_type).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Tipo de vehículo desconocido: {}",
                input.vehicle_type
            ))
        })
    }

    /// El índice único es la autoridad final sobre la matrícula: una
    /// violación 23505 se devuelve como error de validación del campo
    fn map_write_error(error: sqlx::Error) -> AppError {
        if is_unique_violation(&error) {
            duplicate_plate_error()
        } else {
            AppError::Database(error)
        }
    }
}

#[async_trait]
impl VehicleRepository for PgVehicleRepository {
    async fn create(&self, input: &VehicleInput) -> AppResult<Vehicle> {
        let vehicle_type = Self::parse_type(input)?;
        let now = Utc::now();

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (brand, model, year, license_plate, vehicle_type, color, owner_name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
            RETURNING *
            "#,
        )
        .bind(&input.brand)
        .bind(&input.model)
        .bind(input.year)
        .bind(&input.license_plate)
        .bind(vehicle_type)
        .bind(&input.color)
        .bind(&input.owner_name)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(Self::map_write_error)?;

        Ok(vehicle)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    async fn update(&self, id: i64, input: &VehicleInput) -> AppResult<Option<Vehicle>> {
        let vehicle_type = Self::parse_type(input)?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET brand = $2, model = $3, year = $4, license_plate = $5,
                vehicle_type = $6, color = $7, owner_name = $8, updated_at = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&input.brand)
        .bind(&input.model)
        .bind(input.year)
        .bind(&input.license_plate)
        .bind(vehicle_type)
        .bind(&input.color)
        .bind(&input.owner_name)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(Self::map_write_error)?;

        Ok(vehicle)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, filters: &FilterSpec, page: i64) -> AppResult<(Vec<Vehicle>, i64)> {
        // aritmética saturante: un número de página hostil no debe desbordar
        let offset = page.max(1).saturating_sub(1).saturating_mul(PER_PAGE);

        let rows = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT * FROM vehicles
            WHERE ($1::text IS NULL OR vehicle_type::text = $1)
              AND ($2::text IS NULL OR brand ILIKE '%' || $2 || '%')
              AND ($3::text IS NULL
                   OR brand ILIKE '%' || $3 || '%'
                   OR model ILIKE '%' || $3 || '%'
                   OR license_plate ILIKE '%' || $3 || '%'
                   OR color ILIKE '%' || $3 || '%'
                   OR owner_name ILIKE '%' || $3 || '%')
            ORDER BY created_at DESC, id DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(filters.vehicle_type.as_deref())
        .bind(filters.brand.as_deref().map(escape_like))
        .bind(filters.search.as_deref().map(escape_like))
        .bind(PER_PAGE)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let (total,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM vehicles
            WHERE ($1::text IS NULL OR vehicle_type::text = $1)
              AND ($2::text IS NULL OR brand ILIKE '%' || $2 || '%')
              AND ($3::text IS NULL
                   OR brand ILIKE '%' || $3 || '%'
                   OR model ILIKE '%' || $3 || '%'
                   OR license_plate ILIKE '%' || $3 || '%'
                   OR color ILIKE '%' || $3 || '%'
                   OR owner_name ILIKE '%' || $3 || '%')
            "#,
        )
        .bind(filters.vehicle_type.as_deref())
        .bind(filters.brand.as_deref().map(escape_like))
        .bind(filters.search.as_deref().map(escape_like))
        .fetch_one(&self.pool)
        .await?;

        Ok((rows, total))
    }

    async fn license_plate_taken(&self, plate: &str, exclude_id: Option<i64>) -> AppResult<bool> {
        let (taken,): (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM vehicles
                WHERE license_plate = $1
                  AND ($2::bigint IS NULL OR id <> $2)
            )
            "#,
        )
        .bind(plate)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(taken)
    }

    async fn distinct_brands(&self) -> AppResult<Vec<String>> {
        let brands =
            sqlx::query_scalar::<_, String>("SELECT DISTINCT brand FROM vehicles ORDER BY brand")
                .fetch_all(&self.pool)
                .await?;

        Ok(brands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_makes_wildcards_literal() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
        // texto sin comodines queda intacto
        assert_eq!(escape_like("Toyota"), "Toyota");
    }
}
