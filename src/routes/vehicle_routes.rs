use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{
    ApiResponse, VehicleFilters, VehicleFormResponse, VehicleIndexResponse, VehicleInput,
    VehicleResponse, VehicleShowResponse,
};
use crate::repositories::PgVehicleRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index).post(create))
        .route("/new", get(new_form))
        .route("/:id", get(show).put(update).delete(destroy))
        .route("/:id/edit", get(edit))
}

fn controller(state: &AppState) -> VehicleController<PgVehicleRepository> {
    VehicleController::new(PgVehicleRepository::new(state.pool.clone()))
}

async fn index(
    State(state): State<AppState>,
    Query(filters): Query<VehicleFilters>,
) -> Result<Json<VehicleIndexResponse>, AppError> {
    let response = controller(&state).index(&filters).await?;
    Ok(Json(response))
}

async fn new_form(State(state): State<AppState>) -> Json<VehicleFormResponse> {
    Json(controller(&state).create_form())
}

async fn create(
    State(state): State<AppState>,
    Json(input): Json<VehicleInput>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleResponse>>), AppError> {
    let response = controller(&state).create(input).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<VehicleShowResponse>, AppError> {
    let response = controller(&state).show(id).await?;
    Ok(Json(response))
}

async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<VehicleShowResponse>, AppError> {
    let response = controller(&state).edit(id).await?;
    Ok(Json(response))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<VehicleInput>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let response = controller(&state).update(id, input).await?;
    Ok(Json(response))
}

async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let response = controller(&state).delete(id).await?;
    Ok(Json(response))
}
