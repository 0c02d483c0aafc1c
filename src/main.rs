use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use vehicle_registry::config::environment::EnvironmentConfig;
use vehicle_registry::database;
use vehicle_registry::middleware::cors::cors_middleware;
use vehicle_registry::routes;
use vehicle_registry::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Vehicle Registry - API de registro de vehículos");
    info!("==================================================");

    let config = EnvironmentConfig::from_env();

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(e);
        }
    };

    database::run_migrations(&pool).await?;
    info!("✅ Migraciones aplicadas");

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());

    let app = Router::new()
        .route("/health-check", get(health_check))
        .nest("/vehicles", routes::vehicle_routes::create_vehicle_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware(&config))
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health-check - Health check");
    info!("🚗 Endpoints - Vehicle:");
    info!("   GET    /vehicles - Listado con búsqueda, filtros y paginación");
    info!("   GET    /vehicles/new - Metadatos del formulario de alta");
    info!("   POST   /vehicles - Registrar vehículo");
    info!("   GET    /vehicles/:id - Detalle de vehículo");
    info!("   GET    /vehicles/:id/edit - Metadatos del formulario de edición");
    info!("   PUT    /vehicles/:id - Actualizar vehículo");
    info!("   DELETE /vehicles/:id - Eliminar vehículo");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
