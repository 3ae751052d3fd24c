mod config;
mod controllers;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::database::DatabaseConfig;
use config::environment::EnvironmentConfig;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚙 DriveSchool ERP - API");
    info!("========================");

    let env_config = EnvironmentConfig::default();

    // Inicializar base de datos
    let db_config = DatabaseConfig::default();
    let pool = match db_config.create_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let bind_addr = format!("{}:{}", env_config.host, env_config.port);

    // CORS permisivo en desarrollo, orígenes explícitos en producción
    let cors = if env_config.is_production() {
        cors_middleware_with_origins(env_config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    let app_state = AppState::new(pool, env_config);

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api", routes::api_router())
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = bind_addr.parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Autenticación:");
    info!("   POST /api/login - Login");
    info!("   GET  /api/me - Usuario actual");
    info!("   PUT  /api/profile - Actualizar perfil");
    info!("🎓 Estudiantes:");
    info!("   GET  /api/students - Listar estudiantes");
    info!("   POST /api/students - Registrar estudiante");
    info!("   GET  /api/students/:id - Obtener estudiante");
    info!("   PUT  /api/students/:id - Actualizar estudiante");
    info!("   DELETE /api/students/:id - Archivar estudiante");
    info!("📋 Matrículas:");
    info!("   GET  /api/enrollments - Listar matrículas");
    info!("   POST /api/enrollments - Crear matrícula");
    info!("   POST /api/enrollments/:id/payment - Registrar pago");
    info!("   PUT  /api/enrollments/:id/progress - Actualizar progreso");
    info!("📅 Sesiones:");
    info!("   GET  /api/schedules - Listar sesiones");
    info!("   POST /api/schedules - Reservar sesión");
    info!("   PUT  /api/schedules/:id - Actualizar sesión");
    info!("   GET  /api/available-slots - Slots disponibles");
    info!("🥽 Simulador VR:");
    info!("   GET  /api/vr/scenarios - Catálogo de escenarios");
    info!("   POST /api/vr/sessions - Registrar sesión VR");
    info!("📊 Dashboards:");
    info!("   GET  /api/dashboard - Panel de administración");
    info!("   GET  /api/student/dashboard - Portal del estudiante");
    info!("   GET  /api/instructor/dashboard - Portal del instructor");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "driveschool-erp",
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
            info!("🛑 Señal SIGTERM recibida, apagando servidor...");
        },
    }
}
