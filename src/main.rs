use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use fleet_control::config::environment::EnvironmentConfig;
use fleet_control::schema::tables;
use fleet_control::state::AppState;
use fleet_control::store::{InMemoryTableStore, SheetApiClient, TableStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Fleet Control - Sistema de Control Automotivo");
    info!("================================================");

    let config = EnvironmentConfig::default();

    // Inicializar el store tabular según el modo configurado
    let store: Arc<dyn TableStore> = if config.storage_mode == "memory" {
        info!("🧪 Modo memory: store tabular en memoria (sin planilla remota)");
        Arc::new(InMemoryTableStore::with_schemas(&[
            &tables::VEHICLES,
            &tables::PROVIDERS,
            &tables::SERVICES,
        ]))
    } else {
        let base_url = config
            .sheet_api_base_url
            .clone()
            .ok_or_else(|| anyhow::anyhow!("SHEET_API_BASE_URL must be set"))?;
        let sheet_id = config
            .sheet_id
            .clone()
            .ok_or_else(|| anyhow::anyhow!("SHEET_ID must be set"))?;
        let api_token = config
            .sheet_api_token
            .clone()
            .ok_or_else(|| anyhow::anyhow!("SHEET_API_TOKEN must be set"))?;
        Arc::new(SheetApiClient::new(base_url, sheet_id, api_token))
    };

    let state = AppState::new(store, config.clone());
    let app = fleet_control::create_app(state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚗 Vehículos:");
    info!("   GET    /api/vehicles - Listar vehículos");
    info!("   POST   /api/vehicles - Crear vehículo");
    info!("   GET    /api/vehicles/:id - Obtener vehículo");
    info!("   PUT    /api/vehicles/:id - Actualizar vehículo");
    info!("   DELETE /api/vehicles/:id - Eliminar vehículo");
    info!("🔧 Prestadores:");
    info!("   GET    /api/providers - Listar prestadores");
    info!("   POST   /api/providers - Crear prestador");
    info!("   POST   /api/providers/upsert - Alta o actualización por empresa");
    info!("   GET    /api/providers/:id - Obtener prestador");
    info!("   PUT    /api/providers/:id - Actualizar prestador");
    info!("   DELETE /api/providers/:id - Eliminar prestador");
    info!("🛠️ Servicios:");
    info!("   GET    /api/services - Listar servicios");
    info!("   POST   /api/services - Crear servicio");
    info!("   GET    /api/services/:id - Obtener servicio");
    info!("   PUT    /api/services/:id - Actualizar servicio");
    info!("   DELETE /api/services/:id - Eliminar servicio");
    info!("📊 Reportes:");
    info!("   GET  /api/reports/service-history - Historial (filtro por fechas)");
    info!("   GET  /api/reports/detailed-history - Historial con días a vencer");
    info!("   GET  /api/reports/spend-summary - Resumen de gastos por vehículo");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
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
