use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use transport_admin::config::database::DatabaseConfig;
use transport_admin::config::EnvironmentConfig;
use transport_admin::database;
use transport_admin::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging (RUST_LOG, por defecto info)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🚚 Transport Admin - Panel de administración");
    info!("============================================");

    let config = EnvironmentConfig::from_env()?;

    // Inicializar base de datos
    let db_config = DatabaseConfig::new(config.database_url.clone());
    let pool = match db_config.create_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    database::initialize(&pool, &config)
        .await
        .context("Error inicializando el esquema")?;
    info!("✅ Esquema listo en {}", config.database_url);

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .context("HOST/PORT inválidos")?;

    let state = AppState::new(pool, config);
    let app = transport_admin::create_app(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔐 Auth:      POST /api/auth/login · POST /api/auth/logout · GET /api/auth/session");
    info!("🧭 Vistas:    GET  /api/menu · GET /api/views/:slug · GET /api/dashboard");
    info!("📋 Tablas:    /api/drivers · /api/vehicles · /api/expenses · /api/income · /api/attendance · /api/tasks");
    info!("📊 Reportes:  /api/reports/profit-loss · /api/reports/vehicle-expenses · /api/reports/daily-expenses");
    info!("🛡️ Seguros:   GET  /api/insurance/alerts?days=N");
    info!("📤 Export:    GET  /api/export/:table");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("⚠️ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("⚠️ No se pudo escuchar SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
