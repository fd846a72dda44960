//! Shiftlog server binary.
//!
//! Wires configuration, logging, the database pool, repositories, and
//! services together, then serves the HTTP API until shutdown.

use std::sync::Arc;

use tracing::{error, info};

use shiftlog_api::{AppState, build_router};
use shiftlog_auth::jwt::{JwtDecoder, JwtEncoder};
use shiftlog_auth::password::PasswordHasher;
use shiftlog_auth::session::manager::SessionManager;
use shiftlog_core::config::AppConfig;
use shiftlog_core::error::AppError;
use shiftlog_database::DatabasePool;
use shiftlog_database::migration::run_migrations;
use shiftlog_database::repositories::audit::AuditLogRepository;
use shiftlog_database::repositories::category::CategoryRepository;
use shiftlog_database::repositories::item::ItemRepository;
use shiftlog_database::repositories::report::ReportRepository;
use shiftlog_database::repositories::session::SessionRepository;
use shiftlog_database::repositories::template::TemplateRepository;
use shiftlog_database::repositories::user::UserRepository;
use shiftlog_service::audit::{AuditQueryService, AuditRecorder};
use shiftlog_service::category::CategoryService;
use shiftlog_service::item::{ItemService, SpreadsheetImporter};
use shiftlog_service::report::ReportService;
use shiftlog_service::stats::StatsService;
use shiftlog_service::template::TemplateService;
use shiftlog_service::user::admin::AdminUserService;
use shiftlog_service::user::service::UserService;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration for the environment named by `SHIFTLOG_ENV`
/// (defaults to `development`).
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("SHIFTLOG_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize the tracing subscriber according to the logging config.
fn init_logging(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    if config.logging.format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .init();
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    info!(
        host = %config.server.host,
        port = config.server.port,
        "Starting Shiftlog server"
    );

    // ── Step 1: Database ─────────────────────────────────────────────
    let db = DatabasePool::connect(&config.database).await?;
    run_migrations(db.pool()).await?;
    let pool = db.pool().clone();

    // ── Step 2: Repositories ─────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let category_repo = Arc::new(CategoryRepository::new(pool.clone()));
    let report_repo = Arc::new(ReportRepository::new(pool.clone()));
    let template_repo = Arc::new(TemplateRepository::new(pool.clone()));
    let item_repo = Arc::new(ItemRepository::new(pool.clone()));
    let audit_repo = Arc::new(AuditLogRepository::new(pool.clone()));
    let session_repo = Arc::new(SessionRepository::new(pool.clone()));

    // ── Step 3: Authentication ───────────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let session_manager = Arc::new(SessionManager::new(
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
        Arc::clone(&session_repo),
        Arc::clone(&user_repo),
        Arc::clone(&audit_repo),
        Arc::clone(&password_hasher),
        &config.auth,
    ));

    // ── Step 4: Services ─────────────────────────────────────────────
    let audit_recorder = AuditRecorder::new(Arc::clone(&audit_repo));

    let report_service = Arc::new(ReportService::new(
        Arc::clone(&report_repo),
        Arc::clone(&item_repo),
        Arc::clone(&category_repo),
        audit_recorder.clone(),
    ));
    let stats_service = Arc::new(StatsService::new(
        Arc::clone(&report_repo),
        Arc::clone(&category_repo),
        Arc::clone(&user_repo),
    ));
    let template_service = Arc::new(TemplateService::new(Arc::clone(&template_repo)));
    let category_service = Arc::new(CategoryService::new(
        Arc::clone(&category_repo),
        audit_recorder.clone(),
    ));
    let item_service = Arc::new(ItemService::new(
        Arc::clone(&item_repo),
        SpreadsheetImporter::new(),
        audit_recorder.clone(),
    ));
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        audit_recorder.clone(),
    ));
    let admin_user_service = Arc::new(AdminUserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        audit_recorder.clone(),
    ));
    let audit_service = Arc::new(AuditQueryService::new(Arc::clone(&audit_repo)));

    // ── Step 5: HTTP server ──────────────────────────────────────────
    let state = AppState {
        config: Arc::new(config.clone()),
        db_pool: pool,
        session_manager,
        report_service,
        stats_service,
        template_service,
        category_service,
        item_service,
        user_service,
        admin_user_service,
        audit_service,
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(address = %addr, "Shiftlog server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    info!("Shutdown complete");
    Ok(())
}

/// Resolve when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
