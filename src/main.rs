//! Weighwise API server.

use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use weighwise::adapters::auth::JwtSessionValidator;
use weighwise::adapters::http::{app_router, HttpSettings, ListsAppState, OriginPolicy};
use weighwise::adapters::memory::InMemoryListRepository;
use weighwise::adapters::postgres::{run_migrations, PostgresListRepository};
use weighwise::config::AppConfig;
use weighwise::domain::sharing::VoterIdHasher;
use weighwise::ports::{ListRepository, SessionValidator};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// JSON logs in production, human-readable otherwise.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn list_repository(config: &AppConfig) -> Result<Arc<dyn ListRepository>, BoxError> {
    if !config.database.is_configured() {
        tracing::warn!("No database URL configured; using the in-memory list store");
        return Ok(Arc::new(InMemoryListRepository::new()));
    }

    let db = &config.database;
    let pool = PgPoolOptions::new()
        .min_connections(db.min_connections)
        .max_connections(db.max_connections)
        .acquire_timeout(db.acquire_timeout())
        .idle_timeout(db.idle_timeout())
        .connect(&db.url)
        .await?;

    if db.run_migrations {
        run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    Ok(Arc::new(PostgresListRepository::new(pool)))
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let repository = list_repository(&config).await?;
    let validator: Arc<dyn SessionValidator> = Arc::new(JwtSessionValidator::new(
        &config.auth.jwt_secret,
        config.auth.issuer.as_deref(),
        config.auth.audience.as_deref(),
    ));
    let hasher = Arc::new(VoterIdHasher::new(&config.sharing.voter_hash_secret)?);

    let settings = HttpSettings {
        request_timeout: config.server.request_timeout(),
        cors_origins: config.server.cors_origins_list(),
        origin_policy: OriginPolicy::new(config.server.trust_forwarded_headers),
    };
    let app = app_router(ListsAppState::new(repository, hasher), validator, &settings);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Weighwise listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
