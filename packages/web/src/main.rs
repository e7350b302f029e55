use anyhow::Context;
use market_web::settings::Settings;
use market_web::{router, AppState};
use tower_sessions::cookie::time::Duration;
use tower_sessions::cookie::SameSite;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let settings = Settings::new().context("Failed to load settings")?;

    // Initialize database pool and schema
    let pool = market_api::db::connect(&settings.database.url, settings.database.connections)
        .await
        .context("Failed to connect to database")?;

    // Create session store
    let session_store = SqliteStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .context("Failed to migrate session store")?;

    // Session layer configuration
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(settings.session.secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(
            settings.session.lifetime,
        )));

    let router = router(AppState { pool }).layer(session_layer);

    let addr = settings.server.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();
}
