use anyhow::Result;

use paging_backend::{app, config, db, logging, pagination::NavConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let settings = config::Settings::from_env()?;

    logging::init_logging(&settings.env, settings.log_format);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        default_per_page = settings.pagination.default_per_page,
        max_per_page = settings.pagination.max_per_page,
        "Starting paging backend"
    );

    let pool = db::create_pool(&settings).await?;
    db::ensure_schema(&pool).await?;

    let state = app::AppState::new(pool, settings.clone(), NavConfig::default());
    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
