use std::sync::Arc;

use social_pulse::api::routes::{create_routes, DashboardState};
use social_pulse::config::AppConfig;
use social_pulse::render::render_dashboard;
use social_pulse::services::data_loader::DataLoader;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str())),
        )
        .init();

    info!("Loading analysis outputs from {}", config.data_dir);
    let data = match DataLoader::new(config.data_dir.as_str()).load() {
        Ok(data) => data,
        Err(err) => {
            error!("{err}");
            error!("Run the upstream preprocessing and aggregation steps, then restart the dashboard");
            std::process::exit(1);
        }
    };
    info!(
        "Loaded {} words, {} sentiment days, {} users, {} tweets",
        data.word_counts.len(),
        data.daily_sentiment.len(),
        data.user_stats.len(),
        data.tweets.len()
    );

    // Render once; every request serves the same immutable page.
    let page = render_dashboard(&data)?;
    let app = create_routes(Arc::new(DashboardState { page }));

    let listener = TcpListener::bind(config.server_address()).await?;
    info!(
        "Dashboard available at http://{}/",
        config.server_address()
    );
    axum::serve(listener, app).await?;

    Ok(())
}
