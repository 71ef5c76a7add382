use color_eyre::eyre::Result;
use dotenv::dotenv;
use timetext_app::config::AppConfig;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env()?;

    // Logs go to stderr so they do not interleave with the availability text
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Formatting service at {}", config.api.endpoint_url());

    match timetext_app::start_app(config).await {
        Ok(_) => info!("TimeText shut down"),
        Err(e) => error!("TimeText error: {}", e),
    }

    Ok(())
}
