use std::process::ExitCode;

use tana_config::Config;
use tracing_subscriber::EnvFilter;

mod pipeline;
mod report;


#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::new();

    match pipeline::run(&config).await {
        Ok(report) => {
            tracing::info!("pipeline finished: {report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            // Only transport and persistence failures land here; translation
            // errors are absorbed further down.
            tracing::error!("pipeline failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}
