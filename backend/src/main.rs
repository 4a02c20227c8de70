use std::process::ExitCode;

use catrank::{bootstrap, lifecycle::serve, BackendError, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[rocket::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🚀 Starting cat rank server");

    match run().await {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), BackendError> {
    let config = Config::load()?;
    let rocket = bootstrap(&config)?;
    info!("📋 Cat data ready at {}", config.data_path.display());

    serve(rocket, config.shutdown_deadline()).await
}
