use std::future::Future;
use std::time::Duration;

use rocket::{Build, Ignite, Rocket};
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tokio::task::JoinError;
use tracing::{error, info};

use crate::error::BackendError;

/// Runs the server until it fails on its own or a SIGINT/SIGTERM arrives.
pub async fn serve(rocket: Rocket<Build>, deadline: Duration) -> Result<(), BackendError> {
    serve_until(rocket, deadline, shutdown_signal()).await
}

/// Runs the server until it fails on its own or `stop` resolves.
///
/// Once `stop` resolves the server is asked to shut down and gets `deadline`
/// to finish in-flight requests. Overrunning it is an error.
pub async fn serve_until(
    rocket: Rocket<Build>,
    deadline: Duration,
    stop: impl Future<Output = ()>,
) -> Result<(), BackendError> {
    let rocket = rocket.ignite().await?;
    let shutdown = rocket.shutdown();
    let mut server = tokio::spawn(rocket.launch());

    tokio::select! {
        finished = &mut server => return stopped(finished),
        _ = stop => {}
    }

    info!("🛑 Stopping server");
    shutdown.notify();

    match tokio::time::timeout(deadline, server).await {
        Ok(finished) => stopped(finished),
        Err(_) => Err(BackendError::ShutdownTimeout(deadline)),
    }
}

fn stopped(
    finished: Result<Result<Rocket<Ignite>, rocket::Error>, JoinError>,
) -> Result<(), BackendError> {
    match finished {
        Ok(Ok(_)) => Ok(()),
        Ok(Err(e)) => Err(e.into()),
        Err(e) => Err(BackendError::Server(e.to_string())),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
