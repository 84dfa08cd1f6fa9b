use slow_job_fixture::config::Config;
use slow_job_fixture::{AppState, app, logger};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {

    dotenvy::dotenv().ok();

    logger::init_tracing();

    let config = Config::from_env()?;

    let state = AppState {
        delay: config.delay
    };

    let listener = TcpListener::bind(config.addr).await?;
    tracing::info!(
        "listening on {} (delay {}ms)",
        listener.local_addr()?,
        config.delay.as_millis()
    );

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())

}

async fn shutdown_signal() {

    match signal::ctrl_c().await {
        Ok(()) => tracing::info!("received shutdown request"),
        Err(e) => tracing::error!("unable to listen for shutdown signal: {}", e)
    }

}
