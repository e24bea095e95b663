use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use travelrec_core::config::Config;
use travelrec_recommend::TravelRecommender;
use travelrec_server::telemetry::init_tracing;
use travelrec_server::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::load().context("loading configuration")?;
    let settings = config.settings()?;

    let recommender = TravelRecommender::load(&settings).context("loading dataset and model artifacts")?;
    let app = router(AppState::new(recommender)?);

    let listener = TcpListener::bind(settings.bind_addr())
        .await
        .with_context(|| format!("binding {}", settings.bind_addr()))?;
    info!(addr = %listener.local_addr()?, "travelrec server listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
