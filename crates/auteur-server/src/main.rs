mod api;
mod middleware;

use auteur_core::Environment;
use auteur_tmdb::TmdbClient;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = auteur_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::debug!(?config, "loaded configuration");
    if config.tmdb_api_key.is_none() {
        if config.env == Environment::Production {
            tracing::error!("TMDB_API_KEY not set; every upstream call will be rejected");
        } else {
            tracing::warn!("TMDB_API_KEY not set; every upstream call will be rejected");
        }
    }

    let tmdb = TmdbClient::with_base_url(
        config.tmdb_api_key.as_deref(),
        config.tmdb_timeout_secs,
        &config.tmdb_base_url,
    )?;
    let app = build_app(AppState::new(tmdb, config.tmdb_max_concurrent_requests));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "auteur server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
