use std::net::SocketAddr;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dxy_covid::config::{load_dotenv, Config};
use dxy_covid::fetch::{check_connectivity, https_client};
use dxy_covid::license::print_banner;
use dxy_covid::server::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env before the logger so RUST_LOG is picked up
    let dotenv = load_dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = dotenv {
        warn!("Error loading .env file: {}", e);
    }

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    print_banner(config.banner_language);

    let client = https_client();

    if config.check_connectivity {
        check_connectivity(&client, &config.source_url, config.connectivity_timeout)
            .await
            .with_context(|| format!("cannot reach {}", config.source_url))?;
        info!("Connected to {}", config.source_url);
    } else {
        warn!("Skipping connectivity check for {}", config.source_url);
    }

    let app_state = AppState::new(client, config.source_url.clone(), config.banner_language);
    let app = router(app_state);

    let addr: SocketAddr = config
        .server_address()
        .parse()
        .with_context(|| format!("invalid listen address {}", config.server_address()))?;
    info!("Listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
