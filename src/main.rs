use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use codegalaxy::catalog;
use codegalaxy::interface::Navigator;
use codegalaxy::server;

/// Runtime settings, read from an optional `galaxy` config file and
/// overridable through `GALAXY_`-prefixed environment variables.
#[derive(Debug, Deserialize)]
struct Settings {
    #[serde(default = "default_listen")]
    listen: String,
    #[serde(default = "default_log")]
    log: String,
}

fn default_listen() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_log() -> String {
    "info".to_string()
}

fn load_settings() -> codegalaxy::error::Result<Settings> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("galaxy").required(false))
        .add_source(config::Environment::with_prefix("GALAXY"))
        .build()?
        .try_deserialize()?;
    Ok(settings)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("codegalaxy={},info", settings.log))
        }))
        .init();

    let registry = catalog::standard();
    info!(
        languages = registry.languages().len(),
        number_systems = registry.number_systems().len(),
        coding_schemes = registry.coding_schemes().len(),
        "catalog loaded"
    );

    let navigator = Arc::new(Navigator::new(registry));
    let app = server::router(navigator);
    let listener = tokio::net::TcpListener::bind(&settings.listen).await?;
    info!(listen = %settings.listen, "serving");
    axum::serve(listener, app).await?;
    Ok(())
}
