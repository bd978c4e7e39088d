use shared_types::ClientConfig;
use tracing::{info, warn};

/// Config file bundled into the binary.
const BUNDLED_CONFIG: &str = include_str!("../config.toml");

/// Build-time override for the API base URL.
const API_URL_OVERRIDE: Option<&str> = option_env!("MARKETPLACE_API_URL");

/// Load the client config. A malformed bundled file falls back to defaults.
pub fn load_client_config() -> ClientConfig {
    resolve_config(BUNDLED_CONFIG, API_URL_OVERRIDE)
}

fn resolve_config(contents: &str, api_url: Option<&str>) -> ClientConfig {
    let config = match ClientConfig::from_toml_str(contents) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "falling back to default client config");
            ClientConfig::default()
        }
    };
    let config = match api_url {
        Some(url) => config.with_api_base_url(url),
        None => config,
    };
    info!(
        api = %config.api_base_url,
        page_size = config.default_page_size,
        features = ?config.features,
        "client config loaded"
    );
    config
}
