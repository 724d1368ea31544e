//! Browser front end: search TVMaze, list shows, open detail overlays.

mod app;
mod logging;
mod search;
mod shows;
mod widgets;

use leptos::prelude::*;
use tvscout_core::config::AppConfig;
use wasm_bindgen::prelude::*;

pub use app::App;

/// Id of the optional `<script type="application/toml">` element holding
/// config overrides.
const CONFIG_ELEMENT_ID: &str = "tvscout-config";

fn page_config_overrides() -> Option<String> {
    document()
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

#[wasm_bindgen(start)]
pub fn start() {
    let overrides = page_config_overrides();
    let (config, config_error) = match AppConfig::load(overrides.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    logging::init(&config.logging.level);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Ignoring page config overrides");
    }
    tracing::info!(base_url = %config.api.base_url, "Starting tvscout");

    mount_to_body(move || view! { <App config=config /> });
}
