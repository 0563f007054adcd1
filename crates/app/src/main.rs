use dioxus::prelude::*;
use shared_types::UiConfig;
use shared_ui::components::HeaderLabelsProvider;

mod routes;
use routes::Route;

const THEME: Asset = asset!("/assets/theme.css");

/// Config bundled into the binary so every platform starts with the same labels.
const BUNDLED_CONFIG: &str = include_str!("../folio.toml");

/// Env var pointing at a config file that replaces the bundled one.
const CONFIG_ENV: &str = "FOLIO_CONFIG";

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

/// Load UI config, preferring `$FOLIO_CONFIG` when it is set.
///
/// A broken config never stops the app; defaults are used instead.
fn load_ui_config() -> UiConfig {
    let loaded = match std::env::var(CONFIG_ENV) {
        Ok(path) => {
            tracing::info!(%path, "loading UI config from file");
            UiConfig::load(&path)
        }
        Err(_) => UiConfig::from_toml_str(BUNDLED_CONFIG),
    };

    match loaded {
        Ok(config) => {
            tracing::debug!(?config, "UI config loaded");
            config
        }
        Err(e) => {
            tracing::warn!("{e}; falling back to default labels");
            UiConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_ui_config);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        HeaderLabelsProvider { labels: config.labels,
            Router::<Route> {}
        }
    }
}
