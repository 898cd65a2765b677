use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Deserialize, Clone)]
pub struct PanelConfig {
    pub service: ServiceSettings,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceSettings {
    pub base_url: String,
    /// Transport-level timeout; unset means requests may wait forever
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl ServiceSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Defaults, then `config/panel.*` if present, then `PANEL__*` env vars.
pub fn load_panel_config() -> anyhow::Result<PanelConfig> {
    build_panel_config(config::File::with_name("config/panel").required(false))
}

fn build_panel_config<S>(file: S) -> anyhow::Result<PanelConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .set_default("service.base_url", DEFAULT_BASE_URL)?
        .set_default("log_level", "info")?
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("PANEL")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut panel: PanelConfig = settings.try_deserialize()?;
    panel.service.base_url = normalize_base_url(&panel.service.base_url);
    Ok(panel)
}

pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
