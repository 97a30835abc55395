use crate::error::{CliError, Result};
use chemscope::core::rest::{Endpoints, PugClient};
use chemscope::render::chart::ChartOptions;
use chemscope::render::page::PageOptions;
use chemscope::render::viewer::ViewerOptions;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Optional TOML configuration for the CLI.
///
/// Every field has a sensible default; an absent file means defaults
/// throughout. No timeout is applied unless one is configured, so a slow
/// request blocks exactly as long as the HTTP library allows.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Root of the PUG REST service family (mirrors, test servers).
    #[serde(rename = "base-url")]
    pub base_url: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ViewerConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub spin: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ChartConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("cannot read '{}': {}", path.display(), e))
        })?;
        let config: Self = toml::from_str(&text)
            .map_err(|e| CliError::Config(format!("invalid config '{}': {}", path.display(), e)))?;
        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Builds the compound database client described by this configuration.
    pub fn client(&self) -> Result<PugClient> {
        let endpoints = match &self.api.base_url {
            Some(base) => Endpoints::new(base.clone()),
            None => Endpoints::default(),
        };
        let timeout = self.api.timeout_secs.map(Duration::from_secs);
        Ok(PugClient::new(endpoints, timeout)?)
    }

    /// Presentation settings for the HTML report.
    pub fn page_options(&self) -> PageOptions {
        let viewer_defaults = ViewerOptions::default();
        let chart_defaults = ChartOptions::default();
        PageOptions {
            viewer: ViewerOptions {
                width: self.viewer.width.unwrap_or(viewer_defaults.width),
                height: self.viewer.height.unwrap_or(viewer_defaults.height),
                spin: self.viewer.spin.unwrap_or(viewer_defaults.spin),
            },
            chart: ChartOptions {
                width: self.chart.width.unwrap_or(chart_defaults.width),
                height: self.chart.height.unwrap_or(chart_defaults.height),
            },
        }
    }
}
