//! Client configuration. The defaults reproduce the values the original
//! deployment used; a TOML file can override any of them.

use serde::Deserialize;
use std::path::Path;

/// Endpoint of the local plot-generation service
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000/generate_plot";

/// Region queried when no configuration file is given
pub const DEFAULT_SIDO: &str = "경상남도";

/// Sub-region queried when no configuration file is given
pub const DEFAULT_SIGUNGU: &str = "고성군";

/// HTTP timeout for the single plot request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Full URL of the `generate_plot` endpoint
    pub server_url: String,

    /// Province-level region sent in the request
    pub sido: String,

    /// District-level region sent in the request
    pub sigungu: String,

    /// Seconds before the blocking request is abandoned
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_url: DEFAULT_SERVER_URL.into(),
            sido: DEFAULT_SIDO.into(),
            sigungu: DEFAULT_SIGUNGU.into(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Build the configuration from defaults, overridden by `path` if given.
    /// A missing field in the file falls back to its default.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("server_url", DEFAULT_SERVER_URL)?
            .set_default("sido", DEFAULT_SIDO)?
            .set_default("sigungu", DEFAULT_SIGUNGU)?
            .set_default("request_timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder.build()?.try_deserialize()
    }
}
