use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use std::env;

pub const DEFAULT_LOG_FILTER: &str = "lodge=info,lodge_catalog=info";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub log: LogConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directives, used when `RUST_LOG` is unset
    pub filter: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// How notices are written to stdout
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    /// Files under `config/` are looked up relative to the working directory
    /// and are all optional.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Self::defaults()?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `LODGE_OUTPUT__FORMAT=json`
            .add_source(
                config::Environment::with_prefix("LODGE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        s.try_deserialize()
    }

    /// Builder pre-seeded with built-in defaults, so every file source is optional.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("log.filter", DEFAULT_LOG_FILTER)?
            .set_default("output.format", "text")
    }
}
