//! todoql configuration parsing.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use todoql_store::Store;
use tracing::info;

use crate::CliOptions;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlConfig {
    /// The port on which the GraphQL API server should listen.
    #[serde(default = "Config::default_graphql_api_port")]
    pub port: u16,
}

impl Default for GraphQlConfig {
    fn default() -> Self {
        Self {
            port: Config::default_graphql_api_port(),
        }
    }
}

/// A [`serde`]-compatible representation of todoql's YAML configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// GraphQL API configuration.
    #[serde(default)]
    pub graphql: GraphQlConfig,
    /// The port on which the Prometheus exporter should listen. Set it to 0 to
    /// disable the exporter.
    #[serde(default = "Config::default_prometheus_port")]
    pub prometheus_port: u16,
    /// Path to a YAML file with `users` and `todos` to serve instead of the
    /// built-in ones.
    #[serde(default)]
    pub seed_data: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graphql: GraphQlConfig::default(),
            prometheus_port: Self::default_prometheus_port(),
            seed_data: None,
        }
    }
}

impl Config {
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open config file {}", path.display()))?;
        serde_yaml::from_reader(file).context("invalid config file")
    }

    /// Reads the configuration file named on the command line, if any, and
    /// applies command line overrides on top of it.
    pub fn from_cli(options: &CliOptions) -> anyhow::Result<Self> {
        let mut config = match &options.config {
            Some(path) => Self::read(path)?,
            None => {
                info!("No configuration file given, using defaults");
                Self::default()
            }
        };

        if let Some(port) = options.port {
            config.graphql.port = port;
        }

        Ok(config)
    }

    /// Builds the store out of the configured seed data file, falling back
    /// to the built-in data.
    pub fn store(&self) -> anyhow::Result<Store> {
        match &self.seed_data {
            Some(path) => Ok(Store::from_file(path)?),
            None => Ok(Store::with_builtin_data()),
        }
    }

    fn default_prometheus_port() -> u16 {
        9184
    }

    fn default_graphql_api_port() -> u16 {
        8000
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.graphql.port, 8000);
        assert_eq!(config.prometheus_port, 9184);
        assert!(config.seed_data.is_none());
    }

    #[test]
    fn parses_camel_case_keys() {
        let yaml = "graphql:\n  port: 4000\nprometheusPort: 0\nseedData: ./seed.yaml\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.graphql.port, 4000);
        assert_eq!(config.prometheus_port, 0);
        assert_eq!(config.seed_data, Some(PathBuf::from("./seed.yaml")));
    }

    #[test]
    fn cli_port_overrides_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "graphql:\n  port: 4000").unwrap();

        let options = CliOptions {
            config: Some(file.path().to_owned()),
            port: Some(5000),
        };
        let config = Config::from_cli(&options).unwrap();
        assert_eq!(config.graphql.port, 5000);
    }

    #[test]
    fn no_config_file_means_builtin_store() {
        let options = CliOptions {
            config: None,
            port: None,
        };
        let config = Config::from_cli(&options).unwrap();
        assert_eq!(config.graphql.port, 8000);
        assert_eq!(config.store().unwrap().users().len(), 2);
    }

    #[test]
    fn missing_seed_data_file_is_an_error() {
        let config = Config {
            seed_data: Some(PathBuf::from("/nonexistent/seed.yaml")),
            ..Config::default()
        };
        assert!(config.store().is_err());
    }
}
