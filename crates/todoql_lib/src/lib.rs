mod cli;
pub mod config;
pub mod graphql_api;
pub mod http;
mod prometheus_metrics;

pub use cli::CliOptions;
pub use prometheus_metrics::{metrics, PrometheusExporter, PrometheusMetrics};

pub const TODOQL_VERSION: &str = env!("CARGO_PKG_VERSION");
