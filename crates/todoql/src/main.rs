use std::net::Ipv4Addr;

use anyhow::Context;
use clap::Parser;
use prometheus_exporter::prometheus;
use todoql_lib::config::Config;
use todoql_lib::graphql_api::{self, ApiSchemaContext};
use todoql_lib::{http, metrics, CliOptions, PrometheusExporter, TODOQL_VERSION};
use tokio::net::TcpListener;
use tracing::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!(version = TODOQL_VERSION, "Parse options");
    let cli_options = CliOptions::parse();

    info!("Loading configuration");
    let config = Config::from_cli(&cli_options)?;

    info!("Initialize store");
    let store = config.store()?;
    info!(
        users = store.users().len(),
        todos = store.todos().len(),
        "Store initialization successful"
    );

    // Registers the metrics before the exporter starts serving them.
    let _ = metrics();
    let _exporter = if config.prometheus_port == 0 {
        info!("Prometheus exporter disabled");
        None
    } else {
        let registry = prometheus::default_registry().clone();
        let exporter = PrometheusExporter::start(config.prometheus_port, registry)?;
        info!(port = exporter.port(), "Prometheus exporter started");
        Some(exporter)
    };

    let port = config.graphql.port;
    let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))
        .await
        .with_context(|| format!("failed to bind API server to port {port}"))?;
    let api_schema = graphql_api::api_schema(ApiSchemaContext::new(store));

    info!("Server ready at http://localhost:{port}/");
    http::serve(listener, api_schema, http::shutdown_signal()).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;
    use tracing_subscriber::EnvFilter;

    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
