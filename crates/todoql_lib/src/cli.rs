use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, about, version)]
pub struct CliOptions {
    /// Path to the YAML configuration file. All settings have defaults, so
    /// it can be omitted.
    #[clap(long, env = "TODOQL_CONFIG")]
    pub config: Option<PathBuf>,
    /// The port on which the GraphQL API server should listen. Takes
    /// precedence over the configuration file.
    #[clap(long, env = "TODOQL_PORT")]
    pub port: Option<u16>,
}
