use clap::Parser;
use restdock::registry::RouteRegistry;
use restdock::runtime_config::RuntimeConfig;
use restdock::{config, server};
use tracing_subscriber::EnvFilter;

/// Serve the documentation endpoints for one configured server.
#[derive(Parser, Debug)]
#[command(name = "restdock", version, about)]
struct Cli {
    /// Path to the layered configuration file (YAML or JSON)
    #[arg(long, default_value = "config/config.yaml")]
    config: String,

    /// 1-based index of the server entry to start
    #[arg(long, default_value_t = 1)]
    server: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let runtime = RuntimeConfig::from_env();
    may::config().set_stack_size(runtime.stack_size);

    let global = config::load_config(&cli.config)?;
    server::serve(&global, cli.server, RouteRegistry::new())
}
