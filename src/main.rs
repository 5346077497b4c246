use anyhow::Result;
use clap::Parser;

use taskgraph::api;
use taskgraph::config::Config;
use taskgraph::graph::BoltStore;
use taskgraph::utils::logging;

#[derive(Parser)]
#[clap(version = "0.1.0", author = "Taskgraph Contributors")]
enum Cli {
    /// Start the taskgraph HTTP service
    Serve {
        #[clap(short, long, default_value = "config.toml")]
        config: String,
    },
    /// Verify connectivity to the graph store and exit
    Check {
        #[clap(short, long, default_value = "config.toml")]
        config: String,
    },
}

fn load_config(path: &str) -> Config {
    match Config::load(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Failed to load config from '{}': {}, using default config",
                path, e
            );
            Config::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli {
        Cli::Serve { config } => {
            let config = load_config(&config);
            logging::init(&config)?;

            api::start_service(config).await?;

            logging::shutdown();
        }
        Cli::Check { config } => {
            let config = load_config(&config);
            let store = BoltStore::connect(&config).await?;
            store.ping().await?;
            println!("Graph store at {} is reachable", config.bolt_uri);
        }
    }

    Ok(())
}
