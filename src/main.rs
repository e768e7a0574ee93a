// src/main.rs

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use cookbook::recipe::Resolver;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        #[cfg(feature = "server")]
        Commands::Serve { config, bind, seed } => serve(config, bind, seed),
        Commands::Parse { text } => {
            let name = cookbook::normalize(&text)?;
            println!("{}", name);
            Ok(())
        }
        Commands::Summary {
            file,
            name,
            max_depth,
        } => {
            let registry = cookbook::seed::load_registry(&file)
                .with_context(|| format!("Failed to load entries from {}", file.display()))?;
            let summary = Resolver::new(&registry)
                .with_max_depth(max_depth)
                .resolve(&name)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
    }
}

#[cfg(feature = "server")]
fn serve(
    config_path: Option<std::path::PathBuf>,
    bind: Option<String>,
    seed: Option<std::path::PathBuf>,
) -> Result<()> {
    use cookbook::server::{run_server, CookbookConfig};

    let mut config = match config_path {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            CookbookConfig::load(&path)?
        }
        None => CookbookConfig::default(),
    };
    if let Some(bind) = bind {
        config.server.bind = bind;
    }
    config.validate()?;
    let server_config = config.to_server_config()?;

    let registry = match seed {
        Some(path) => cookbook::seed::load_registry(&path)
            .with_context(|| format!("Failed to load entries from {}", path.display()))?,
        None => cookbook::Registry::new(),
    };

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(run_server(server_config, registry))
}
