// src/cli.rs
//! CLI definitions for the cookbook service
//!
//! This module contains the command-line interface definitions using clap.
//! The commands themselves are carried out in `main.rs`.

use clap::{Parser, Subcommand};
use cookbook::recipe::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cookbook")]
#[command(author = "Cookbook Contributors")]
#[command(version)]
#[command(about = "In-memory cookbook with recursive recipe resolution", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    #[cfg(feature = "server")]
    Serve {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Address to bind to (overrides the configuration file)
        #[arg(short, long)]
        bind: Option<String>,

        /// JSON file of entries to register before serving
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// Normalize a hand-written recipe name
    Parse {
        /// Raw recipe name
        text: String,
    },

    /// Print the resolved cost of a recipe from a JSON file of entries
    Summary {
        /// JSON file containing an array of entries
        #[arg(short, long)]
        file: PathBuf,

        /// Recipe to resolve
        name: String,

        /// Deepest recipe nesting allowed (1 to 1024)
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, value_parser = parse_max_depth)]
        max_depth: usize,
    },
}

/// Parse a depth limit between 1 and [`MAX_DEPTH_LIMIT`]
fn parse_max_depth(value: &str) -> Result<usize, String> {
    let depth: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if !(1..=MAX_DEPTH_LIMIT).contains(&depth) {
        return Err(format!("must be between 1 and {}", MAX_DEPTH_LIMIT));
    }
    Ok(depth)
}
