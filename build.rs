// build.rs

use clap::{Arg, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

fn build_cli() -> Command {
    Command::new("cookbook")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Cookbook Contributors")
        .about("In-memory cookbook with recursive recipe resolution")
        .subcommand_required(true)
        .subcommand(
            Command::new("serve")
                .about("Run the HTTP server")
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .value_name("PATH")
                        .help("Path to a TOML configuration file"),
                )
                .arg(
                    Arg::new("bind")
                        .short('b')
                        .long("bind")
                        .value_name("ADDR")
                        .help("Address to bind to (overrides the configuration file)"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_name("PATH")
                        .help("JSON file of entries to register before serving"),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("Normalize a hand-written recipe name")
                .arg(Arg::new("text").required(true).help("Raw recipe name")),
        )
        .subcommand(
            Command::new("summary")
                .about("Print the resolved cost of a recipe from a JSON file of entries")
                .arg(
                    Arg::new("file")
                        .short('f')
                        .long("file")
                        .value_name("PATH")
                        .required(true)
                        .help("JSON file containing an array of entries"),
                )
                .arg(Arg::new("name").required(true).help("Recipe to resolve"))
                .arg(
                    Arg::new("max_depth")
                        .long("max-depth")
                        .default_value("64")
                        .help("Deepest recipe nesting allowed (1 to 1024)"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory - use CARGO_MANIFEST_DIR which is always set by cargo
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("cookbook.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
