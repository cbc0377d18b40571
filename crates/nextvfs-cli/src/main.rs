// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nextvfs_cli::commands;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nextvfs")]
#[command(author = "Maravilla Labs")]
#[command(version)]
#[command(about = "Inspect Next.js route resolution over an in-memory filesystem", long_about = None)]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a URL pathname against a project directory
    Resolve {
        /// Project root directory
        dir: PathBuf,
        /// URL pathname to resolve (e.g. /users/123)
        pathname: String,
    },
    /// List every route the project defines
    Routes {
        /// Project root directory
        dir: PathBuf,
    },
    /// Show the values recovered from next.config.* and tailwind.config.*
    Config {
        /// Project root directory
        dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with the specified log level
    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Resolve { dir, pathname } => commands::resolve::run(&dir, &pathname),
        Commands::Routes { dir } => commands::routes::run(&dir),
        Commands::Config { dir } => commands::config::run(&dir),
    }
}
