//! mb CLI - Route tree and breadcrumb resolver.
//!
//! Provides commands for:
//! - `breadcrumbs`: Resolve the breadcrumb trail for a path
//! - `menu`: Show the navigation menu for a path
//! - `menu-toggle`: Flip the persisted menu open/closed state
//! - `routes`: List the route tree

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BreadcrumbsArgs, MenuArgs, MenuToggleArgs, RoutesArgs};
use output::Output;

/// mb - Route tree and breadcrumb resolver.
#[derive(Parser)]
#[command(name = "mb", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the breadcrumb trail for a path.
    Breadcrumbs(BreadcrumbsArgs),
    /// Show the navigation menu for a path.
    Menu(MenuArgs),
    /// Open or close the navigation menu.
    MenuToggle(MenuToggleArgs),
    /// List the route tree.
    Routes(RoutesArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Breadcrumbs(args) => args.common.verbose,
            Self::Menu(args) => args.common.verbose,
            Self::MenuToggle(args) => args.common.verbose,
            Self::Routes(args) => args.common.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Breadcrumbs(args) => args.execute(),
        Commands::Menu(args) => args.execute(),
        Commands::MenuToggle(args) => args.execute(),
        Commands::Routes(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
