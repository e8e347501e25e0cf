//! view-router
//!
//! Interactive shell over the route registry: loads a route table from
//! configuration, activates the initial route, then resolves navigation
//! requests read from stdin one per line.
//!
//! # Requests
//! ```text
//! /dashboard        navigate by path (query/fragment stripped)
//! @register         navigate by route name
//! back              re-activate the previously visited route
//! current           print the active route
//! routes            print the table
//! quit              exit
//! ```

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;

use view_router::bootstrap::bootstrap;
use view_router::config::loader::load_config;
use view_router::config::schema::AppConfig;
use view_router::navigation::navigator::NavigationOutcome;
use view_router::navigation::target::NavigationTarget;
use view_router::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "view-router")]
#[command(about = "Navigation shell for the dashboard route table", long_about = None)]
struct Cli {
    /// Path to the route table config (TOML or JSON).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Route name to activate at startup (overrides the config).
    #[arg(short, long)]
    initial: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(initial) = cli.initial {
        config.initial_route = initial;
    }

    init_logging(&config.observability);

    tracing::info!(
        routes = config.routes.len(),
        base_path = %config.base_path,
        initial_route = %config.initial_route,
        "Configuration loaded"
    );

    let mut navigator = bootstrap(config)?;
    if let Some(entry) = navigator.current_route() {
        println!("at {} -> {}", entry.path(), entry.view());
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "quit" | "exit" => break,
            "back" => match navigator.back() {
                Some(entry) => println!("at {} -> {}", entry.path(), entry.view()),
                None => println!("history is empty"),
            },
            "current" => match navigator.current_route() {
                Some(entry) => println!("at {} -> {}", entry.path(), entry.view()),
                None => println!("no active route"),
            },
            "routes" => {
                for entry in navigator.registry().entries() {
                    println!("{:<12} {:<12} {}", entry.name(), entry.path(), entry.view());
                }
            }
            _ => match NavigationTarget::parse(input) {
                NavigationTarget::Name(name) => match navigator.navigate_to_name(&name) {
                    Ok(entry) => println!("at {} -> {}", entry.path(), entry.view()),
                    Err(err) => println!("error: {}", err),
                },
                NavigationTarget::Path(path) => match navigator.navigate(&path) {
                    NavigationOutcome::Route(entry) => {
                        println!("at {} -> {}", entry.path(), entry.view())
                    }
                    NavigationOutcome::Fallback(view) => println!("no route -> {}", view),
                },
            },
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
