//! todo.txt MCP Server - Main Entry Point
//!
//! This is the main entry point for the todo.txt MCP server application.
//! The actual implementation is in the `todotxt_mcp` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use todotxt_mcp::{Config, TodoServerHandler};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// todo.txt MCP Server - due-aware task lists from plain-text notes via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the notes file (TOML)
    file: String,

    /// Path to the configuration file (TOML); defaults apply when omitted
    #[arg(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();

    // stdout carries the MCP protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("todotxt_mcp=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    };

    let handler = TodoServerHandler::new(&args.file, config)?;
    info!(file = %args.file, "serving todo.txt notes over stdio");
    serve_stdio(handler).await?;
    Ok(())
}
