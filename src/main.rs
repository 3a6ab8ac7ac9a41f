//! SmartTerm - interactive filesystem shell with a Gemini-backed `!ai` mode
//!
//! Thin binary entry point: configuration, logging, then the read loop.

use std::io::{self, IsTerminal};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use smartterm::AgentBridge;
use smartterm::cli::{EditorInput, run_repl};
use smartterm::config::{AgentConfig, load_dotenv};
use smartterm_shell::{Session, Shell};

#[derive(Debug, Parser)]
#[command(
    name = "smartterm",
    version,
    about = "Smart terminal for developers: filesystem commands plus natural-language queries"
)]
struct Cli {
    /// Gemini model used for `!ai` requests (overrides GEMINI_MODEL)
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env (non-fatal if missing)
    load_dotenv().ok();

    let args = Cli::parse();
    initialize_tracing().ok();

    let config = AgentConfig::from_env().with_model_override(args.model);
    if !config.has_api_key() {
        tracing::warn!("GEMINI_API_KEY is not set; !ai requests will fail until it is provided");
    }
    tracing::info!(model = %config.model, "starting SmartTerm");

    let session = Session::from_process().context("Failed to determine the working directory")?;
    let input = EditorInput::new()?;
    let mut shell = Shell::with_system_probe(session).with_input(Box::new(input));
    let bridge = AgentBridge::new(Arc::new(config.build_provider()));

    let styled = !args.no_color && io::stdout().is_terminal();
    run_repl(&mut shell, &bridge, styled).await
}

/// Install a stderr subscriber only when RUST_LOG is set, so logs never mix
/// into normal shell output.
fn initialize_tracing() -> Result<bool> {
    use tracing_subscriber::prelude::*;

    if std::env::var("RUST_LOG").is_err() {
        return Ok(false);
    }

    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    Ok(true)
}
