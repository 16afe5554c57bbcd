use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use rb_app::WizardSession;
use recipebook_lib::bootstrap::{resolve_config, wire_dependencies};
use recipebook_lib::screen::{execute, parse, CommandError, Flow, TerminalScreen};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// Create a recipe step by step from the terminal.
#[derive(Parser, Debug)]
#[command(name = "recipebook", version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of the JSON document store (overrides the configuration)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    recipebook_lib::bootstrap::tracing::init_tracing_subscriber()
        .context("Failed to initialize tracing")?;

    let config = resolve_config(args.config.as_deref(), args.data_dir)?;
    let screen = Arc::new(TerminalScreen::new(std::io::stdout()));
    let deps = wire_dependencies(config, screen.clone())?;
    let session = WizardSession::new(&deps, screen.clone());

    screen.print("new recipe (type `help` for commands)");
    screen.show_state(&session.wizard().get_state().await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let command = match parse(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                screen.print(&format!("  {err}"));
                continue;
            }
        };
        match execute(&session, &*screen, command).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => {
                warn!(error = %err, "command rejected");
                screen.print(&format!("  {err}"));
            }
        }
    }

    if !screen.is_closed() {
        info!("input closed before the recipe was saved");
        screen.print("recipe not saved");
    }
    Ok(())
}
