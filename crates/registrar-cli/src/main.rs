use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("rgr error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = registrar_config::RegistrarConfig::load().context("failed to load config")?;
    let db_path = cli.db.unwrap_or_else(|| config.database.path.clone());
    ensure_parent_dir(&db_path)?;

    let db = registrar_db::RegistrarDb::open_local(&db_path)
        .await
        .with_context(|| format!("failed to open store at '{db_path}'"))?;

    commands::dispatch(cli.command, &db, &config).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("REGISTRAR_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Create the store's parent directory so first runs work out of the box.
fn ensure_parent_dir(path: &str) -> anyhow::Result<()> {
    if path == ":memory:" {
        return Ok(());
    }
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create '{}'", parent.display()))?;
        }
    }
    Ok(())
}
