use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use widgetgrid::{init_logging, replay, Config, Session, SettingsManager};

#[derive(Debug, Parser)]
#[command(
    name = "widgetgrid",
    about = "Replays a recorded widget drag session and prints the final placements",
    version
)]
struct Cli {
    /// Session file (JSON)
    session: PathBuf,

    /// Config file (.json or .toml); defaults to the per-user config
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let config = match cli.config {
        Some(path) => Config::load_from_file(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => match SettingsManager::default_config_path() {
            Ok(path) => SettingsManager::load_or_default(path).config().clone(),
            Err(_) => Config::default(),
        },
    };

    let session = Session::load(&cli.session)
        .with_context(|| format!("loading session {}", cli.session.display()))?;
    let report = replay(&config, &session)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
