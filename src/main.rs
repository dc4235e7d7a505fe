use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::runtime::Handle;

use breathwork::cli::Cli;
use breathwork::config::{Config, SoundConfig};
use breathwork::presets::PresetCatalog;
use breathwork::session::{BreathingModel, SessionController};
use breathwork::sound::{AudioBackend, SoundBoard};
use breathwork::{headless, logging, ui};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let catalog = PresetCatalog::with_user_presets(&config.presets);

    if cli.list_presets {
        for preset in catalog.iter() {
            println!(
                "{:<16} {:<24} {}",
                preset.id, preset.name, preset.durations
            );
        }
        return Ok(());
    }

    let durations = cli.durations(config.durations, &catalog)?;

    if cli.headless {
        logging::init_stderr_logging(&config.logging);
    } else {
        logging::init_file_logging(&config.logging);
    }
    tracing::info!(%durations, headless = cli.headless, "starting breathwork");

    let board = Arc::new(SoundBoard::with_min_replay(
        audio_backend(&config.sound),
        Duration::from_millis(config.sound.min_replay_ms),
    ));
    board.set_enabled(config.sound.enabled && !cli.mute);

    let mut clips = config.sound.clips.clone();
    cli.apply_sounds(&mut clips);
    for (phase, path) in clips.iter() {
        board
            .assign(phase, Some(path))
            .with_context(|| format!("Failed to load sound for {}", phase.label()))?;
    }

    let controller = SessionController::new(
        BreathingModel::new(durations),
        board.clone(),
        Handle::current(),
    );

    if cli.headless {
        let mut stdout = io::stdout();
        headless::run(&controller, cli.cycles, &mut stdout).await?;
    } else {
        let app = ui::App::new(controller, board, catalog);
        let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
        tokio::task::block_in_place(|| ui::run(app, tick_rate))?;
    }
    Ok(())
}

#[cfg(feature = "rodio")]
fn audio_backend(_config: &SoundConfig) -> Arc<dyn AudioBackend> {
    Arc::new(breathwork::sound::RodioBackend)
}

#[cfg(not(feature = "rodio"))]
fn audio_backend(config: &SoundConfig) -> Arc<dyn AudioBackend> {
    Arc::new(breathwork::sound::CommandBackend::new(
        config.player(),
        config.player_args.clone(),
    ))
}
