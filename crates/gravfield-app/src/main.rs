use std::fs;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gravfield_app::config::{self, Args};
use gravfield_app::game_loop::{self, LoopOptions, SurfaceOptions};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let sim_config = config::resolve(&args)?;
    info!(
        frames = args.frames,
        seed = sim_config.seed,
        realtime = args.realtime,
        "starting gravfield"
    );

    let (_cmd_tx, handle) = game_loop::spawn_game_loop(
        sim_config,
        SurfaceOptions {
            frame_limit: args.frame_limit(),
            drop_every: args.drop_every,
        },
        LoopOptions {
            realtime: args.realtime,
            ..Default::default()
        },
    )
    .context("failed to spawn frame loop thread")?;

    let report = handle
        .join()
        .map_err(|_| anyhow!("frame loop thread panicked"))?
        .context("simulation failed")?;

    info!(
        rendered = report.frames_rendered,
        skipped = report.frames_skipped,
        energy = report.snapshot.conservation.total_energy(),
        "done"
    );

    if let Some(path) = &args.snapshot {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json)
            .with_context(|| format!("failed to write snapshot {}", path.display()))?;
        info!(path = %path.display(), "snapshot written");
    }

    Ok(())
}
