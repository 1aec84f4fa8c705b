//! Headless driver for the wireframe engine.
//!
//! Usage:
//!   cargo run -p wire-demo -- [--config scene.json] [--ticks 240] [--mono]
//!
//! Runs the scripted drive from the scene config, renders every frame into a
//! recording line sink, and logs per-frame line counts. Set `RUST_LOG=debug`
//! to see every frame.

mod config;
mod error;
mod scene;

use config::SceneConfig;
use error::DemoError;
use scene::{FrameStats, Scene};
use std::env;
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use wire_render::{LineList, VectorMode};

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    ticks: Option<u32>,
    mono: bool,
}

fn parse_args() -> Result<Args, DemoError> {
    let mut args = Args::default();
    let mut iter = env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| DemoError::Usage("--config needs a path".to_string()))?;
                args.config = Some(PathBuf::from(path));
            }
            "--ticks" => {
                let ticks = iter
                    .next()
                    .and_then(|n| n.parse().ok())
                    .ok_or_else(|| DemoError::Usage("--ticks needs a number".to_string()))?;
                args.ticks = Some(ticks);
            }
            "--mono" => args.mono = true,
            other => return Err(DemoError::Usage(format!("unknown argument: {other}"))),
        }
    }
    Ok(args)
}

fn run() -> Result<(), DemoError> {
    let args = parse_args()?;
    let mut config = match &args.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };
    if let Some(ticks) = args.ticks {
        config.ticks = ticks;
    }
    if args.mono {
        config.mode = VectorMode::Monochrome;
    }

    let mut scene = Scene::from_config(&config)?;
    let mut sink = LineList::new();
    let mut peak = FrameStats::default();

    info!(
        ticks = config.ticks,
        obstacles = config.obstacles.len(),
        mode = ?config.mode,
        "running scene"
    );
    for tick in 0..config.ticks {
        sink.clear();
        let stats = scene.tick(config.tick_ms, config.intent_at(tick), &mut sink);
        debug!(
            tick,
            grid = stats.grid_lines,
            models = stats.model_lines,
            culled = stats.culled,
            "frame"
        );
        if stats.total_lines() > peak.total_lines() {
            peak = stats;
        }
    }

    let rig = scene.rig();
    info!(
        x = rig.position().x,
        z = rig.position().z,
        heading = scene.camera().rotation,
        last_frame_lines = sink.len(),
        peak_lines = peak.total_lines(),
        "scene finished"
    );
    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run() {
        error!("{err}");
        std::process::exit(1);
    }
}
