// main.rs - Conway's Game of Life with an ambient background simulation

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::{Context, Result};
use automaton::{LifeConfig, TokioTimers};
use eframe::egui;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod app;    // Simulation ownership and wiring
mod canvas; // Render adapter over retained cell visuals
mod ui;     // eframe::App implementation

use app::GameOfLife;

const DEFAULT_CONFIG: &str = "gameoflife.toml";

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = std::env::var_os("GAMEOFLIFE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let config = LifeConfig::load(&path).with_context(|| format!("loading {}", path.display()))?;

    // Timer ticks wake the UI once it exists.
    let repaint: Arc<OnceLock<egui::Context>> = Arc::default();
    let hook = repaint.clone();
    let timers = TokioTimers::spawn(Arc::new(move || {
        if let Some(ctx) = hook.get() {
            ctx.request_repaint();
        }
    }))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height]),
        ..Default::default()
    };
    let app = GameOfLife::new(config, timers);

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| {
            let _ = repaint.set(cc.egui_ctx.clone());
            Box::new(app)
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe exited with an error: {e}"))
}
