//! Gemfall games: "Coin Motion" and "Razors and Rubies".
//!
//! Game rules (motion, collision, score) live in engine-independent modules
//! and run on a fixed 60 Hz tick. [`app::GameApp`] adapts them to the
//! engine's frame loop.

pub mod app;
pub mod assets;
pub mod cli;
pub mod collision;
pub mod config;
pub mod entity;
pub mod motion;
pub mod scenario;
pub mod session;
pub mod spawn;
pub mod world;

use std::path::Path;

use anyhow::{Context, Result};
use gemfall_engine::device::GpuInit;
use gemfall_engine::logging::{LoggingConfig, init_logging};
use gemfall_engine::window::{LogicalSize, Runtime, RuntimeConfig};

use crate::app::GameApp;
use crate::config::GameConfig;
use crate::scenario::Scenario;

/// Reads the optional config file and starts logging.
pub fn bootstrap(config_path: Option<&Path>) -> Result<GameConfig> {
    let config = GameConfig::load_or_default(config_path).context("failed to load configuration")?;
    init_logging(LoggingConfig {
        env_filter: config.logging.filter.clone(),
        ..LoggingConfig::default()
    });
    if let Some(path) = config_path {
        log::info!("configuration loaded from {}", path.display());
    }
    Ok(config)
}

/// Opens the game window and runs `scenario` until the player quits.
pub fn run(scenario: Scenario, config: &GameConfig) -> Result<()> {
    let runtime = RuntimeConfig {
        title: scenario.window_title(config),
        initial_size: LogicalSize::new(config.window.width as f64, config.window.height as f64),
        resizable: false,
        cursor_visible: false,
    };
    let gpu = GpuInit {
        vsync: config.window.vsync,
        ..GpuInit::default()
    };

    log::info!("starting {} ({})", scenario.title, scenario.mode);
    let app = GameApp::new(scenario, config)?;
    Runtime::run(runtime, gpu, app)
}
