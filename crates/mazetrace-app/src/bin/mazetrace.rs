//! Mazetrace desktop application using egui/eframe.
//!
//! Fetches mazes and search traces from a solver service (or computes them
//! locally with `--offline`) and replays the search as an animation.

use std::sync::Arc;

use clap::Parser as _;
use mazetrace_app::{Config, MazetraceApp, version};
use mazetrace_gateway::{HttpGateway, LocalGateway, SolverGateway};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    const APP_ID: &str = "io.github.gifnksm.mazetrace";

    better_panic::install();
    env_logger::init();

    let config = Config::parse();
    log::info!(
        "Starting Mazetrace, version={}",
        version::build_version()
    );

    let gateway: Arc<dyn SolverGateway> = if config.offline {
        log::info!("using the in-process solver");
        Arc::new(LocalGateway::new())
    } else {
        log::info!("using the solver service at {}", config.server);
        Arc::new(HttpGateway::new(config.server.as_str())?)
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((900.0, 700.0))
            .with_min_inner_size((480.0, 400.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Mazetrace",
        options,
        Box::new(move |cc| Ok(Box::new(MazetraceApp::new(cc, &config, gateway)?))),
    )?;
    Ok(())
}
