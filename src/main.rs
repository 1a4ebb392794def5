mod app;
mod cli;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::BionicApp;
use clap::Parser;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = cli::Cli::parse();

    // A dataset that cannot be read is fatal at startup.
    let table = data::loader::load_file(&cli.data)
        .with_context(|| format!("loading {}", cli.data.display()))
        .inspect_err(|e| log::error!("{e:#}"))?;
    if table.is_empty() {
        log::warn!("{} contains no rows", cli.data.display());
    }

    let mut state = AppState::default();
    state.set_dataset(table, &cli.data);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bionic Path Selection",
        options,
        Box::new(|_cc| Ok(Box::new(BionicApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
