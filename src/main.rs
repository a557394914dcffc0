use anyhow::{anyhow, Result};
use eframe::egui;
use graph_sketch::{EditorConfig, GraphSketchApp};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EditorConfig::from_env()?;
    let title = config.window_title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(&title),
        ..Default::default()
    };

    log::info!("starting {}", title);
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(GraphSketchApp::new(config)))),
    )
    .map_err(|e| anyhow!("failed to run the editor window: {}", e))
}
