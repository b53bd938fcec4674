// main.rs - startup: load assets, build the session, run the UI

mod app;

use eframe::egui;

use life::labels::{LabelRegistry, LabelSlot};
use life::{PatternCatalog, Session, Universe};

use crate::app::LifeApp;

const DEFAULT_WIDTH: u32 = 80;
const DEFAULT_HEIGHT: u32 = 60;

const PATTERNS_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/patterns.json");
const ES_LABELS_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/i18n/es.json");

/// Fetches startup assets before any input is accepted. A missing or
/// malformed pattern document is fatal; extra languages are optional.
async fn load_assets() -> Result<(PatternCatalog, Option<String>), String> {
    let patterns = tokio::fs::read_to_string(PATTERNS_PATH)
        .await
        .map_err(|e| format!("cannot read {PATTERNS_PATH}: {e}"))?;
    let catalog = PatternCatalog::load(&patterns).map_err(|e| e.to_string())?;
    let es = tokio::fs::read_to_string(ES_LABELS_PATH).await.ok();
    Ok((catalog, es))
}

fn default_labels() -> LabelRegistry {
    let mut labels = LabelRegistry::new("en");
    labels.register("title", LabelSlot::Text, "Game of Life");
    labels.register("ctrls.play", LabelSlot::ButtonLabel, "▶ Play");
    labels.register("ctrls.stop", LabelSlot::ButtonLabel, "⏹ Stop");
    labels.register("ctrls.apply", LabelSlot::ButtonLabel, "Apply");
    labels.register("ctrls.random", LabelSlot::ButtonLabel, "🎲 Random");
    labels.register("ctrls.width", LabelSlot::Placeholder, "Width");
    labels.register("ctrls.height", LabelSlot::Placeholder, "Height");
    labels.register("ctrls.speed", LabelSlot::Text, "Speed");
    labels.register("ctrls.circular", LabelSlot::Text, "Wraparound");
    labels.register("ctrls.display_dead", LabelSlot::Text, "Show dead cells");
    labels.register("ctrls.patterns", LabelSlot::Text, "Pattern");
    labels.register("ctrls.density.low", LabelSlot::OptionLabel, "Low");
    labels.register("ctrls.density.medium", LabelSlot::OptionLabel, "Medium");
    labels.register("ctrls.density.high", LabelSlot::OptionLabel, "High");
    labels.register("stats.generation", LabelSlot::Text, "Generation");
    labels.register("stats.population", LabelSlot::Text, "Population");
    labels
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let (catalog, es_labels) = match runtime.block_on(load_assets()) {
        Ok(loaded) => loaded,
        Err(err) => {
            log::error!("startup failed: {err}");
            std::process::exit(1);
        }
    };

    let mut labels = default_labels();
    // Selector group headings come from the catalog itself.
    for group in catalog.groups() {
        labels.register(
            format!("ctrls.patterns.{}", group.id),
            LabelSlot::GroupLabel,
            group.name.clone(),
        );
    }
    if let Some(es) = es_labels {
        if let Err(err) = labels.install_language_json("es", &es) {
            log::warn!("ignoring malformed es labels: {err}");
        }
    }

    let session: Session<Universe> = Session::new(catalog, DEFAULT_WIDTH, DEFAULT_HEIGHT);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 900.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Box::new(LifeApp::new(session, labels))),
    )
}
