mod ai;
mod app;
mod config;
mod error;
mod event;
mod i18n;
mod model;
mod search;
mod state;
mod text;
mod theme;
mod ui;

use ai::client::AiClient;
use app::StratkitApp;
use config::AppConfig;
use eframe::egui;
use state::store::{JsonFileStorage, Store, STATE_SLOT};
use std::path::Path;
use std::sync::{mpsc, Arc};
use theme::Theme;
use tracing_subscriber::EnvFilter;

const CJK_FONT_NAME: &str = "cjk-fallback";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stratkit=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Appends a user-supplied font as the last fallback so Traditional Chinese
/// labels render; egui's bundled fonts carry no CJK glyphs.
fn install_cjk_font(ctx: &egui::Context, path: &Path) {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to read CJK font");
            return;
        }
    };

    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        CJK_FONT_NAME.to_string(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(CJK_FONT_NAME.to_string());
    }
    ctx.set_fonts(fonts);
    tracing::info!(path = %path.display(), "installed CJK fallback font");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_file = config::load_env_file();
    init_tracing();
    env_file.log();
    let config = AppConfig::from_env()?;
    let (tx, rx) = mpsc::channel();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("stratkit-runtime")
        .build()?;

    let ai = match runtime.block_on(async { AiClient::new(config.ai.clone(), tx.clone()) }) {
        Ok(client) => Some(client),
        Err(err) => {
            tracing::warn!(error = %err, "AI assistant disabled");
            None
        }
    };

    let storage = JsonFileStorage::new(&config.data_dir, STATE_SLOT);
    tracing::info!(path = %storage.path().display(), "opening state store");
    let store = Store::open(Box::new(storage));

    let theme = Theme::default();
    let app = StratkitApp::new(store, rx, ai, theme.clone());
    let _runtime = runtime;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Strategy Toolkit")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([1024.0, 640.0]),
        ..Default::default()
    };

    let cjk_font = config.cjk_font;
    eframe::run_native(
        "Strategy Toolkit",
        native_options,
        Box::new(move |creation_context| {
            theme.apply_visuals(&creation_context.egui_ctx);
            if let Some(path) = &cjk_font {
                install_cjk_font(&creation_context.egui_ctx, path);
            }
            Ok(Box::new(app))
        }),
    )?;

    Ok(())
}
