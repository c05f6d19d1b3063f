mod app;
mod domain;
mod infra;
mod platform;
mod settings;
mod ui;
mod usecase;


use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::platform::desktop::paths::{default_webview_data_dir, settings_path};
use crate::settings::AppSettings;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campaign_insights=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_settings() -> Result<AppSettings> {
    let path = settings_path()?;
    tracing::debug!(path = %path.display(), "loading settings");
    AppSettings::load(Some(&path))
}

fn main() {
    init_tracing();

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(error = %err, "falling back to default settings");
            AppSettings::default()
        }
    };
    tracing::info!(
        refresh_secs = settings.refresh_interval_secs,
        initial_sort = %settings.initial_sort,
        "starting campaign insights"
    );

    let mut window_config = dioxus::desktop::Config::new().with_window(
        dioxus::desktop::WindowBuilder::new().with_title("ADmyBRAND Insights"),
    );
    match default_webview_data_dir() {
        Ok(dir) => window_config = window_config.with_data_directory(dir),
        Err(err) => tracing::warn!(error = %err, "using default webview data directory"),
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window_config)
        .with_context(settings)
        .launch(app::App);
}
