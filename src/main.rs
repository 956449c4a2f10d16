use anyhow::Result;
use atlas::config::BrowserConfig;
use atlas::domain::Country;
use atlas::repository::{DatasetSource, RestCountriesSource, StaticSource, sample_countries};
use atlas::ui_dioxus::App;
use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = BrowserConfig::load()?;
    tracing::info!(
        api = %config.all_endpoint(),
        page_size = config.page_size,
        offline = config.offline,
        "starting atlas"
    );

    let source: Arc<dyn DatasetSource<Country>> = if config.offline {
        Arc::new(StaticSource::ready(sample_countries()))
    } else {
        Arc::new(RestCountriesSource::new(&config)?)
    };

    let window = WindowBuilder::new()
        .with_title(config.window_title.clone())
        .with_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(1280.0, 900.0));

    LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .with_context(config)
        .with_context(source)
        .launch(App);

    Ok(())
}
