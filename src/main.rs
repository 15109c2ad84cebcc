use anyhow::Context;
use king_was_fallen::{host, logging, Settings, SETTINGS_PATH};
use macroquad::Window;

fn startup() -> anyhow::Result<Settings> {
    let found = Settings::load(SETTINGS_PATH)
        .with_context(|| format!("Loading settings from {}", SETTINGS_PATH))?;
    let from_file = found.is_some();
    let settings = found.unwrap_or_default();

    logging::init(&settings.log_file).context("Installing the logger")?;

    log::info!("Starting game initialization...");
    if from_file {
        log::info!("Settings read from {}", SETTINGS_PATH);
    } else {
        log::info!("No {} found, using defaults", SETTINGS_PATH);
    }
    Ok(settings)
}

fn main() {
    let settings = match startup() {
        Ok(settings) => settings,
        Err(err) => {
            // The logger may not be up yet.
            eprintln!("Startup failed: {:#}", err);
            std::process::exit(1);
        }
    };

    let conf = settings.window.to_conf();
    log::info!(
        "Opening {}x{} window \"{}\"",
        conf.window_width,
        conf.window_height,
        conf.window_title
    );
    Window::from_config(conf, host::run(settings));
}
