use dioxus::prelude::*;
use sommaire_engine::io;
use std::env;
use std::path::PathBuf;
use std::process;

mod ui;

use sommaire_config::Config;
use ui::App;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("sommaire starting up");

    // Determine content path from CLI args or config file
    let config_path = Config::config_path();
    let args: Vec<String> = env::args().collect();

    let content_path;
    let from_config;

    if args.len() == 2 {
        content_path = PathBuf::from(&args[1]);
        from_config = false;
        log::info!(
            "Using content path from CLI argument: {}",
            content_path.display()
        );
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => {
                content_path = config.content_path;
                from_config = true;
                log::info!("Loaded content path from config: {}", content_path.display());
            }
            Ok(None) => {
                eprintln!("Error: No content path provided and no config file found");
                eprintln!("Usage: {} <content-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                log::error!("Config::load() failed: {e}");
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <content-folder-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [content-folder-path]", args[0]);
        process::exit(1);
    };

    // Validate content directory using engine
    if let Err(e) = io::validate_content_dir(&content_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Content path '{}'{} is invalid: {e}",
            content_path.display(),
            source
        );
        process::exit(1);
    }

    log::info!("Launching Dioxus desktop app");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn app_root() -> Element {
    // Re-resolve the content path: `launch` takes a plain fn, so the
    // root cannot capture what main computed.
    let args: Vec<String> = env::args().collect();
    let (content_path, band) = if args.len() == 2 {
        (PathBuf::from(&args[1]), sommaire_config::BandConfig::default())
    } else {
        let config = Config::load()
            .ok()
            .flatten()
            .unwrap_or_else(|| panic!("Config file not found"));
        (config.content_path, config.band)
    };

    rsx! {
        App { content_path, band }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("sommaire")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
