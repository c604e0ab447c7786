use anyhow::{Context, Result};
use clap::Parser;
use time_greeting::{
    cli::{
        Cli, Commands, RenderArgs, handle_block, handle_config, handle_formats, handle_preview,
        handle_render, handle_shortcode, handle_timezones,
    },
    config::AppConfig,
    console::{console, init_console},
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => AppConfig::config_path().context("Failed to locate config file")?,
    };

    // Load config to get configured verbosity level
    let loaded = AppConfig::load_from(&config_path);
    let configured_verbosity = loaded
        .as_ref()
        .map(AppConfig::get_verbosity)
        .unwrap_or_default();

    // Initialize console with effective verbosity (CLI takes precedence over config)
    init_console(cli.get_effective_verbosity(configured_verbosity));
    console().verbose(&format!("Using settings from {}", config_path.display()));

    // Rendering never fails on a broken settings file.
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            console().warning(&format!("{}; using default settings", e));
            AppConfig::default()
        }
    };
    let settings = config.settings();

    match cli.command {
        None => handle_render(&settings, &RenderArgs::default())?,
        Some(Commands::Render(args)) => handle_render(&settings, &args)?,
        Some(Commands::Shortcode { text, at }) => handle_shortcode(&settings, text, at)?,
        Some(Commands::Block { attributes, at }) => handle_block(&settings, &attributes, at)?,
        Some(Commands::Preview { at }) => handle_preview(&settings, at)?,
        Some(Commands::Timezones { filter }) => handle_timezones(filter.as_deref())?,
        Some(Commands::Formats) => handle_formats()?,
        Some(Commands::Config { action }) => handle_config(action, &config_path)?,
    }

    Ok(())
}
