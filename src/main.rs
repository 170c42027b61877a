//! geoview - parametric solid geometry viewer
//!
//! Prints the parameters, metrics, orthographic extents and net of a shape
//! given by name or by free-text description.

use geoview::app::{App, AppError, Cli};
use geoview::config::AppConfig;

fn run() -> Result<String, AppError> {
    let cli = Cli::parse(std::env::args().skip(1))?;

    let config = match &cli.config_dir {
        Some(dir) => AppConfig::load_from(dir)?,
        None => AppConfig::load().unwrap_or_else(|e| {
            eprintln!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }),
    };

    // RUST_LOG takes precedence over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::debug!("Configuration: {:?}", config);

    let mut app = App::new(config)?;
    app.run(&cli.request)
}

fn main() {
    match run() {
        Ok(report) => println!("{}", report),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}
