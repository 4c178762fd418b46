//! Core: configuration and environment setup

pub mod config;

pub use config::Config;

/// Load `.env` (if any) and install the logger from the resulting config
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    crate::utils::logger::init_logger_with_file(
        Some(&config.log_level),
        config.log_dir.as_deref(),
    )?;
    Ok(config)
}
