/// Menu engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | ENVIRONMENT | development | development / production |
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | directory for daily rolling log files |
/// | SEED_MENU | true | start with the seed menu |
///
/// # Example
///
/// ```ignore
/// SEED_MENU=false LOG_LEVEL=debug cargo run -p menu-engine
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// development | production
    pub environment: String,
    /// trace | debug | info | warn | error
    pub log_level: String,
    /// Log to files in this directory instead of stdout (must exist)
    pub log_dir: Option<String>,
    /// Start the store with the seed menu instead of empty
    pub seed_menu: bool,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            seed_menu: std::env::var("SEED_MENU")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    /// Environment config with the seed choice overridden
    ///
    /// Used by tests
    pub fn with_overrides(seed_menu: bool) -> Self {
        let mut config = Self::from_env();
        config.seed_menu = seed_menu;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
