//! UI server configuration

use clap::Parser;

/// Storefront UI configuration, read from the command line with environment
/// fallbacks.
#[derive(Debug, Parser)]
#[command(name = "storefront-ui", about = "EcommercePro storefront and admin UI", long_about = None)]
pub struct Config {
    /// Base URL of the storefront backend API
    #[arg(long, env = "BACKEND_URL")]
    pub backend_url: String,

    /// Address the UI listens on
    #[arg(short = 'H', long, env = "UI_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port the UI listens on
    #[arg(short, long, env = "UI_PORT", default_value = "3000")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from `.env`, the environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
