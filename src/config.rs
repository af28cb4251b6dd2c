//! Env-driven configuration for the service and library.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binary. Defaults are provided for convenience during development.
//! The API key has no default: its absence is reported per request so the
//! static site keeps working without one.
use std::env;
use dotenv;


pub struct Config {
    pub leonardo_api_key: Option<String>,
    pub leonardo_base_url: String,
    pub static_dir: String,
    pub allowed_origin: String,
    pub api_host: String,
    pub api_port: String,
    pub poll_max_attempts: String,
    pub poll_interval_ms: String,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }
    pub fn new() -> Result<Self, env::VarError> {
        Ok(Config {
            leonardo_api_key: env::var("LEONARDO_API_KEY").ok().filter(|k| !k.is_empty()),
            leonardo_base_url: env::var("LEONARDO_BASE_URL").unwrap_or_else(|_| "https://cloud.leonardo.ai/api/rest/v1".to_string()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "./static".to_string()),
            allowed_origin: env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| "*".to_string()),
            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_port: env::var("PORT").unwrap_or_else(|_| "8000".to_string()),
            poll_max_attempts: env::var("POLL_MAX_ATTEMPTS").unwrap_or_else(|_| "30".to_string()),
            poll_interval_ms: env::var("POLL_INTERVAL_MS").unwrap_or_else(|_| "1000".to_string()),
        })
    }
    pub fn print_env_vars() {
        println!("LEONARDO_API_KEY: {}", if env::var("LEONARDO_API_KEY").map(|k| !k.is_empty()).unwrap_or(false) { "<set>" } else { "<unset>" });
        println!("LEONARDO_BASE_URL: {}", env::var("LEONARDO_BASE_URL").unwrap_or_else(|_| "<unset>".to_string()));
        println!("STATIC_DIR: {}", env::var("STATIC_DIR").unwrap_or_else(|_| "<unset>".to_string()));
        println!("ALLOWED_ORIGIN: {}", env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| "<unset>".to_string()));
        println!("API_HOST: {}", env::var("API_HOST").unwrap_or_else(|_| "<unset>".to_string()));
        println!("PORT: {}", env::var("PORT").unwrap_or_else(|_| "<unset>".to_string()));
    }
}
