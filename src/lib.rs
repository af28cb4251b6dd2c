//! Memeforge backend library
//!
//! Modules:
//! - `api`: Axum HTTP handlers and router setup used by the binary.
//! - `leonardo`: Thin client for the image-generation REST endpoints.
//! - `prompt`: Style table and prompt composition.
//! - `metadata`: Coin name/ticker/description synthesis.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `LeonardoClient`,
//! `ComposedPrompt`, and `CoinMetadata`.
pub mod api;
pub mod leonardo;
pub mod prompt;
pub mod metadata;
pub mod config;
pub mod error;

pub use config::Config;
pub use leonardo::client::LeonardoClient;
pub use metadata::CoinMetadata;
pub use prompt::constructor::ComposedPrompt;
