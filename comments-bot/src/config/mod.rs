//! Configuration: defaults, validation, loading from `.env` + environment.

pub mod bot_config;
pub mod defaults;
pub mod validation;

pub use bot_config::BotConfig;
