//! Core building blocks for the chat-bot admin console.
//!
//! This crate holds the pieces every other crate depends on: the unified
//! [`AppError`] type, the [`AppResult`] alias, and the TOML-backed
//! application configuration.

pub mod config;
pub mod error;
pub mod result;

pub use config::{ApiConfig, AppConfig, LoggingConfig};
pub use error::{AppError, ErrorKind};
pub use result::AppResult;
