//! CLI command definitions and dispatch.

pub mod configs;
pub mod plans;

use clap::{Parser, Subcommand};

use chatadmin_client::ApiClient;
use chatadmin_core::config::AppConfig;
use chatadmin_core::error::AppError;

use crate::output::OutputFormat;

/// Admin console for the chat-bot plugin
#[derive(Debug, Parser)]
#[command(name = "chatadmin", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment overlay (config/{env}.toml)
    #[arg(short, long, default_value = "production")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Subscription plan management
    Plans(plans::PlansArgs),
    /// Global configuration management
    Configs(configs::ConfigsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Plans(args) => plans::execute(args, config, self.format).await,
            Commands::Configs(args) => configs::execute(args, config, self.format).await,
        }
    }
}

/// Helper: build the shared API client from config
pub fn api_client(config: &AppConfig) -> Result<ApiClient, AppError> {
    ApiClient::new(&config.api)
}
