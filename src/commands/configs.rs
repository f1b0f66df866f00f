//! Global configuration CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use dialoguer::{Confirm, Input, Select};

use chatadmin_client::{ConfigsApi, ConfigsClient, PlansApi, PlansClient};
use chatadmin_core::config::AppConfig;
use chatadmin_core::error::AppError;
use chatadmin_entity::{Configs, format, time};
use chatadmin_flow::{ConfigsField, ConfigsFlow, PlanOption, plan_options};

use crate::output::{self, OutputFormat};
use crate::shell::TerminalShell;

/// Arguments for configuration commands
#[derive(Debug, Args)]
pub struct ConfigsArgs {
    /// Configuration subcommand
    #[command(subcommand)]
    pub command: ConfigsCommand,
}

/// Configuration subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigsCommand {
    /// Show the current configuration
    Show,
    /// Edit and save the configuration
    Edit(ConfigsFieldArgs),
    /// Test connectivity with the stored API key
    Test,
}

/// Configuration form fields; any omitted field is prompted for interactively.
#[derive(Debug, Default, Args)]
pub struct ConfigsFieldArgs {
    /// Chat-bot API key
    #[arg(long)]
    pub api_key: Option<String>,
    /// Site-wide chats ceiling
    #[arg(long)]
    pub total_chats: Option<String>,
    /// Site-wide questions ceiling
    #[arg(long)]
    pub total_questions: Option<String>,
    /// Restrict the bot to administrators
    #[arg(long)]
    pub admins_only: Option<bool>,
    /// Plan id offered to visitors without a subscription (empty for none)
    #[arg(long)]
    pub public_plan: Option<String>,
    /// Plan id assigned to new users
    #[arg(long)]
    pub default_plan: Option<String>,
}

/// Execute configuration commands
pub async fn execute(
    args: &ConfigsArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let api = super::api_client(config)?;
    let client = ConfigsClient::new(api.clone());
    let shell = Arc::new(TerminalShell);

    match &args.command {
        ConfigsCommand::Show => {
            let configs = client.get().await?;
            print_configs(&configs, format)?;
        }
        ConfigsCommand::Edit(fields) => {
            let configs = client.get().await?;
            let plans = PlansClient::new(api).list().await?;
            let options = plan_options(&plans);

            let mut flow = ConfigsFlow::new(client.clone(), Arc::clone(&shell));
            flow.reset(configs);
            fill_form(&mut flow, fields, &options)?;

            if !flow.save().await {
                for (field, message) in flow.errors().iter() {
                    output::print_error(&format!("{field}: {message}"));
                }
                return Err(AppError::validation(
                    flow.general_error().unwrap_or("Settings were not saved"),
                ));
            }
        }
        ConfigsCommand::Test => {
            let configs = client.get().await?;
            let mut flow = ConfigsFlow::new(client.clone(), Arc::clone(&shell));
            flow.reset(configs);

            if !flow.test_connection().await {
                for (field, message) in flow.errors().iter() {
                    output::print_error(&format!("{field}: {message}"));
                }
                return Err(AppError::external_service("Connection test failed"));
            }
        }
    }

    Ok(())
}

fn print_configs(configs: &Configs, format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(configs)?);
        }
        OutputFormat::Table => {
            println!("Configuration:");
            output::print_kv("API key", &mask_key(&configs.api_key));
            output::print_kv("Total chats", &format::format_quota(configs.total_chats));
            output::print_kv(
                "Total questions",
                &format::format_quota(configs.total_questions),
            );
            output::print_kv("Admins only", if configs.admins_only { "yes" } else { "no" });
            output::print_kv(
                "Public plan",
                configs.public_plan.as_deref().unwrap_or("(none)"),
            );
            output::print_kv("Default plan", &configs.default_plan);
            output::print_kv("Modified", &time::human_datetime(&configs.modified_at));
        }
    }
    Ok(())
}

/// Show only the last four characters of the key. Counted in chars, not
/// bytes, so multi-byte keys never split mid-character.
fn mask_key(key: &str) -> String {
    let chars = key.chars().count();
    if chars <= 4 {
        return "****".to_string();
    }
    let tail: String = key.chars().skip(chars - 4).collect();
    format!("****{tail}")
}

fn fill_form<C, S>(
    flow: &mut ConfigsFlow<C, S>,
    fields: &ConfigsFieldArgs,
    options: &[PlanOption],
) -> Result<(), AppError>
where
    C: ConfigsApi,
    S: chatadmin_flow::Shell,
{
    let api_key = match fields.api_key.as_deref() {
        Some(value) => value.to_string(),
        None => prompt("API key", &flow.form().api_key)?,
    };
    flow.set_field(ConfigsField::ApiKey, &api_key);

    let total_chats = match fields.total_chats.as_deref() {
        Some(value) => value.to_string(),
        None => prompt("Total chats", &flow.form().total_chats)?,
    };
    flow.set_field(ConfigsField::TotalChats, &total_chats);

    let total_questions = match fields.total_questions.as_deref() {
        Some(value) => value.to_string(),
        None => prompt("Total questions", &flow.form().total_questions)?,
    };
    flow.set_field(ConfigsField::TotalQuestions, &total_questions);

    let admins_only = match fields.admins_only {
        Some(value) => value,
        None => Confirm::new()
            .with_prompt("Restrict the bot to administrators?")
            .default(flow.form().admins_only)
            .interact()
            .map_err(prompt_error)?,
    };
    flow.set_admins_only(admins_only);

    let public_plan = match fields.public_plan.as_deref() {
        Some(value) => value.to_string(),
        None => select_plan("Public plan", options, &flow.form().public_plan, true)?,
    };
    flow.set_field(ConfigsField::PublicPlan, &public_plan);

    let default_plan = match fields.default_plan.as_deref() {
        Some(value) => value.to_string(),
        None => select_plan("Default plan", options, &flow.form().default_plan, false)?,
    };
    flow.set_field(ConfigsField::DefaultPlan, &default_plan);

    Ok(())
}

fn prompt(label: &str, current: &str) -> Result<String, AppError> {
    let mut input = Input::<String>::new().with_prompt(label).allow_empty(true);
    if !current.is_empty() {
        input = input.default(current.to_string());
    }
    input.interact_text().map_err(prompt_error)
}

/// Pick a plan from the fetched list; `allow_none` adds a "(none)" choice
/// that maps to an empty id.
fn select_plan(
    label: &str,
    options: &[PlanOption],
    current: &str,
    allow_none: bool,
) -> Result<String, AppError> {
    let mut ids: Vec<&str> = Vec::new();
    let mut labels: Vec<String> = Vec::new();
    if allow_none {
        ids.push("");
        labels.push("(none)".to_string());
    }
    for option in options {
        ids.push(&option.id);
        labels.push(format!("{} (id {})", option.name, option.id));
    }

    if ids.is_empty() {
        return Err(AppError::validation("No plans available to choose from"));
    }

    let default = ids.iter().position(|id| *id == current).unwrap_or(0);
    let picked = Select::new()
        .with_prompt(label)
        .items(&labels)
        .default(default)
        .interact()
        .map_err(prompt_error)?;

    Ok(ids[picked].to_string())
}

fn prompt_error(err: dialoguer::Error) -> AppError {
    AppError::internal(format!("Prompt failed: {err}"))
}
