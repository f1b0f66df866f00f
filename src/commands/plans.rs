//! Plan management CLI commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use dialoguer::{Confirm, Input};
use serde::Serialize;
use tabled::Tabled;

use chatadmin_client::{PlansApi, PlansClient};
use chatadmin_core::config::AppConfig;
use chatadmin_core::error::AppError;
use chatadmin_entity::{Plan, format, time};
use chatadmin_flow::{PlanField, PlanFlow};

use crate::output::{self, OutputFormat};
use crate::shell::TerminalShell;

/// Arguments for plan commands
#[derive(Debug, Args)]
pub struct PlansArgs {
    /// Plan subcommand
    #[command(subcommand)]
    pub command: PlanCommand,
}

/// Plan subcommands
#[derive(Debug, Subcommand)]
pub enum PlanCommand {
    /// List all plans
    List,
    /// Create a new plan
    Create(PlanFieldArgs),
    /// Edit an existing plan
    Edit {
        /// Plan id
        id: String,
        #[command(flatten)]
        fields: PlanFieldArgs,
    },
    /// Delete a plan
    Delete {
        /// Plan id
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Plan form fields; any omitted field is prompted for interactively.
#[derive(Debug, Default, Args)]
pub struct PlanFieldArgs {
    /// Plan name
    #[arg(long)]
    pub name: Option<String>,
    /// Number of chats (-1 for unlimited)
    #[arg(long)]
    pub total_chats: Option<String>,
    /// Number of questions (-1 for unlimited)
    #[arg(long)]
    pub total_questions: Option<String>,
    /// Question size in words
    #[arg(long)]
    pub question_size: Option<String>,
    /// History items limit
    #[arg(long)]
    pub history_size: Option<String>,
    /// Billing period: year, month, week, day, lifetime
    #[arg(long)]
    pub period: Option<String>,
}

/// Plan display row for table output
#[derive(Debug, Serialize, Tabled)]
struct PlanRow {
    /// Plan ID
    id: String,
    /// Plan name
    name: String,
    /// Chats quota
    chats: String,
    /// Questions quota
    questions: String,
    /// Question size quota
    question_size: String,
    /// History size quota
    history_size: String,
    /// Billing period
    period: String,
    /// Creation time
    created: String,
}

impl PlanRow {
    fn from_plan(plan: &Plan) -> Self {
        Self {
            id: plan.id.clone().unwrap_or_default(),
            name: plan.name.clone(),
            chats: format::format_quota(plan.total_chats),
            questions: format::format_quota(plan.total_questions),
            question_size: format::format_quota(plan.question_size),
            history_size: format::format_quota(plan.history_size),
            period: plan.period.label().to_string(),
            created: time::human_datetime(&plan.created_at),
        }
    }
}

/// Execute plan commands
pub async fn execute(
    args: &PlansArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let client = PlansClient::new(super::api_client(config)?);
    let shell = Arc::new(TerminalShell);

    match &args.command {
        PlanCommand::List => {
            let plans = client.list().await?;
            print_plans(&plans, format);
        }
        PlanCommand::Create(fields) => {
            let mut flow = PlanFlow::new(client.clone(), Arc::clone(&shell));
            flow.open_create();
            fill_form(&mut flow, fields)?;
            save_or_report(&mut flow).await?;
            print_plans(&client.list().await?, format);
        }
        PlanCommand::Edit { id, fields } => {
            let plan = client.get(id).await?;
            let mut flow = PlanFlow::new(client.clone(), Arc::clone(&shell));
            flow.open_edit(&plan);
            fill_form(&mut flow, fields)?;
            save_or_report(&mut flow).await?;
            print_plans(&client.list().await?, format);
        }
        PlanCommand::Delete { id, yes } => {
            let mut flow = PlanFlow::new(client.clone(), Arc::clone(&shell));
            flow.request_delete(id);

            let confirmed = *yes
                || Confirm::new()
                    .with_prompt(format!(
                        "Are you sure you want to delete plan {id}? This action cannot be undone."
                    ))
                    .default(false)
                    .interact()
                    .map_err(prompt_error)?;

            if !confirmed {
                flow.cancel_delete();
                output::print_info("Delete cancelled");
                return Ok(());
            }

            if !flow.confirm_delete().await {
                return Err(AppError::external_service(
                    flow.general_error().unwrap_or("Plan was not deleted"),
                ));
            }
            print_plans(&client.list().await?, format);
        }
    }

    Ok(())
}

fn print_plans(plans: &[Plan], format: OutputFormat) {
    let rows: Vec<PlanRow> = plans.iter().map(PlanRow::from_plan).collect();
    output::print_list(&rows, format);
}

/// Apply provided flags, prompting for anything missing. Prompt defaults
/// come from the form's current values, so editing shows the persisted
/// record.
fn fill_form<P, S>(
    flow: &mut PlanFlow<P, S>,
    fields: &PlanFieldArgs,
) -> Result<(), AppError>
where
    P: PlansApi,
    S: chatadmin_flow::Shell,
{
    let prompts = [
        (PlanField::Name, "Plan name", fields.name.as_deref()),
        (
            PlanField::TotalChats,
            "Number of chats (-1 for unlimited)",
            fields.total_chats.as_deref(),
        ),
        (
            PlanField::TotalQuestions,
            "Number of questions (-1 for unlimited)",
            fields.total_questions.as_deref(),
        ),
        (
            PlanField::QuestionSize,
            "Question size (words)",
            fields.question_size.as_deref(),
        ),
        (
            PlanField::HistorySize,
            "History items limit",
            fields.history_size.as_deref(),
        ),
        (
            PlanField::Period,
            "Billing period (year/month/week/day/lifetime)",
            fields.period.as_deref(),
        ),
    ];

    for (field, label, provided) in prompts {
        let current = current_value(flow.form(), field);
        let value = match provided {
            Some(value) => value.to_string(),
            None => prompt(label, &current)?,
        };
        flow.set_field(field, &value);
    }

    Ok(())
}

fn current_value(form: &chatadmin_entity::PlanForm, field: PlanField) -> String {
    match field {
        PlanField::Name => form.name.clone(),
        PlanField::TotalChats => form.total_chats.clone(),
        PlanField::TotalQuestions => form.total_questions.clone(),
        PlanField::QuestionSize => form.question_size.clone(),
        PlanField::HistorySize => form.history_size.clone(),
        PlanField::Period => form.period.clone(),
    }
}

fn prompt(label: &str, current: &str) -> Result<String, AppError> {
    let mut input = Input::<String>::new().with_prompt(label).allow_empty(true);
    if !current.is_empty() {
        input = input.default(current.to_string());
    }
    input.interact_text().map_err(prompt_error)
}

async fn save_or_report<P, S>(flow: &mut PlanFlow<P, S>) -> Result<(), AppError>
where
    P: PlansApi,
    S: chatadmin_flow::Shell,
{
    if flow.save().await {
        return Ok(());
    }
    for (field, message) in flow.errors().iter() {
        output::print_error(&format!("{field}: {message}"));
    }
    Err(AppError::validation(
        flow.general_error().unwrap_or("Plan was not saved"),
    ))
}

fn prompt_error(err: dialoguer::Error) -> AppError {
    AppError::internal(format!("Prompt failed: {err}"))
}
