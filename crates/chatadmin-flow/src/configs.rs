//! Configs management flow.
//!
//! Single-record analogue of the plan flow without create/delete: only
//! view and update. The plan-selection dropdowns are populated from the
//! externally supplied plan list; this flow never fetches plans itself.

use tracing::{info, warn};

use chatadmin_client::ConfigsApi;
use chatadmin_entity::{Configs, ConfigsForm, FieldErrors, Plan, time};

use crate::merge::merge_configs;
use crate::shell::{Shell, ToastKind};

const GENERIC_STORE_ERROR: &str = "Failed to save settings";
const GENERIC_PROBE_ERROR: &str = "Connection failed";

/// Editable configuration form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigsField {
    ApiKey,
    TotalChats,
    TotalQuestions,
    PublicPlan,
    DefaultPlan,
}

impl ConfigsField {
    /// The error-map key for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApiKey => "api_key",
            Self::TotalChats => "total_chats",
            Self::TotalQuestions => "total_questions",
            Self::PublicPlan => "public_plan",
            Self::DefaultPlan => "default_plan",
        }
    }
}

/// A `(id, name)` choice for the plan-selection dropdowns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOption {
    /// Plan id, the stored reference value.
    pub id: String,
    /// Plan name, the displayed label.
    pub name: String,
}

/// Dropdown candidates for `public_plan`/`default_plan`, derived from the
/// authoritative, already-fetched plan list. Unpersisted plans are not
/// offered.
pub fn plan_options(plans: &[Plan]) -> Vec<PlanOption> {
    plans
        .iter()
        .filter_map(|plan| {
            plan.id.as_ref().map(|id| PlanOption {
                id: id.clone(),
                name: plan.name.clone(),
            })
        })
        .collect()
}

/// Orchestrates viewing and editing the global configuration.
pub struct ConfigsFlow<C, S> {
    configs: C,
    shell: S,
    form: ConfigsForm,
    server_copy: Option<Configs>,
    errors: FieldErrors,
    general_error: Option<String>,
    busy: bool,
}

impl<C: ConfigsApi, S: Shell> ConfigsFlow<C, S> {
    /// Create a flow over a configs client and the navigation shell.
    pub fn new(configs: C, shell: S) -> Self {
        Self {
            configs,
            shell,
            form: ConfigsForm::default(),
            server_copy: None,
            errors: FieldErrors::default(),
            general_error: None,
            busy: false,
        }
    }

    /// Reset the local form to exactly mirror the authoritative server
    /// copy. No diffing.
    pub fn reset(&mut self, configs: Configs) {
        self.form = ConfigsForm::from_configs(&configs);
        self.server_copy = Some(configs);
        self.errors = FieldErrors::default();
        self.general_error = None;
    }

    /// The raw form.
    pub fn form(&self) -> &ConfigsForm {
        &self.form
    }

    /// Field-level errors from the last save or probe attempt.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// General error from the last server or transport failure.
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    /// Whether a request is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Update one form field, clearing its previous error.
    pub fn set_field(&mut self, field: ConfigsField, value: &str) {
        let value = value.to_string();
        match field {
            ConfigsField::ApiKey => self.form.api_key = value,
            ConfigsField::TotalChats => self.form.total_chats = value,
            ConfigsField::TotalQuestions => self.form.total_questions = value,
            ConfigsField::PublicPlan => self.form.public_plan = value,
            ConfigsField::DefaultPlan => self.form.default_plan = value,
        }
        self.errors.remove(field.as_str());
    }

    /// Toggle the admins-only gate.
    pub fn set_admins_only(&mut self, value: bool) {
        self.form.admins_only = value;
    }

    /// Validate and store the working copy.
    ///
    /// Mirrors the plan save sequence: coerce, validate, merge with a
    /// fresh `modified_at`, submit, and treat a falsy `success` flag as a
    /// server-reported failure. Returns true when the record was stored.
    pub async fn save(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.general_error = None;

        let input = match self.form.parse() {
            Ok(input) => input,
            Err(errors) => {
                self.errors = errors;
                return false;
            }
        };
        self.errors = FieldErrors::default();
        self.busy = true;

        let record = merge_configs(&input, &time::now());
        let outcome = self.configs.store(&record).await;
        self.busy = false;

        match outcome {
            Ok(status) if status.success => {
                info!("Configuration saved");
                self.shell.invalidate().await;
                self.shell.toast(ToastKind::Success, "Settings saved successfully!");
                self.server_copy = Some(record);
                true
            }
            Ok(status) => {
                self.fail_save(status.message_or(GENERIC_STORE_ERROR).to_string());
                false
            }
            Err(err) => {
                self.fail_save(err.message);
                false
            }
        }
    }

    /// Probe connectivity with the current credentials.
    ///
    /// Independent of the save flow: only the API key is checked before
    /// the network call, and failure or success is reported via toasts
    /// without touching the save flow's general error. Returns true when
    /// the probe succeeded.
    pub async fn test_connection(&mut self) -> bool {
        if self.form.api_key.trim().is_empty() {
            self.errors
                .insert("api_key", "API Key is required to test connection");
            return false;
        }

        match self.configs.test_connection(&self.probe_payload()).await {
            Ok(status) if status.success => {
                info!("Connection test succeeded");
                self.shell
                    .toast(ToastKind::Success, status.message_or("Connection successful!"));
                true
            }
            Ok(status) => {
                let message = status.message_or(GENERIC_PROBE_ERROR).to_string();
                warn!(%message, "Connection test failed");
                self.shell.toast(ToastKind::Error, &message);
                false
            }
            Err(err) => {
                warn!(message = %err.message, "Connection test failed");
                self.shell.toast(ToastKind::Error, &err.message);
                false
            }
        }
    }

    /// Best-effort record for the connectivity probe: the probe cares
    /// about credentials, so other fields are coerced leniently rather
    /// than blocking on full validation.
    fn probe_payload(&self) -> Configs {
        Configs {
            api_key: self.form.api_key.trim().to_string(),
            total_chats: self.form.total_chats.trim().parse().unwrap_or(0),
            total_questions: self.form.total_questions.trim().parse().unwrap_or(0),
            admins_only: self.form.admins_only,
            public_plan: match self.form.public_plan.trim() {
                "" => None,
                id => Some(id.to_string()),
            },
            default_plan: self.form.default_plan.trim().to_string(),
            modified_at: time::now(),
        }
    }

    fn fail_save(&mut self, message: String) {
        warn!(%message, "Configuration save failed");
        self.shell.toast(ToastKind::Error, &message);
        self.general_error = Some(message);
    }
}
