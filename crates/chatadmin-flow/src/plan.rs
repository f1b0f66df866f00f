//! Plan management flow.
//!
//! One in-memory working copy of a plan edit form, nested inside a list
//! view of all plans. The editor runs Idle → Editing → Saving and back;
//! a parallel machine governs deletion: Idle → ConfirmingDelete →
//! Deleting → Idle.

use tracing::{info, warn};

use chatadmin_client::PlansApi;
use chatadmin_entity::{FieldErrors, Plan, PlanForm, time};

use crate::merge::merge_plan;
use crate::shell::{Shell, ToastKind};

const GENERIC_SAVE_ERROR: &str = "Failed to save plan";
const GENERIC_DELETE_ERROR: &str = "Failed to delete plan";

/// Editor lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// List shown, no modal.
    Idle,
    /// Modal open: blank for create, pre-populated for edit.
    Editing,
    /// Save request in flight; the save affordance is disabled.
    Saving,
}

/// Deletion lifecycle, independent of the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteState {
    /// No delete in progress.
    Idle,
    /// Confirm dialog open for the given plan id.
    Confirming(String),
    /// Delete request in flight for the given plan id.
    Deleting(String),
}

/// Editable plan form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanField {
    Name,
    TotalChats,
    TotalQuestions,
    QuestionSize,
    HistorySize,
    Period,
}

impl PlanField {
    /// The error-map key for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::TotalChats => "total_chats",
            Self::TotalQuestions => "total_questions",
            Self::QuestionSize => "question_size",
            Self::HistorySize => "history_size",
            Self::Period => "period",
        }
    }
}

/// Orchestrates create/edit/delete of plans.
pub struct PlanFlow<P, S> {
    plans: P,
    shell: S,
    state: EditorState,
    delete: DeleteState,
    editing: Option<Plan>,
    form: PlanForm,
    errors: FieldErrors,
    general_error: Option<String>,
}

impl<P: PlansApi, S: Shell> PlanFlow<P, S> {
    /// Create an idle flow over a plan client and the navigation shell.
    pub fn new(plans: P, shell: S) -> Self {
        Self {
            plans,
            shell,
            state: EditorState::Idle,
            delete: DeleteState::Idle,
            editing: None,
            form: PlanForm::default(),
            errors: FieldErrors::default(),
            general_error: None,
        }
    }

    /// Current editor state.
    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Current delete state.
    pub fn delete_state(&self) -> &DeleteState {
        &self.delete
    }

    /// The plan being edited, if the modal was opened for an existing one.
    pub fn editing(&self) -> Option<&Plan> {
        self.editing.as_ref()
    }

    /// The raw form.
    pub fn form(&self) -> &PlanForm {
        &self.form
    }

    /// Field-level errors from the last save attempt.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// General error from the last server or transport failure.
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    /// Whether a save or delete request is in flight.
    pub fn is_busy(&self) -> bool {
        self.state == EditorState::Saving || matches!(self.delete, DeleteState::Deleting(_))
    }

    /// Open the modal blank, for creating a plan.
    pub fn open_create(&mut self) {
        self.editing = None;
        self.form = PlanForm::default();
        self.errors = FieldErrors::default();
        self.general_error = None;
        self.state = EditorState::Editing;
    }

    /// Open the modal pre-populated with an existing plan.
    pub fn open_edit(&mut self, plan: &Plan) {
        self.editing = Some(plan.clone());
        self.form = PlanForm::from_plan(plan);
        self.errors = FieldErrors::default();
        self.general_error = None;
        self.state = EditorState::Editing;
    }

    /// Close the modal, discarding the working copy.
    pub fn close_editor(&mut self) {
        self.state = EditorState::Idle;
        self.editing = None;
        self.form = PlanForm::default();
        self.errors = FieldErrors::default();
        self.general_error = None;
    }

    /// Update one form field, clearing its previous error.
    pub fn set_field(&mut self, field: PlanField, value: &str) {
        let value = value.to_string();
        match field {
            PlanField::Name => self.form.name = value,
            PlanField::TotalChats => self.form.total_chats = value,
            PlanField::TotalQuestions => self.form.total_questions = value,
            PlanField::QuestionSize => self.form.question_size = value,
            PlanField::HistorySize => self.form.history_size = value,
            PlanField::Period => self.form.period = value,
        }
        self.errors.remove(field.as_str());
    }

    /// Validate and submit the working copy.
    ///
    /// Create or update is selected by the presence of an editing
    /// reference. On validation failure the flow stays in Editing and no
    /// network call is made. On a response without a plan payload, or on
    /// a transport failure, a general error plus an error toast is set
    /// and the form stays editable. Only a payload-checked success
    /// invalidates loader data, toasts, and closes the modal.
    ///
    /// Returns true when the plan was saved and the modal closed.
    pub async fn save(&mut self) -> bool {
        if self.state != EditorState::Editing {
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
        self.state = EditorState::Saving;

        let now = time::now();
        let plan = merge_plan(self.editing.as_ref(), &input, &now);
        let updating = self.editing.is_some();

        let result = if updating {
            self.plans.update(&plan).await
        } else {
            self.plans.create(&plan).await
        };

        match result {
            Ok(envelope) => match envelope.plan {
                Some(saved) => {
                    info!(plan_id = ?saved.id, name = %saved.name, "Plan saved");
                    self.shell.invalidate().await;
                    self.shell.toast(
                        ToastKind::Success,
                        if updating {
                            "Plan updated successfully!"
                        } else {
                            "Plan added successfully!"
                        },
                    );
                    self.close_editor();
                    true
                }
                None => {
                    self.fail_save(envelope.message_or(GENERIC_SAVE_ERROR).to_string());
                    false
                }
            },
            Err(err) => {
                self.fail_save(err.message);
                false
            }
        }
    }

    /// Open the confirm dialog for a plan.
    pub fn request_delete(&mut self, id: &str) {
        self.general_error = None;
        self.delete = DeleteState::Confirming(id.to_string());
    }

    /// Dismiss the confirm dialog without touching the network.
    pub fn cancel_delete(&mut self) {
        self.delete = DeleteState::Idle;
    }

    /// Issue the delete confirmed by the user.
    ///
    /// On `{success: false}` or a transport failure the server message is
    /// shown in the general error area and the toast, and the confirm
    /// dialog stays open. Returns true when the plan was deleted.
    pub async fn confirm_delete(&mut self) -> bool {
        let id = match &self.delete {
            DeleteState::Confirming(id) => id.clone(),
            _ => return false,
        };
        self.delete = DeleteState::Deleting(id.clone());

        match self.plans.delete(&id).await {
            Ok(status) if status.success => {
                info!(plan_id = %id, "Plan deleted");
                self.shell.invalidate().await;
                self.shell.toast(ToastKind::Success, "Plan deleted successfully");
                self.delete = DeleteState::Idle;
                true
            }
            Ok(status) => {
                self.fail_delete(&id, status.message_or(GENERIC_DELETE_ERROR).to_string());
                false
            }
            Err(err) => {
                self.fail_delete(&id, err.message);
                false
            }
        }
    }

    fn fail_save(&mut self, message: String) {
        warn!(%message, "Plan save failed");
        self.shell.toast(ToastKind::Error, &message);
        self.general_error = Some(message);
        self.state = EditorState::Editing;
    }

    fn fail_delete(&mut self, id: &str, message: String) {
        warn!(plan_id = %id, %message, "Plan delete failed");
        self.shell.toast(ToastKind::Error, &message);
        self.general_error = Some(message);
        self.delete = DeleteState::Confirming(id.to_string());
    }
}
