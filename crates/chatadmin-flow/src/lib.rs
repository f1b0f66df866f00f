//! Management flows for the chat-bot admin console.
//!
//! A flow owns one working copy of an edit form, drives the
//! merge-then-validate-then-submit pipeline against a resource client,
//! and reports outcomes through the navigation [`Shell`]. Validation
//! failures never reach the network; server and transport failures are
//! caught at the flow boundary and converted to user-visible feedback.

pub mod configs;
pub mod merge;
pub mod plan;
pub mod shell;

pub use configs::{ConfigsField, ConfigsFlow, PlanOption, plan_options};
pub use plan::{DeleteState, EditorState, PlanField, PlanFlow};
pub use shell::{Shell, ToastKind};
