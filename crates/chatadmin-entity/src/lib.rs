//! Domain entities for the chat-bot admin console.
//!
//! The modules here form the coercion boundary between free-text form
//! input and typed domain values: raw form structs, validated input
//! structs, flat field-error maps, and the display-only formatting
//! helpers used when rendering plans.

pub mod configs;
pub mod format;
pub mod plan;
pub mod time;
pub mod validation;

pub use configs::{Configs, ConfigsForm, ConfigsInput};
pub use plan::{Plan, PlanForm, PlanInput, PlanPeriod};
pub use validation::{FieldErrors, flatten_errors};
