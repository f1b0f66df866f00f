//! Global configuration entities.

pub mod form;
pub mod model;

pub use form::{ConfigsForm, ConfigsInput};
pub use model::Configs;
