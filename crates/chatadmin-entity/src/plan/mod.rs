//! Plan domain entities.

pub mod form;
pub mod model;
pub mod period;

pub use form::{PlanForm, PlanInput};
pub use model::{Plan, UNLIMITED_QUOTA};
pub use period::PlanPeriod;
