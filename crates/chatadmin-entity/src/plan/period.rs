//! Billing period enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use chatadmin_core::AppError;

/// Billing periods a plan can be sold under.
///
/// The set is closed; anything else coming off a form or the wire is a
/// validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanPeriod {
    /// Billed once per year.
    Year,
    /// Billed once per month.
    Month,
    /// Billed once per week.
    Week,
    /// Billed once per day.
    Day,
    /// Paid once, never expires.
    Lifetime,
}

impl PlanPeriod {
    /// All periods, in display order.
    pub const ALL: [PlanPeriod; 5] = [
        Self::Year,
        Self::Month,
        Self::Week,
        Self::Day,
        Self::Lifetime,
    ];

    /// Return the period as its lowercase wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
            Self::Lifetime => "lifetime",
        }
    }

    /// Display label for the list view.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Week => "Week",
            Self::Day => "Day",
            Self::Lifetime => "Lifetime",
        }
    }
}

impl fmt::Display for PlanPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlanPeriod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "year" => Ok(Self::Year),
            "month" => Ok(Self::Month),
            "week" => Ok(Self::Week),
            "day" => Ok(Self::Day),
            "lifetime" => Ok(Self::Lifetime),
            _ => Err(AppError::validation(format!(
                "Invalid plan period: '{s}'. Expected one of: year, month, week, day, lifetime"
            ))),
        }
    }
}
