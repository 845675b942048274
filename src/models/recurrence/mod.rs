// Recurrence module
// Repeat rules understood by the occurrence expander

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::date::{add_months, add_years};

/// How often a task repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Recurrence {
    pub fn is_recurring(&self) -> bool {
        !matches!(self, Recurrence::None)
    }

    /// Fixed step in days for day-based rules.
    pub fn step_days(&self) -> Option<i64> {
        match self {
            Recurrence::Daily => Some(1),
            Recurrence::Weekly => Some(7),
            _ => None,
        }
    }

    /// The next date after `date`, or `None` for non-recurring rules and
    /// calendar overflow. Monthly and yearly steps use day rollover.
    pub fn advance(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Recurrence::None => None,
            Recurrence::Daily => date.checked_add_signed(Duration::days(1)),
            Recurrence::Weekly => date.checked_add_signed(Duration::days(7)),
            Recurrence::Monthly => add_months(date, 1),
            Recurrence::Yearly => add_years(date, 1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recurrence::None => "none",
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
            Recurrence::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Recurrence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Recurrence::None),
            "daily" => Ok(Recurrence::Daily),
            "weekly" => Ok(Recurrence::Weekly),
            "monthly" => Ok(Recurrence::Monthly),
            "yearly" => Ok(Recurrence::Yearly),
            other => Err(format!("Unknown recurrence '{}'", other)),
        }
    }
}
