//! Reporting windows.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Window for the click overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsPeriod {
    /// Since midnight today (KST).
    Today,
    /// The last 7 days.
    Week,
    /// The last 30 days.
    #[default]
    Month,
}

impl AnalyticsPeriod {
    /// Return the period as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for AnalyticsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AnalyticsPeriod {
    type Err = docshelf_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(docshelf_core::AppError::validation(format!(
                "Invalid period: '{s}'. Expected one of: today, week, month"
            ))),
        }
    }
}

/// Window for group rankings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingPeriod {
    /// Click rows from the last 7 days.
    Week,
    /// Click rows from the last 30 days.
    Month,
    /// Lifetime click counters.
    #[default]
    All,
}

impl RankingPeriod {
    /// Return the period as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::All => "all",
        }
    }

    /// Days covered by the window, or `None` for lifetime totals.
    pub fn days(&self) -> Option<i64> {
        match self {
            Self::Week => Some(7),
            Self::Month => Some(30),
            Self::All => None,
        }
    }
}

impl FromStr for RankingPeriod {
    type Err = docshelf_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "all" => Ok(Self::All),
            _ => Err(docshelf_core::AppError::validation(format!(
                "Invalid period: '{s}'. Expected one of: week, month, all"
            ))),
        }
    }
}
