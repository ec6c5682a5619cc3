//! Sorting types for list endpoints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// How groups are ordered in the library tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupSort {
    /// Category order, then group display order, then name.
    #[default]
    Name,
    /// Total clicks descending, then name.
    Clicks,
}

impl GroupSort {
    /// Return the sort mode as a query-string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Clicks => "clicks",
        }
    }
}

impl fmt::Display for GroupSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupSort {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "clicks" => Ok(Self::Clicks),
            _ => Err(AppError::validation(format!(
                "Invalid sort mode: '{s}'. Expected one of: name, clicks"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_mode() {
        assert_eq!("name".parse::<GroupSort>().unwrap(), GroupSort::Name);
        assert_eq!("CLICKS".parse::<GroupSort>().unwrap(), GroupSort::Clicks);
        assert!("popularity".parse::<GroupSort>().is_err());
    }
}
