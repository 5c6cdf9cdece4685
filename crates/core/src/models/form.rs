use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// Candle granularity offered by the period dropdown.
///
/// The dropdown shows short codes (`D`, `4h`); the price service expects
/// granularity names (`day`, `4hour`). Both spellings parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "M", alias = "month")]
    Month,
    #[serde(rename = "W", alias = "week")]
    Week,
    #[default]
    #[serde(rename = "D", alias = "day")]
    Day,
    #[serde(rename = "4h", alias = "4hour")]
    FourHour,
    #[serde(rename = "1h", alias = "hour")]
    Hour,
    #[serde(rename = "15m", alias = "15min")]
    FifteenMin,
    #[serde(rename = "5m", alias = "5min")]
    FiveMin,
}

impl Period {
    /// All periods in dropdown order.
    pub const ALL: [Period; 7] = [
        Period::Month,
        Period::Week,
        Period::Day,
        Period::FourHour,
        Period::Hour,
        Period::FifteenMin,
        Period::FiveMin,
    ];

    /// Value shown in (and submitted from) the period dropdown.
    #[must_use]
    pub fn form_code(&self) -> &'static str {
        match self {
            Period::Month => "M",
            Period::Week => "W",
            Period::Day => "D",
            Period::FourHour => "4h",
            Period::Hour => "1h",
            Period::FifteenMin => "15m",
            Period::FiveMin => "5m",
        }
    }

    /// Value sent as `period=` to the price service.
    #[must_use]
    pub fn granularity(&self) -> &'static str {
        match self {
            Period::Month => "month",
            Period::Week => "week",
            Period::Day => "day",
            Period::FourHour => "4hour",
            Period::Hour => "hour",
            Period::FifteenMin => "15min",
            Period::FiveMin => "5min",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.form_code())
    }
}

impl FromStr for Period {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.form_code() == s || p.granularity() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown period '{s}'")))
    }
}

/// Portfolio allocation algorithm offered by the algorithm dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Mean-variance optimization
    #[default]
    Mvo,
    /// Hierarchical risk parity
    Hrp,
}

impl Algorithm {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Algorithm::Mvo => "mvo",
            Algorithm::Hrp => "hrp",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Mvo => "MVO",
            Algorithm::Hrp => "HRP",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Algorithm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mvo" => Ok(Algorithm::Mvo),
            "hrp" => Ok(Algorithm::Hrp),
            other => Err(CoreError::Validation(format!("Unknown algorithm '{other}'"))),
        }
    }
}

/// One input of the parameter form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Period,
    Limit,
    Lookback,
    Rebalance,
    Algorithm,
}

impl FormField {
    /// Fields backed by a digits-only text input.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, FormField::Limit | FormField::Lookback | FormField::Rebalance)
    }
}

/// The five parameters posted when the form is submitted.
///
/// Numeric fields stay strings: they hold exactly what the user typed,
/// which may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormParameters {
    pub period: Period,
    pub limit: String,
    pub lookback: String,
    pub rebalance: String,
    pub algorithm: Algorithm,
}

impl Default for FormParameters {
    fn default() -> Self {
        Self {
            period: Period::Day,
            limit: "100".to_string(),
            lookback: "10".to_string(),
            rebalance: "1".to_string(),
            algorithm: Algorithm::Mvo,
        }
    }
}

impl FormParameters {
    /// Current text of a numeric field, `None` for dropdown fields.
    #[must_use]
    pub fn numeric_value(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Limit => Some(&self.limit),
            FormField::Lookback => Some(&self.lookback),
            FormField::Rebalance => Some(&self.rebalance),
            FormField::Period | FormField::Algorithm => None,
        }
    }
}

/// `^\d*$`: ASCII digits only, empty allowed.
#[must_use]
pub fn is_digits_only(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
