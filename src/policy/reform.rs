//! Reform Module
//! Policy reforms keyed by parameter and `start.end` period.

use super::parameter::ParameterValue;
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, PartialEq)]
pub enum ReformError {
    #[error("Invalid period '{0}', expected YYYY-MM-DD.YYYY-MM-DD")]
    InvalidPeriod(String),
    #[error("Period starts {start} after it ends {end}")]
    InvertedPeriod { start: NaiveDate, end: NaiveDate },
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
}

/// An inclusive date range a reform value applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ReformError> {
        if start > end {
            return Err(ReformError::InvertedPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build from two date strings as typed into the range editor.
    pub fn parse_range(start: &str, end: &str) -> Result<Self, ReformError> {
        let parse = |s: &str| {
            NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
                .map_err(|_| ReformError::InvalidPeriod(format!("{}.{}", start, end)))
        };
        Self::new(parse(start)?, parse(end)?)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

impl FromStr for Period {
    type Err = ReformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('.')
            .ok_or_else(|| ReformError::InvalidPeriod(s.to_string()))?;
        Self::parse_range(start, end).map_err(|e| match e {
            ReformError::InvalidPeriod(_) => ReformError::InvalidPeriod(s.to_string()),
            other => other,
        })
    }
}

impl Serialize for Period {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Reform values for one parameter, in the order they were set. Later
/// periods win where they overlap earlier ones.
pub type ParameterReform = IndexMap<Period, ParameterValue>;

/// A policy reform: parameter name to period overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reform {
    parameters: BTreeMap<String, ParameterReform>,
}

impl Reform {
    pub fn get(&self, parameter: &str) -> Option<&ParameterReform> {
        self.parameters.get(parameter)
    }

    /// Periods set for a parameter, oldest edit first.
    pub fn periods(&self, parameter: &str) -> impl Iterator<Item = (&Period, &ParameterValue)> {
        self.parameters.get(parameter).into_iter().flatten()
    }

    /// A copy of this reform with one period set. Other periods and
    /// parameters are kept.
    pub fn with_value(&self, parameter: &str, period: Period, value: ParameterValue) -> Reform {
        let mut next = self.clone();
        next.set(parameter, period, value);
        next
    }

    /// Set one period. Re-setting an existing period moves it to the end so
    /// it applies after every other edit.
    pub fn set(&mut self, parameter: &str, period: Period, value: ParameterValue) {
        let periods = self.parameters.entry(parameter.to_string()).or_default();
        periods.shift_remove(&period);
        periods.insert(period, value);
    }

    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.keys().map(String::as_str)
    }
}

/// Parse a value typed into a numeric parameter field.
pub fn parse_numeric_input(input: &str) -> Result<f64, ReformError> {
    let trimmed = input.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ReformError::InvalidNumber(trimmed.to_string()))
}
