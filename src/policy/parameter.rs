//! Parameter Module
//! Parameter value timelines and their reformed counterparts.

use super::reform::Reform;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A parameter value in force from some date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Bool(bool),
    Number(f64),
}

impl ParameterValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            ParameterValue::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            ParameterValue::Number(n) => *n,
        }
    }

    pub fn as_bool(&self) -> bool {
        match self {
            ParameterValue::Bool(b) => *b,
            ParameterValue::Number(n) => *n != 0.0,
        }
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Bool(b) => write!(f, "{}", b),
            ParameterValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Parameter metadata with its baseline value history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub parameter: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub values: BTreeMap<NaiveDate, ParameterValue>,
}

impl Parameter {
    /// True for parameters edited with a switch rather than a number.
    pub fn is_boolean(&self) -> bool {
        matches!(self.unit.as_deref(), Some("bool") | Some("abolition"))
    }

    /// Value in force on `instant`: the latest entry dated on or before it.
    pub fn value_at(&self, instant: NaiveDate) -> Option<ParameterValue> {
        value_at(&self.values, instant)
    }

    /// This parameter with the reform's periods applied to its history.
    ///
    /// Periods apply in the order they were set. Each sets its value from
    /// `start`; whatever was in force before resumes the day after `end`.
    pub fn reformed(&self, reform: &Reform) -> Parameter {
        let mut reformed = self.clone();
        for (period, value) in reform.periods(&self.parameter) {
            let resume_on = period.end.succ_opt();
            let resume_value = resume_on.and_then(|day| value_at(&reformed.values, day));

            let overwritten: Vec<NaiveDate> = match resume_on {
                Some(day) => reformed.values.range(period.start..=day).map(|(d, _)| *d).collect(),
                None => reformed.values.range(period.start..).map(|(d, _)| *d).collect(),
            };
            for date in overwritten {
                reformed.values.remove(&date);
            }

            reformed.values.insert(period.start, *value);
            if let (Some(day), Some(resume)) = (resume_on, resume_value) {
                reformed.values.insert(day, resume);
            }
        }
        reformed
    }

    /// Human-readable value in this parameter's unit.
    pub fn format_value(&self, value: ParameterValue) -> String {
        match (value, self.unit.as_deref()) {
            (ParameterValue::Bool(b), _) => (if b { "Yes" } else { "No" }).to_string(),
            (ParameterValue::Number(n), Some("/1")) => format!("{:.1}%", n * 100.0),
            (ParameterValue::Number(n), Some("currency-GBP")) => format!("£{:.2}", n),
            (ParameterValue::Number(n), Some("currency-USD")) => format!("${:.2}", n),
            (ParameterValue::Number(n), _) => format!("{}", n),
        }
    }
}

/// Latest value dated on or before `instant`.
pub fn value_at(
    values: &BTreeMap<NaiveDate, ParameterValue>,
    instant: NaiveDate,
) -> Option<ParameterValue> {
    values.range(..=instant).next_back().map(|(_, v)| *v)
}
