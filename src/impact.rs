//! Impact Module
//! Relative change in net income by income decile.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Impact results for a reform, as produced by the calculation backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Impact {
    #[serde(default)]
    pub decile: DecileImpact,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecileImpact {
    /// Relative change in net income, keyed by decile number (1-10)
    #[serde(default)]
    pub relative: BTreeMap<u32, f64>,
}

/// One bar of the decile chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DecileBar {
    pub decile: u32,
    pub value: f64,
    pub label: String,
}

impl DecileImpact {
    /// Mean of the decile changes, if there are any.
    pub fn average_relative_change(&self) -> Option<f64> {
        if self.relative.is_empty() {
            return None;
        }
        Some(self.relative.values().sum::<f64>() / self.relative.len() as f64)
    }

    /// Bars in decile order.
    pub fn bars(&self) -> Vec<DecileBar> {
        self.relative
            .iter()
            .map(|(&decile, &value)| DecileBar {
                decile,
                value,
                label: relative_label(value),
            })
            .collect()
    }

    /// Sentence summarising the average change under `policy_label`.
    pub fn headline(&self, policy_label: &str) -> Option<String> {
        let average = self.average_relative_change()?;
        let verb = if average >= 0.0 { "increases" } else { "decreases" };
        Some(format!(
            "{} {} the average household's net income by {}",
            policy_label,
            verb,
            format_percent(average.abs())
        ))
    }
}

/// Whole-percent label with an explicit sign for gains, e.g. `+3%`.
pub fn relative_label(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{}{:.0}%", sign, value * 100.0)
}

/// A fraction as a percentage with one decimal, e.g. `0.012` -> `1.2%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
