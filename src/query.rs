//! Query Module
//! Search parameters naming the current reform, household and focus.

use std::collections::BTreeMap;

pub const REFORM: &str = "reform";
pub const HOUSEHOLD: &str = "household";
pub const FOCUS: &str = "focus";

/// Key/value search parameters. Values are ids and dotted names, so no
/// escaping is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    params: BTreeMap<String, String>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `a=1&b=2`, with or without a leading `?`. Pairs without `=`
    /// get an empty value.
    pub fn parse(query: &str) -> Self {
        let params = query
            .trim_start_matches('?')
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((k, v)) => (k.to_string(), v.to_string()),
                None => (pair.to_string(), String::new()),
            })
            .collect();
        Self { params }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.params.insert(key.to_string(), value.into());
    }

    /// A copy with one key replaced.
    pub fn with(&self, key: &str, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.set(key, value);
        next
    }

    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}
