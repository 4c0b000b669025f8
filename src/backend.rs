//! Backend Module
//! Identifiers for submitted reforms and households.

use crate::data::Country;
use crate::household::Household;
use crate::policy::Reform;
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

/// Stores reforms and households and hands back an id for each.
pub trait PolicyBackend: Send + Sync {
    fn new_policy_id(&self, country: Country, reform: &Reform) -> Result<String, BackendError>;

    fn new_household_id(
        &self,
        country: Country,
        household: &Household,
    ) -> Result<String, BackendError>;
}

#[derive(Default)]
struct Store {
    ids: HashMap<String, String>,
    next_id: u64,
}

impl Store {
    fn intern(&mut self, key: String) -> String {
        if let Some(id) = self.ids.get(&key) {
            return id.clone();
        }
        self.next_id += 1;
        let id = self.next_id.to_string();
        self.ids.insert(key, id.clone());
        id
    }
}

/// In-process backend. Equal documents share an id; ids count up from 1
/// separately for policies and households.
#[derive(Default)]
pub struct LocalBackend {
    policies: Mutex<Store>,
    households: Mutex<Store>,
}

impl LocalBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn submit(
        store: &Mutex<Store>,
        country: Country,
        document: String,
    ) -> Result<String, BackendError> {
        let mut store = store
            .lock()
            .map_err(|_| BackendError::Unavailable("store lock poisoned".into()))?;
        Ok(store.intern(format!("{}:{}", country, document)))
    }
}

impl PolicyBackend for LocalBackend {
    fn new_policy_id(&self, country: Country, reform: &Reform) -> Result<String, BackendError> {
        let id = Self::submit(&self.policies, country, serde_json::to_string(reform)?)?;
        tracing::info!(%country, policy_id = %id, "policy stored");
        Ok(id)
    }

    fn new_household_id(
        &self,
        country: Country,
        household: &Household,
    ) -> Result<String, BackendError> {
        let id = Self::submit(&self.households, country, serde_json::to_string(household)?)?;
        tracing::info!(%country, household_id = %id, "household stored");
        Ok(id)
    }
}
