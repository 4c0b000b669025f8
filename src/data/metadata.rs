//! Metadata Module
//! Country metadata: parameters, variables, entities and the parameter menu.

use crate::menu::{MenuTree, RawMenuNode};
use crate::policy::Parameter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Countries with household input rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Uk,
    Us,
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Country::Uk => write!(f, "uk"),
            Country::Us => write!(f, "us"),
        }
    }
}

/// Period over which a variable is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefinitionPeriod {
    Year,
    Month,
    Eternity,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub label: String,
    /// Key of the entity this variable belongs to
    pub entity: String,
    pub definition_period: DefinitionPeriod,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    #[serde(default)]
    pub key: String,
    /// Key of this entity's collection in a household record
    pub plural: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub is_person: bool,
}

/// Everything the explorer knows about a country's model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub country_id: Country,
    #[serde(default)]
    pub parameters: BTreeMap<String, Parameter>,
    #[serde(default)]
    pub variables: BTreeMap<String, Variable>,
    #[serde(default)]
    pub entities: BTreeMap<String, Entity>,
    #[serde(default)]
    pub parameter_tree: Vec<RawMenuNode>,
}

impl Metadata {
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }

    pub fn menu_tree(&self) -> MenuTree {
        MenuTree::from_raw(&self.parameter_tree)
    }
}
