//! Household Situation Module
//! Household records: people, entity groups and their variables.

use crate::data::{Country, DefinitionPeriod, Entity, Variable};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Variable values by period, e.g. `{"2022": 30}`.
pub type PeriodValues = BTreeMap<String, Value>;

/// Variables of one person or group.
pub type Variables = BTreeMap<String, PeriodValues>;

/// Collection key of people in a household record.
pub const PEOPLE: &str = "people";

/// A group entity instance (benefit unit, tax unit, household, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityGroup {
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(flatten)]
    pub variables: Variables,
}

/// A household record as exchanged with the calculation backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Household {
    #[serde(default)]
    pub people: BTreeMap<String, Variables>,
    /// Group collections keyed by entity plural, then by group name.
    #[serde(flatten)]
    pub groups: BTreeMap<String, BTreeMap<String, EntityGroup>>,
}

impl Household {
    /// The single-adult household a session starts from.
    pub fn starting(country: Country, year: &str) -> Self {
        let group_names: &[(&str, &str)] = match country {
            Country::Uk => &[
                ("benunits", "your immediate family"),
                ("households", "your household"),
            ],
            Country::Us => &[
                ("tax_units", "your tax unit"),
                ("families", "your family"),
                ("spm_units", "your household"),
                ("households", "your household"),
            ],
        };

        let mut household = Household::default();
        let mut you = Variables::new();
        you.insert("age".into(), PeriodValues::from([(year.to_string(), Value::from(40))]));
        household.add_person("you", you, group_names);
        household
    }

    /// A person's variable value for a period.
    pub fn person_value(&self, person: &str, variable: &str, period: &str) -> Option<&Value> {
        self.people.get(person)?.get(variable)?.get(period)
    }

    /// Add a person and make them a member of each `(collection, group)`.
    /// Missing groups are created.
    pub fn add_person(&mut self, name: &str, variables: Variables, memberships: &[(&str, &str)]) {
        self.people.insert(name.to_string(), variables);
        for (collection, group) in memberships {
            let members = &mut self
                .groups
                .entry(collection.to_string())
                .or_default()
                .entry(group.to_string())
                .or_default()
                .members;
            if !members.iter().any(|m| m == name) {
                members.push(name.to_string());
            }
        }
    }

    /// Remove a person and every membership they hold. Returns false if
    /// there was no such person.
    pub fn remove_person(&mut self, name: &str) -> bool {
        let existed = self.people.remove(name).is_some();
        for group in self.groups.values_mut().flat_map(|c| c.values_mut()) {
            group.members.retain(|m| m != name);
        }
        existed
    }

    /// Add an empty `{year: null}` entry for every yearly variable that an
    /// entity record does not carry yet, so the backend computes it.
    pub fn add_yearly_variables(
        &mut self,
        variables: &BTreeMap<String, Variable>,
        entities: &BTreeMap<String, Entity>,
        year: &str,
    ) {
        for (name, variable) in variables {
            if variable.definition_period != DefinitionPeriod::Year {
                continue;
            }
            let Some(entity) = entities.get(&variable.entity) else {
                continue;
            };

            let records: Vec<&mut Variables> = if entity.is_person || entity.plural == PEOPLE {
                self.people.values_mut().collect()
            } else {
                match self.groups.get_mut(&entity.plural) {
                    Some(groups) => groups.values_mut().map(|g| &mut g.variables).collect(),
                    None => Vec::new(),
                }
            };

            for record in records {
                record
                    .entry(name.clone())
                    .or_insert_with(|| PeriodValues::from([(year.to_string(), Value::Null)]));
            }
        }
    }

    /// Names of the members of one group.
    pub fn members(&self, collection: &str, group: &str) -> &[String] {
        self.groups
            .get(collection)
            .and_then(|c| c.get(group))
            .map(|g| g.members.as_slice())
            .unwrap_or(&[])
    }
}
