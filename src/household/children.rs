//! Children Module
//! Country rules for counting children and resizing a household to a count.

use super::situation::{Household, PeriodValues, Variables};
use crate::data::{Country, Entity, Variable};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Most children the input form offers.
pub const MAX_CHILDREN: usize = 5;

const ORDINALS: [&str; MAX_CHILDREN] = ["first", "second", "third", "fourth", "fifth"];

#[derive(Error, Debug, PartialEq)]
pub enum HouseholdError {
    #[error("At most {max} children are supported, got {requested}")]
    TooManyChildren { requested: usize, max: usize },
    #[error("Removing '{0}' did not reduce the number of children")]
    ChildNotRemoved(String),
}

/// How a country recognises and creates children.
#[derive(Debug, Clone, Copy)]
pub struct ChildRules {
    country: Country,
    /// Plural noun used in page titles
    pub noun: &'static str,
    /// Singular noun used in generated person names
    singular: &'static str,
    /// `(collection, group)` pairs a new child joins
    memberships: &'static [(&'static str, &'static str)],
}

impl ChildRules {
    pub fn for_country(country: Country) -> Self {
        match country {
            Country::Uk => Self {
                country,
                noun: "children",
                singular: "child",
                memberships: &[
                    ("benunits", "your immediate family"),
                    ("households", "your household"),
                ],
            },
            Country::Us => Self {
                country,
                noun: "dependents",
                singular: "dependent",
                memberships: &[
                    ("tax_units", "your tax unit"),
                    ("families", "your family"),
                    ("spm_units", "your household"),
                    ("households", "your household"),
                ],
            },
        }
    }

    /// Question shown above the child count selector.
    pub fn title(&self) -> String {
        format!("How many {} do you have?", self.noun)
    }

    /// Generated name of the child at `index`, e.g. `your second child`.
    pub fn child_name(&self, index: usize) -> Option<String> {
        ORDINALS
            .get(index)
            .map(|ordinal| format!("your {} {}", ordinal, self.singular))
    }

    fn is_child(&self, person: &Variables, year: &str) -> bool {
        let value = |variable: &str| person.get(variable).and_then(|v| v.get(year));
        match self.country {
            Country::Uk => value("age")
                .and_then(Value::as_f64)
                .is_some_and(|age| age < 18.0),
            Country::Us => value("is_tax_unit_dependent")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }
    }

    fn default_child(&self, year: &str) -> Variables {
        let mut child = Variables::new();
        child.insert(
            "age".into(),
            PeriodValues::from([(year.to_string(), Value::from(10))]),
        );
        if self.country == Country::Us {
            child.insert(
                "is_tax_unit_dependent".into(),
                PeriodValues::from([(year.to_string(), Value::Bool(true))]),
            );
        }
        child
    }

    pub fn count_children(&self, household: &Household, year: &str) -> usize {
        household
            .people
            .values()
            .filter(|person| self.is_child(person, year))
            .count()
    }

    fn add_child(&self, household: &mut Household, year: &str) -> Result<(), HouseholdError> {
        let count = self.count_children(household, year);
        let name = self.child_name(count).ok_or(HouseholdError::TooManyChildren {
            requested: count + 1,
            max: MAX_CHILDREN,
        })?;
        household.add_person(&name, self.default_child(year), self.memberships);
        Ok(())
    }

    /// Add or remove children until the household has `count` of them,
    /// then seed yearly variables for the backend to fill in.
    pub fn set_count_children(
        &self,
        mut household: Household,
        count: usize,
        variables: &BTreeMap<String, Variable>,
        entities: &BTreeMap<String, Entity>,
        year: &str,
    ) -> Result<Household, HouseholdError> {
        if count > MAX_CHILDREN {
            return Err(HouseholdError::TooManyChildren {
                requested: count,
                max: MAX_CHILDREN,
            });
        }

        while self.count_children(&household, year) < count {
            self.add_child(&mut household, year)?;
        }

        loop {
            let current = self.count_children(&household, year);
            if current <= count {
                break;
            }
            let name = self
                .child_name(current - 1)
                .unwrap_or_else(|| format!("child {}", current));
            household.remove_person(&name);
            if self.count_children(&household, year) >= current {
                return Err(HouseholdError::ChildNotRemoved(name));
            }
        }

        household.add_yearly_variables(variables, entities, year);
        tracing::info!(count, people = household.people.len(), "household children set");
        Ok(household)
    }
}
