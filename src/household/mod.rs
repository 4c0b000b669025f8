//! Household module - Household records and input rules

mod children;
mod situation;

pub use children::{ChildRules, HouseholdError, MAX_CHILDREN};
pub use situation::{EntityGroup, Household, PeriodValues, Variables, PEOPLE};
