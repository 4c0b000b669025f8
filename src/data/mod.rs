//! Data module - Metadata documents and file loading

mod loader;
mod metadata;

pub use loader::{DocumentLoader, LoaderError};
pub use metadata::{Country, DefinitionPeriod, Entity, Metadata, Variable};
