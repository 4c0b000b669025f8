//! Policy Explorer - Tax-Benefit Policy Explorer
//!
//! Household inputs, policy parameter editing and impact charts over a
//! calculation backend.

pub mod backend;
pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod household;
pub mod impact;
pub mod menu;
pub mod policy;
pub mod query;
pub mod theme;
