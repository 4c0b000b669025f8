//! Policy module - Parameters and reforms

mod parameter;
mod reform;

pub use parameter::{value_at, Parameter, ParameterValue};
pub use reform::{parse_numeric_input, ParameterReform, Period, Reform, ReformError};
