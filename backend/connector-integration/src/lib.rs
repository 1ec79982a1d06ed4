//! Gateway connector implementations and the registry resolving them.

pub mod connectors;
pub mod types;
pub mod utils;

pub use types::{ConnectorData, ConnectorEnum};
