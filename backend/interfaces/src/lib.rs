//! Traits connectors implement to plug into a host application.

pub mod connector_types;
