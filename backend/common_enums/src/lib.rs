//! Status vocabulary shared across the relay connector workspace.

use serde::{Deserialize, Serialize};

/// Unified status of a payment attempt after a gateway interaction.
///
/// Connector modules map gateway-specific result codes into this enum;
/// everything downstream reasons in these terms only.
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AttemptStatus {
    Authorized,
    Charged,
    Voided,
    #[default]
    Pending,
    Failure,
}
