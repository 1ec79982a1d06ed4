use std::collections::HashMap;

use common_enums::AttemptStatus;
use common_utils::request::Method;

/// An incoming HTTP request as decoded by the host, handed to a
/// connector for interpretation. The host owns transport; connectors
/// only ever see this value.
#[derive(Debug, Clone)]
pub struct RequestDetails {
    pub method: Method,
    pub uri: Option<String>,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
    pub query_params: Option<String>,
}

/// Summary of an interpreted relay callback in domain terms.
///
/// Error fields are populated only for attempts the gateway itself
/// reported as failed; an absent or unrecognized result code is a
/// pending attempt, not an error.
#[derive(Debug, Clone)]
pub struct RelayDetailsResponse {
    pub status: AttemptStatus,
    pub connector_transaction_id: Option<String>,
    pub connector_response_reference_id: Option<String>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
}
