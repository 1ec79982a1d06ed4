//! Domain vocabulary for relay-response handling: decoded requests,
//! interpreted-callback summaries, redirect instructions and the
//! settings that shape them.

pub mod connector_types;
pub mod errors;
pub mod router_response_types;
pub mod types;
pub mod utils;
