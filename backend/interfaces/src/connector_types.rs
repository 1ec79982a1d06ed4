use std::collections::HashMap;

use common_utils::{errors::CustomResult, request::Method};
use domain_types::{
    connector_types::{RelayDetailsResponse, RequestDetails},
    errors::ConnectorError,
    types::RelaySettings,
};

/// Capability contract for responses that finish by sending the shopper
/// somewhere else instead of completing the request in place.
///
/// Interpreted callbacks expose redirect instructions through this trait
/// so the host's renderer never needs to know which gateway produced
/// them.
pub trait RedirectResponse {
    fn is_redirect(&self) -> bool;

    fn redirect_method(&self) -> Method;

    /// Destination of the redirect, when the response itself decides one.
    /// `None` leaves the choice to the caller.
    fn redirect_url(&self) -> Option<String>;

    /// Fields to carry through the redirect. Anything returned here
    /// travels through the shopper's browser and must be treated as
    /// attacker-writable by the receiving page.
    fn redirect_form_fields(&self) -> HashMap<String, String>;
}

/// Connector-side handling of a gateway relay (direct-post) callback.
pub trait IncomingRelayResponse {
    fn process_relay_response(
        &self,
        request: RequestDetails,
        settings: &RelaySettings,
    ) -> CustomResult<RelayDetailsResponse, ConnectorError>;
}

/// The full surface a relay connector offers to the host.
pub trait RelayConnector: IncomingRelayResponse {}

pub type BoxedRelayConnector = Box<&'static (dyn RelayConnector + Sync)>;
