pub mod transformers;


use common_utils::{errors::CustomResult, ext_traits::ByteSliceExt};
use domain_types::{
    connector_types::{RelayDetailsResponse, RequestDetails},
    errors::ConnectorError,
    types::RelaySettings,
};
use error_stack::ResultExt;
use interfaces::connector_types::{IncomingRelayResponse, RelayConnector};
use transformers::{
    AuthorizedotnetDpmCallbackPayload, AuthorizedotnetDpmResponse, AuthorizedotnetPaymentStatus,
};

pub(crate) const CONNECTOR_ID: &str = "authorizedotnet";

/// Authorize.Net Direct Post Method connector.
///
/// Only the relay-response leg lives here: the gateway posts the
/// transaction result to the merchant's relay endpoint and renders
/// whatever HTML fragment that endpoint returns in the shopper's
/// browser.
#[derive(Debug, Clone)]
pub struct Authorizedotnet;

impl Authorizedotnet {
    pub fn new() -> &'static Self {
        &Self
    }

    /// Decodes a relay callback into the full DPM response, for callers
    /// that need the redirect contract rather than the domain summary.
    pub fn build_relay_response(
        &self,
        request: &RequestDetails,
        settings: &RelaySettings,
    ) -> CustomResult<AuthorizedotnetDpmResponse, ConnectorError> {
        let payload: AuthorizedotnetDpmCallbackPayload = request
            .body
            .parse_form_struct("AuthorizedotnetDpmCallbackPayload")
            .change_context(ConnectorError::ResponseDeserializationFailed)?;

        match payload.response_code {
            None => tracing::warn!(
                target: "authorizedotnet_relay",
                "Relay callback carried no x_response_code; treating the attempt as pending"
            ),
            Some(AuthorizedotnetPaymentStatus::Unknown) => tracing::warn!(
                target: "authorizedotnet_relay",
                "Relay callback carried an unrecognized x_response_code; treating the attempt as pending"
            ),
            _ => {}
        }

        Ok(AuthorizedotnetDpmResponse::new(payload, settings.clone()))
    }
}

impl RelayConnector for Authorizedotnet {}

impl IncomingRelayResponse for Authorizedotnet {
    fn process_relay_response(
        &self,
        request: RequestDetails,
        settings: &RelaySettings,
    ) -> CustomResult<RelayDetailsResponse, ConnectorError> {
        let response = self.build_relay_response(&request, settings)?;
        Ok(RelayDetailsResponse::from(&response))
    }
}
