use std::collections::HashMap;

use common_enums::AttemptStatus;
use common_utils::{consts, errors::CustomResult, request::Method};
use domain_types::{
    connector_types::RelayDetailsResponse, errors::ConnectorError,
    router_response_types::RedirectForm, types::RelaySettings,
};
use hyperswitch_masking::Secret;
use interfaces::connector_types::RedirectResponse;
use serde::{Deserialize, Serialize};

use super::CONNECTOR_ID;
use crate::utils;

/// Transaction result codes the gateway posts in `x_response_code`.
///
/// `Error` is the "bad input, let the shopper retry the form" outcome;
/// a `Declined` attempt must not be retried the same way. Anything the
/// gateway may add later lands in `Unknown` instead of failing the
/// decode.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize, Serialize)]
pub enum AuthorizedotnetPaymentStatus {
    #[serde(rename = "1")]
    Approved,
    #[serde(rename = "2")]
    Declined,
    #[serde(rename = "3")]
    Error,
    #[serde(rename = "4")]
    HeldForReview,
    #[serde(other)]
    Unknown,
}

/// Transaction kinds the gateway reports in `x_type`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizedotnetTransactionType {
    AuthCapture,
    AuthOnly,
    CaptureOnly,
    PriorAuthCapture,
    Credit,
    Void,
    #[serde(other)]
    Unknown,
}

/// Relay (direct-post) callback body.
///
/// The gateway owns the field set, and a malformed post must still
/// interpret, so every field is optional. The hash field is carried
/// as posted; nothing here verifies it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthorizedotnetDpmCallbackPayload {
    #[serde(rename = "x_response_code")]
    pub response_code: Option<AuthorizedotnetPaymentStatus>,
    #[serde(rename = "x_response_reason_code")]
    pub response_reason_code: Option<String>,
    #[serde(rename = "x_response_reason_text")]
    pub response_reason_text: Option<String>,
    #[serde(rename = "x_trans_id")]
    pub transaction_id: Option<String>,
    #[serde(rename = "x_auth_code")]
    pub auth_code: Option<String>,
    #[serde(rename = "x_amount")]
    pub amount: Option<String>,
    #[serde(rename = "x_invoice_num")]
    pub invoice_number: Option<String>,
    #[serde(rename = "x_type")]
    pub transaction_type: Option<AuthorizedotnetTransactionType>,
    #[serde(rename = "x_method")]
    pub payment_method: Option<String>,
    #[serde(rename = "x_avs_code")]
    pub avs_code: Option<String>,
    #[serde(rename = "x_cvv2_resp_code")]
    pub cvv2_response_code: Option<String>,
    #[serde(rename = "x_account_number")]
    pub account_number: Option<Secret<String>>,
    #[serde(rename = "x_MD5_Hash")]
    pub md5_hash: Option<Secret<String>>,
}

/// Result of handling the DPM relay callback.
///
/// This response never completes the request in place: it always
/// instructs the host to render a redirect fragment for the shopper's
/// browser.
#[derive(Debug, Clone)]
pub struct AuthorizedotnetDpmResponse {
    payload: AuthorizedotnetDpmCallbackPayload,
    settings: RelaySettings,
}

impl AuthorizedotnetDpmResponse {
    pub fn new(payload: AuthorizedotnetDpmCallbackPayload, settings: RelaySettings) -> Self {
        Self { payload, settings }
    }

    /// The gateway's own classification of the attempt, when it posted a
    /// recognizable one.
    pub fn status(&self) -> Option<AuthorizedotnetPaymentStatus> {
        self.payload.response_code
    }

    /// True only for an approved transaction.
    pub fn is_successful(&self) -> bool {
        self.payload.response_code == Some(AuthorizedotnetPaymentStatus::Approved)
    }

    /// True when the gateway flagged the submission itself as bad, in
    /// which case the shopper can be sent back to the entry form for
    /// another attempt.
    pub fn is_error(&self) -> bool {
        self.payload.response_code == Some(AuthorizedotnetPaymentStatus::Error)
    }

    /// Reason code and reason text joined with `|`, absent parts
    /// rendered empty. Diagnostic only; not sanitized for display.
    pub fn message(&self) -> String {
        format!(
            "{}|{}",
            self.payload.response_reason_code.as_deref().unwrap_or(""),
            self.payload.response_reason_text.as_deref().unwrap_or("")
        )
    }

    pub fn transaction_id(&self) -> Option<&str> {
        self.payload.transaction_id.as_deref()
    }

    pub fn auth_code(&self) -> Option<&str> {
        self.payload.auth_code.as_deref()
    }

    pub fn amount(&self) -> Option<&str> {
        self.payload.amount.as_deref()
    }

    pub fn invoice_number(&self) -> Option<&str> {
        self.payload.invoice_number.as_deref()
    }

    /// Masked card number as posted by the gateway.
    pub fn account_number(&self) -> Option<&Secret<String>> {
        self.payload.account_number.as_ref()
    }

    /// The gateway's transaction hash, as posted. Verification is out of
    /// scope here; the host must not treat its presence as integrity.
    pub fn md5_hash(&self) -> Option<&Secret<String>> {
        self.payload.md5_hash.as_ref()
    }

    /// Attempt status in domain terms. Review, unrecognized and absent
    /// codes are pending: the host resolves them from stored state.
    pub fn attempt_status(&self) -> AttemptStatus {
        match self.payload.response_code {
            Some(AuthorizedotnetPaymentStatus::Approved) => match self.payload.transaction_type {
                Some(AuthorizedotnetTransactionType::AuthOnly) => AttemptStatus::Authorized,
                Some(AuthorizedotnetTransactionType::Void) => AttemptStatus::Voided,
                _ => AttemptStatus::Charged,
            },
            Some(AuthorizedotnetPaymentStatus::Declined)
            | Some(AuthorizedotnetPaymentStatus::Error) => AttemptStatus::Failure,
            Some(AuthorizedotnetPaymentStatus::HeldForReview)
            | Some(AuthorizedotnetPaymentStatus::Unknown)
            | None => AttemptStatus::Pending,
        }
    }

    /// Renders the fragment returned to the gateway: an auto-submitting
    /// form targeting `return_url`, with a meta-refresh fallback.
    pub fn relay_response_html(
        &self,
        return_url: &url::Url,
    ) -> CustomResult<RedirectForm, ConnectorError> {
        let html_data = utils::build_auto_submit_form(
            return_url.as_str(),
            self.redirect_method(),
            &self.redirect_form_fields(),
            CONNECTOR_ID,
        )?;
        Ok(RedirectForm::Html { html_data })
    }
}

impl RedirectResponse for AuthorizedotnetDpmResponse {
    fn is_redirect(&self) -> bool {
        true
    }

    fn redirect_method(&self) -> Method {
        self.settings.redirect_method
    }

    /// The cancel path is a direct link owned by the gateway, and the
    /// success/failure destination is resolved by the host from stored
    /// transaction state, so no URL is decided here.
    fn redirect_url(&self) -> Option<String> {
        None
    }

    /// Always empty: result data relayed through the shopper's browser
    /// would be forgeable without a signature, and none is applied.
    fn redirect_form_fields(&self) -> HashMap<String, String> {
        HashMap::new()
    }
}

impl From<&AuthorizedotnetDpmResponse> for RelayDetailsResponse {
    fn from(response: &AuthorizedotnetDpmResponse) -> Self {
        let (error_code, error_message) = match response.payload.response_code {
            Some(AuthorizedotnetPaymentStatus::Declined)
            | Some(AuthorizedotnetPaymentStatus::Error) => (
                Some(
                    response
                        .payload
                        .response_reason_code
                        .clone()
                        .unwrap_or_else(|| consts::NO_ERROR_CODE.to_string()),
                ),
                Some(
                    response
                        .payload
                        .response_reason_text
                        .clone()
                        .unwrap_or_else(|| consts::NO_ERROR_MESSAGE.to_string()),
                ),
            ),
            _ => (None, None),
        };

        Self {
            status: response.attempt_status(),
            connector_transaction_id: response.payload.transaction_id.clone(),
            connector_response_reference_id: response.payload.invoice_number.clone(),
            error_code,
            error_message,
        }
    }
}
