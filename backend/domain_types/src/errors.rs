use common_utils::request::Method;
use strum::Display;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConnectorError {
    #[error("Failed to deserialize connector response")]
    ResponseDeserializationFailed,
    #[error("{message} is not supported by {connector}")]
    NotSupported {
        message: String,
        connector: &'static str,
    },
}

#[derive(Debug, Clone, thiserror::Error, Display)]
pub enum ApplicationErrorResponse {
    BadRequest(ApiError),
}

#[derive(Debug, serde::Serialize, Clone)]
pub struct ApiError {
    pub sub_code: String,
    pub error_identifier: u16,
    pub error_message: String,
    pub error_object: Option<serde_json::Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("unsupported redirect method '{0}': a shopper browser form can only submit GET or POST")]
    UnsupportedRedirectMethod(Method),
}
