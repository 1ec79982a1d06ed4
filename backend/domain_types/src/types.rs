use common_utils::request::Method;
use serde::Deserialize;

use crate::errors::SettingsError;

fn default_redirect_method() -> Method {
    Method::Post
}

/// Host-supplied settings for relay-response handling.
///
/// The redirect method is configuration rather than a constant so hosts
/// whose renderer can emit plain GET redirects are not locked to POST.
#[derive(Clone, Debug, Deserialize)]
pub struct RelaySettings {
    #[serde(default = "default_redirect_method")]
    pub redirect_method: Method,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            redirect_method: default_redirect_method(),
        }
    }
}

impl RelaySettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        match self.redirect_method {
            Method::Get | Method::Post => Ok(()),
            other => Err(SettingsError::UnsupportedRedirectMethod(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn default_settings_redirect_via_post() {
        let settings = RelaySettings::default();
        assert_eq!(settings.redirect_method, Method::Post);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn get_is_an_accepted_redirect_method() {
        let settings = RelaySettings {
            redirect_method: Method::Get,
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn non_form_methods_are_rejected() {
        let settings = RelaySettings {
            redirect_method: Method::Put,
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn settings_deserialize_with_defaulted_method() {
        let settings: RelaySettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.redirect_method, Method::Post);

        let settings: RelaySettings =
            serde_json::from_str(r#"{"redirect_method": "GET"}"#).unwrap();
        assert_eq!(settings.redirect_method, Method::Get);
    }
}
