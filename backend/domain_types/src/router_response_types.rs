use std::collections::HashMap;

use common_utils::request::Method;

/// Redirect instruction handed back to the hosting framework once a
/// callback has been interpreted.
#[derive(Debug, Eq, PartialEq, Clone, serde::Serialize, serde::Deserialize)]
pub enum RedirectForm {
    Form {
        endpoint: String,
        method: Method,
        form_fields: HashMap<String, String>,
    },
    Html {
        html_data: String,
    },
    Uri {
        uri: String,
    },
}

impl From<(url::Url, Method)> for RedirectForm {
    fn from((mut redirect_url, method): (url::Url, Method)) -> Self {
        let form_fields = HashMap::from_iter(
            redirect_url
                .query_pairs()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        );

        // Do not include query params in the endpoint
        redirect_url.set_query(None);

        Self::Form {
            endpoint: redirect_url.to_string(),
            method,
            form_fields,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn form_from_url_moves_query_pairs_into_fields() {
        let url = url::Url::parse("https://merchant.example/return?order=42&lang=en").unwrap();
        let form = RedirectForm::from((url, Method::Post));

        match form {
            RedirectForm::Form {
                endpoint,
                method,
                form_fields,
            } => {
                assert_eq!(endpoint, "https://merchant.example/return");
                assert_eq!(method, Method::Post);
                assert_eq!(form_fields.get("order").map(String::as_str), Some("42"));
                assert_eq!(form_fields.get("lang").map(String::as_str), Some("en"));
            }
            other => panic!("expected a form redirect, got {other:?}"),
        }
    }
}
