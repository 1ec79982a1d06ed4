//! Markup helpers shared by connector modules.

use std::collections::{BTreeMap, HashMap};

use common_utils::{errors::CustomResult, request::Method};
use domain_types::errors::ConnectorError;
use error_stack::report;

/// Escapes a value for interpolation into an HTML attribute.
pub(crate) fn html_escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders the HTML fragment returned to the gateway: a form targeting
/// `endpoint` that submits itself on load, with a meta-refresh fallback
/// for shoppers without JavaScript. The gateway discards any headers we
/// return, so a `Location` redirect is not an option here.
pub(crate) fn build_auto_submit_form(
    endpoint: &str,
    method: Method,
    form_fields: &HashMap<String, String>,
    connector: &'static str,
) -> CustomResult<String, ConnectorError> {
    let form_method = match method {
        Method::Get => "get",
        Method::Post => "post",
        other => {
            return Err(report!(ConnectorError::NotSupported {
                message: format!("redirect method {other}"),
                connector,
            }))
        }
    };

    let endpoint = html_escape_attribute(endpoint);
    // Sorted so the rendered markup is stable for a given field set.
    let inputs: String = form_fields
        .iter()
        .collect::<BTreeMap<_, _>>()
        .into_iter()
        .map(|(name, value)| {
            format!(
                "<input type=\"hidden\" name=\"{}\" value=\"{}\">\n",
                html_escape_attribute(name),
                html_escape_attribute(value)
            )
        })
        .collect();

    Ok(format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta http-equiv=\"refresh\" content=\"3;url={endpoint}\">\n\
         </head>\n\
         <body onload=\"document.forms[0].submit();\">\n\
         <form action=\"{endpoint}\" method=\"{form_method}\">\n\
         {inputs}\
         <noscript><input type=\"submit\" value=\"Continue\"></noscript>\n\
         </form>\n\
         </body>\n\
         </html>\n"
    ))
}
