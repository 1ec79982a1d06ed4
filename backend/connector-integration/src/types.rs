use domain_types::{
    errors::{ApiError, ApplicationErrorResponse},
    utils::ForeignTryFrom,
};
use interfaces::connector_types::BoxedRelayConnector;

use crate::connectors::{authorizedotnet::CONNECTOR_ID as AUTHORIZEDOTNET, Authorizedotnet};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConnectorEnum {
    Authorizedotnet,
}

impl ForeignTryFrom<&str> for ConnectorEnum {
    type Error = ApplicationErrorResponse;

    fn foreign_try_from(connector: &str) -> Result<Self, error_stack::Report<Self::Error>> {
        match connector {
            AUTHORIZEDOTNET => Ok(Self::Authorizedotnet),
            _ => Err(ApplicationErrorResponse::BadRequest(ApiError {
                sub_code: "INVALID_CONNECTOR".to_owned(),
                error_identifier: 401,
                error_message: format!("Invalid value for connector: {}", connector),
                error_object: None,
            })
            .into()),
        }
    }
}

#[derive(Clone)]
pub struct ConnectorData {
    pub connector: BoxedRelayConnector,
    pub connector_name: ConnectorEnum,
}

impl ConnectorData {
    pub fn get_connector_by_name(connector_name: &ConnectorEnum) -> Self {
        let connector = Self::convert_connector(connector_name);
        Self {
            connector,
            connector_name: connector_name.clone(),
        }
    }

    fn convert_connector(connector_name: &ConnectorEnum) -> BoxedRelayConnector {
        match connector_name {
            ConnectorEnum::Authorizedotnet => Box::new(Authorizedotnet::new()),
        }
    }
}
