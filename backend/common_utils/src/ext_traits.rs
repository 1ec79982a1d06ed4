use error_stack::ResultExt;
use serde::de::DeserializeOwned;

use crate::errors::{CustomResult, ParsingError};

/// Decoding helpers for raw request bytes.
pub trait ByteSliceExt {
    /// Parses a form-urlencoded byte slice into `T`.
    fn parse_form_struct<T>(&self, type_name: &'static str) -> CustomResult<T, ParsingError>
    where
        T: DeserializeOwned;
}

impl ByteSliceExt for [u8] {
    fn parse_form_struct<T>(&self, type_name: &'static str) -> CustomResult<T, ParsingError>
    where
        T: DeserializeOwned,
    {
        serde_urlencoded::from_bytes(self)
            .change_context(ParsingError::StructParseFailure(type_name))
            .attach_printable_lazy(|| format!("Unable to parse {type_name} from request body"))
    }
}
