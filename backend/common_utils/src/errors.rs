use thiserror::Error;

/// Result type used across the workspace; the error side is an
/// [`error_stack::Report`] so context attaches as it crosses layers.
pub type CustomResult<T, E> = error_stack::Result<T, E>;

#[derive(Debug, Error)]
pub enum ParsingError {
    #[error("Failed to parse struct: {0}")]
    StructParseFailure(&'static str),
}
