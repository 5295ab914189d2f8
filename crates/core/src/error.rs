use thiserror::Error;

/// Failures at the request boundary. The classifier and composer themselves
/// cannot fail; the `Display` strings are sent to clients as-is.
#[derive(Debug, Error)]
pub enum AdviceError {
    #[error("Missing userInput parameter")]
    MissingUserInput,

    #[error("{0}")]
    MalformedRequest(String),
}
