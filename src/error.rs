use thiserror::Error;

/// The designated recoverable fault a method behavior raises to abort the
/// surrounding [`parse`](crate::Parser::parse) call.
///
/// The carried message becomes the *entire* output of that call: everything
/// already expanded is discarded and neither final rendering nor truncation
/// runs. Anything else a behavior does wrong (a panic) is a programming fault
/// and propagates to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        ParseError { message: message.into() }
    }

    /// The user-facing message that replaces the parse output.
    pub fn message(&self) -> &str {
        &self.message
    }
}
