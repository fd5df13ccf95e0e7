//! Boundary error taxonomy
//!
//! The engine itself has no failure paths: all operations are pure in-memory
//! computation, a no-match result is a success, and input validity is a
//! documented precondition. Errors therefore exist only at the request
//! parsing boundary, before the engine is ever invoked.

use thiserror::Error;

/// Validation failures raised by `RawTradeRequest::parse`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid limit price: {0}")]
    InvalidLimitPrice(String),

    #[error("unknown token: {0}")]
    UnknownToken(String),

    #[error("token_in and token_out must differ: {0}")]
    IdenticalPair(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RequestError::InvalidAmount("abc".to_string());
        assert_eq!(err.to_string(), "invalid amount: abc");

        let err = RequestError::UnknownToken("DOGE".to_string());
        assert!(err.to_string().contains("DOGE"));
    }
}
