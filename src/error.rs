//! Error types for LBJ POCSAG encoding

use thiserror::Error;

/// Result type for LBJ POCSAG operations
pub type Result<T> = std::result::Result<T, EncodeError>;

/// Errors reported when encoding parameters are rejected
///
/// All of them are detected from the input values alone, before any
/// codeword is computed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Address is zero or does not fit in 21 bits
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Function code is not one of Up, Down or TimeSync
    #[error("Invalid function code: {0}")]
    InvalidFunctionCode(String),

    /// Batch 2 disposition is not one of Truncate, CopyBatch1 or LeaveIdle
    #[error("Invalid batch 2 policy: {0}")]
    InvalidBatch2Policy(String),
}

impl EncodeError {
    /// Create a new InvalidAddress error
    pub fn invalid_address(msg: impl Into<String>) -> Self {
        EncodeError::InvalidAddress(msg.into())
    }

    /// Create a new InvalidFunctionCode error
    pub fn invalid_function_code(msg: impl Into<String>) -> Self {
        EncodeError::InvalidFunctionCode(msg.into())
    }

    /// Create a new InvalidBatch2Policy error
    pub fn invalid_batch2_policy(msg: impl Into<String>) -> Self {
        EncodeError::InvalidBatch2Policy(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EncodeError::invalid_address("test");
        assert!(err.to_string().contains("Invalid address"));

        let err = EncodeError::invalid_function_code("5");
        assert_eq!(err.to_string(), "Invalid function code: 5");

        let err = EncodeError::invalid_batch2_policy("7");
        assert!(err.to_string().starts_with("Invalid batch 2 policy"));
    }
}
