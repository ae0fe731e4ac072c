//! Remote message timestamp token

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// The remote platform's string-encoded clock value for a message
/// (e.g. `1512085950.000216`).
///
/// This is the ordering and identity key for messages, NOT a wall-clock
/// date: it is compared lexically as an opaque token and never parsed as
/// calendar time. Two messages with the same token from the same author
/// are the same message.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTimestamp(String);

impl MessageTimestamp {
    /// Create a timestamp token, rejecting empty input
    pub fn new(ts: impl Into<String>) -> Result<Self, DomainError> {
        let ts = ts.into();
        if ts.is_empty() {
            return Err(DomainError::InvalidTimestamp("(empty)".to_string()));
        }
        Ok(Self(ts))
    }

    /// Get the token as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_token() {
        let ts = MessageTimestamp::new("1512085950.000216").unwrap();
        assert_eq!(ts.as_str(), "1512085950.000216");
    }

    #[test]
    fn empty_token_rejected() {
        assert!(matches!(
            MessageTimestamp::new(""),
            Err(DomainError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn ordering_is_lexical() {
        let a = MessageTimestamp::new("100.1").unwrap();
        let b = MessageTimestamp::new("100.2").unwrap();
        assert!(a < b);

        // Lexical, not numeric: "9" sorts after "10" as a token.
        let nine = MessageTimestamp::new("9").unwrap();
        let ten = MessageTimestamp::new("10").unwrap();
        assert!(nine > ten);
    }

    #[test]
    fn token_is_never_normalized() {
        let padded = MessageTimestamp::new("0100.1").unwrap();
        let plain = MessageTimestamp::new("100.1").unwrap();
        assert_ne!(padded, plain);
    }

    #[test]
    fn serialization_is_transparent() {
        let ts = MessageTimestamp::new("100.1").unwrap();
        assert_eq!(serde_json::to_string(&ts).unwrap(), "\"100.1\"");
    }
}
