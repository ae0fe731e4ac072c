//! Remote author identifier

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// The remote platform's identifier for a message author (e.g. `U02AB13F`).
///
/// One half of the natural key; an empty author makes the key undefined,
/// so empty input is rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(String);

impl AuthorId {
    /// Create an author identifier, rejecting empty input
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::InvalidAuthorId("(empty)".to_string()));
        }
        Ok(Self(id))
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_author() {
        let author = AuthorId::new("U02AB13F").unwrap();
        assert_eq!(author.as_str(), "U02AB13F");
    }

    #[test]
    fn empty_author_rejected() {
        assert!(matches!(
            AuthorId::new(""),
            Err(DomainError::InvalidAuthorId(_))
        ));
    }

    #[test]
    fn equality_is_exact() {
        let a = AuthorId::new("U1").unwrap();
        let b = AuthorId::new("U1").unwrap();
        assert_eq!(a, b);
    }
}
