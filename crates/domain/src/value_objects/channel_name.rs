//! Human-readable channel display name

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A channel's display name (e.g. `general`).
///
/// Unique within the workspace at a point in time, but not stable over
/// time; resolution to a [`ChannelId`](crate::ChannelId) happens per call.
/// Matching is exact and case-sensitive, so no normalization is applied
/// here beyond rejecting the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelName(String);

impl ChannelName {
    /// Create a channel name, rejecting empty input
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::InvalidChannelName("(empty)".to_string()));
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ChannelName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name() {
        let name = ChannelName::new("general").unwrap();
        assert_eq!(name.as_str(), "general");
        assert_eq!(name.to_string(), "general");
    }

    #[test]
    fn empty_name_rejected() {
        let result = ChannelName::new("");
        assert!(matches!(result, Err(DomainError::InvalidChannelName(_))));
    }

    #[test]
    fn case_is_preserved() {
        let lower = ChannelName::new("general").unwrap();
        let upper = ChannelName::new("General").unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn from_str_roundtrip() {
        let name: ChannelName = "random".parse().unwrap();
        assert_eq!(name.as_str(), "random");
        assert!("".parse::<ChannelName>().is_err());
    }

    #[test]
    fn serialization_is_transparent() {
        let name = ChannelName::new("general").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"general\"");
    }
}
