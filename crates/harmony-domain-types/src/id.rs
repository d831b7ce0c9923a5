// Copyright 2025 the Harmony project developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Snowflake identifiers
//!
//! The platform identifies every first-class entity with a 64-bit snowflake.
//! JSON carries them as decimal strings to avoid precision loss in consumers
//! that parse numbers as doubles, so the contract keeps them opaque strings.

use serde::{Deserialize, Serialize};

/// An opaque snowflake identifier, carried verbatim as a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct Snowflake(pub String);

impl Snowflake {
    /// Whether the identifier is a non-empty decimal string.
    ///
    /// The server is the authority on which ids exist; this only rejects
    /// values that cannot be snowflakes at all.
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_digit())
    }
}

impl std::fmt::Display for Snowflake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Snowflake {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Snowflake {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snowflake_serializes_as_bare_string() {
        let id = Snowflake::from("290926798626357250");
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"290926798626357250\""
        );
    }

    #[test]
    fn well_formed_rejects_non_digits() {
        assert!(Snowflake::from("123").is_well_formed());
        assert!(!Snowflake::from("").is_well_formed());
        assert!(!Snowflake::from("12a3").is_well_formed());
    }
}
