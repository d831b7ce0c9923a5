// Copyright 2025 the Harmony project developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User resource schemas
//!
//! Users come in two projections: [`PartialUser`] carries identity-level
//! fields only and is what the RPC and event payloads embed; [`User`] adds
//! the account-state and OAuth2-scoped fields returned by the user
//! endpoints. Scoped fields (`email`, `verified`, ...) are absent unless the
//! request was authorized for them, which is why they are optional on top of
//! being nullable where the docs say so.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::id::Snowflake;

/// Identity-level projection of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct PartialUser {
    pub id: Snowflake,
    pub username: String,
    /// Four-digit tag, kept as a string exactly as the wire carries it.
    pub discriminator: String,
    /// Avatar hash; null for users on the default avatar.
    pub avatar: Option<String>,
}

/// Full user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub discriminator: String,
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_enabled: Option<bool>,
    /// Banner hash; absent without the right scope, null when unset.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub banner: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub accent_color: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    /// Requires the `email` scope; null when the account has none on file.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub email: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_type: Option<PremiumType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_flags: Option<u64>,
}

/// Premium subscription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[repr(u8)]
pub enum PremiumType {
    None = 0,
    NitroClassic = 1,
    Nitro = 2,
}

impl User {
    /// Identity-level projection of this record.
    pub fn to_partial(&self) -> PartialUser {
        PartialUser {
            id: self.id.clone(),
            username: self.username.clone(),
            discriminator: self.discriminator.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_user_round_trips() {
        let json = r#"{"id":"53908232506183680","username":"Mason","discriminator":"9999","avatar":null}"#;
        let user: PartialUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.avatar, None);
        assert_eq!(serde_json::to_string(&user).unwrap(), json);
    }

    #[test]
    fn email_distinguishes_absent_from_null() {
        let absent: User = serde_json::from_str(
            r#"{"id":"1","username":"a","discriminator":"0001","avatar":null}"#,
        )
        .unwrap();
        assert_eq!(absent.email, None);

        let null: User = serde_json::from_str(
            r#"{"id":"1","username":"a","discriminator":"0001","avatar":null,"email":null}"#,
        )
        .unwrap();
        assert_eq!(null.email, Some(None));

        let value: User = serde_json::from_str(
            r#"{"id":"1","username":"a","discriminator":"0001","avatar":null,"email":"a@b.c"}"#,
        )
        .unwrap();
        assert_eq!(value.email, Some(Some("a@b.c".to_owned())));
    }
}
