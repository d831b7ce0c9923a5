// Copyright 2025 the Harmony project developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Guild resource schemas

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::Snowflake;
use crate::user::PartialUser;

/// Identity-level projection of a guild, as listed by `GET_GUILDS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct PartialGuild {
    pub id: Snowflake,
    pub name: String,
}

/// A user's membership record within one guild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct GuildMember {
    pub user: PartialUser,
    /// Guild-specific nickname; null when the member has none.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub nick: Option<Option<String>>,
    pub joined_at: DateTime<Utc>,
    pub mute: bool,
    pub deaf: bool,
}
