// Copyright 2025 the Harmony project developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message resource schema
//!
//! Only the fields the RPC message events and channel snapshots carry.
//! `edited_timestamp` is plain nullable: the wire always includes it and it
//! is null until the first edit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::Snowflake;
use crate::user::PartialUser;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct Message {
    pub id: Snowflake,
    pub content: String,
    pub author: PartialUser,
    pub timestamp: DateTime<Utc>,
    pub edited_timestamp: Option<DateTime<Utc>>,
    pub tts: bool,
    pub pinned: bool,
}
