// Copyright 2025 the Harmony project developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Webhook resource schema

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::id::Snowflake;
use crate::user::PartialUser;

/// Webhook kind, carried on the wire as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[repr(u8)]
pub enum WebhookType {
    Incoming = 1,
    ChannelFollower = 2,
}

/// A channel webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct Webhook {
    pub id: Snowflake,
    #[serde(rename = "type")]
    pub kind: WebhookType,
    /// Absent for webhooks fetched by token, null for ones not tied to a
    /// guild.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_with::rust::double_option"
    )]
    pub guild_id: Option<Option<Snowflake>>,
    pub channel_id: Snowflake,
    /// Creator; absent when fetched by token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<PartialUser>,
    /// Default name; null when unset.
    pub name: Option<String>,
    /// Default avatar hash; null when unset.
    pub avatar: Option<String>,
    /// Secure token, only returned for incoming webhooks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Null unless the webhook was created by an application.
    pub application_id: Option<Snowflake>,
}
