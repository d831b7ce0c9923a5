// Copyright 2025 the Harmony project developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Event payload shapes
//!
//! Events are the push half of the protocol: the client subscribes to an
//! event (optionally scoped to a guild or channel) and the server delivers
//! matching payloads as `DISPATCH` frames with no nonce. `READY` and `ERROR`
//! are the two exceptions that arrive without a subscription.

use serde::{Deserialize, Serialize};

use harmony_domain_types::{Message, PartialGuild, PartialUser, Snowflake, VoiceStateItem};

use crate::command::{ErrorData, VoiceSettings};

/// Closed enumeration of the `evt` discriminant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Ready,
    Error,
    GuildStatus,
    GuildCreate,
    ChannelCreate,
    VoiceChannelSelect,
    VoiceStateCreate,
    VoiceStateUpdate,
    VoiceStateDelete,
    VoiceSettingsUpdate,
    VoiceConnectionStatus,
    SpeakingStart,
    SpeakingStop,
    MessageCreate,
    MessageUpdate,
    MessageDelete,
    NotificationCreate,
    ActivityJoin,
    ActivitySpectate,
    ActivityJoinRequest,
}

// ---------------------------------------------------------------------------
// Subscription argument shapes
// ---------------------------------------------------------------------------

/// Scope args shared by every channel-scoped subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelScopedArgs {
    pub channel_id: Snowflake,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildStatusArgs {
    pub guild_id: Snowflake,
}

/// Argument union of `SUBSCRIBE`/`UNSUBSCRIBE`, keyed by `evt`.
///
/// Unit variants are the globally-scoped events that take no args; `READY`
/// and `ERROR` are absent because they cannot be subscribed to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "evt", content = "args", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionArgs {
    GuildStatus(GuildStatusArgs),
    GuildCreate,
    ChannelCreate,
    VoiceChannelSelect,
    VoiceStateCreate(ChannelScopedArgs),
    VoiceStateUpdate(ChannelScopedArgs),
    VoiceStateDelete(ChannelScopedArgs),
    VoiceSettingsUpdate,
    VoiceConnectionStatus,
    SpeakingStart(ChannelScopedArgs),
    SpeakingStop(ChannelScopedArgs),
    MessageCreate(ChannelScopedArgs),
    MessageUpdate(ChannelScopedArgs),
    MessageDelete(ChannelScopedArgs),
    NotificationCreate,
    ActivityJoin,
    ActivitySpectate,
    ActivityJoinRequest,
}

impl SubscriptionArgs {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::GuildStatus(_) => EventKind::GuildStatus,
            Self::GuildCreate => EventKind::GuildCreate,
            Self::ChannelCreate => EventKind::ChannelCreate,
            Self::VoiceChannelSelect => EventKind::VoiceChannelSelect,
            Self::VoiceStateCreate(_) => EventKind::VoiceStateCreate,
            Self::VoiceStateUpdate(_) => EventKind::VoiceStateUpdate,
            Self::VoiceStateDelete(_) => EventKind::VoiceStateDelete,
            Self::VoiceSettingsUpdate => EventKind::VoiceSettingsUpdate,
            Self::VoiceConnectionStatus => EventKind::VoiceConnectionStatus,
            Self::SpeakingStart(_) => EventKind::SpeakingStart,
            Self::SpeakingStop(_) => EventKind::SpeakingStop,
            Self::MessageCreate(_) => EventKind::MessageCreate,
            Self::MessageUpdate(_) => EventKind::MessageUpdate,
            Self::MessageDelete(_) => EventKind::MessageDelete,
            Self::NotificationCreate => EventKind::NotificationCreate,
            Self::ActivityJoin => EventKind::ActivityJoin,
            Self::ActivitySpectate => EventKind::ActivitySpectate,
            Self::ActivityJoinRequest => EventKind::ActivityJoinRequest,
        }
    }
}

// ---------------------------------------------------------------------------
// Per-event data shapes
// ---------------------------------------------------------------------------

/// Connection properties delivered with `READY`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub cdn_host: String,
    pub api_endpoint: String,
    pub environment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadyData {
    /// Protocol version; currently always 1.
    pub v: u32,
    pub config: ServerConfig,
    pub user: PartialUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildStatusData {
    pub guild: PartialGuild,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildCreateData {
    pub id: Snowflake,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelCreateData {
    pub id: Snowflake,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: harmony_domain_types::ChannelType,
}

/// Body of `VOICE_CHANNEL_SELECT`. Both ids are null when the user leaves
/// voice entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceChannelSelectData {
    pub channel_id: Option<Snowflake>,
    pub guild_id: Option<Snowflake>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum VoiceConnectionState {
    Disconnected,
    AwaitingEndpoint,
    Authenticating,
    Connecting,
    Connected,
    VoiceDisconnected,
    VoiceConnecting,
    VoiceConnected,
    NoRoute,
    IceChecking,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceConnectionStatusData {
    pub state: VoiceConnectionState,
    pub hostname: String,
    /// Last 20 pings, most recent first.
    pub pings: Vec<f32>,
    pub average_ping: f32,
    pub last_ping: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakingData {
    pub user_id: Snowflake,
}

/// Body of the three `MESSAGE_*` events. For `MESSAGE_DELETE` only the
/// message `id` is meaningful; the rest of the object is zeroed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEventData {
    pub channel_id: Snowflake,
    pub message: Message,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationCreateData {
    pub channel_id: Snowflake,
    pub message: Message,
    /// CDN url of the notification icon.
    pub icon_url: url::Url,
    pub title: String,
    pub body: String,
}

/// Body of `ACTIVITY_JOIN` and `ACTIVITY_SPECTATE`: the opaque secret the
/// application exchanges for connection info.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySecretData {
    pub secret: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityJoinRequestData {
    pub user: PartialUser,
}

// ---------------------------------------------------------------------------
// Dispatch frame
// ---------------------------------------------------------------------------

/// Data union of every pushed event, keyed by `evt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "evt", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventData {
    Ready(ReadyData),
    /// Pushed when the server rejects something outside any one command's
    /// request/reply exchange.
    Error(ErrorData),
    GuildStatus(GuildStatusData),
    GuildCreate(GuildCreateData),
    ChannelCreate(ChannelCreateData),
    VoiceChannelSelect(VoiceChannelSelectData),
    VoiceStateCreate(VoiceStateItem),
    VoiceStateUpdate(VoiceStateItem),
    VoiceStateDelete(VoiceStateItem),
    VoiceSettingsUpdate(VoiceSettings),
    VoiceConnectionStatus(VoiceConnectionStatusData),
    SpeakingStart(SpeakingData),
    SpeakingStop(SpeakingData),
    MessageCreate(MessageEventData),
    MessageUpdate(MessageEventData),
    MessageDelete(MessageEventData),
    NotificationCreate(NotificationCreateData),
    ActivityJoin(ActivitySecretData),
    ActivitySpectate(ActivitySecretData),
    ActivityJoinRequest(ActivityJoinRequestData),
}

impl EventData {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Ready(_) => EventKind::Ready,
            Self::Error(_) => EventKind::Error,
            Self::GuildStatus(_) => EventKind::GuildStatus,
            Self::GuildCreate(_) => EventKind::GuildCreate,
            Self::ChannelCreate(_) => EventKind::ChannelCreate,
            Self::VoiceChannelSelect(_) => EventKind::VoiceChannelSelect,
            Self::VoiceStateCreate(_) => EventKind::VoiceStateCreate,
            Self::VoiceStateUpdate(_) => EventKind::VoiceStateUpdate,
            Self::VoiceStateDelete(_) => EventKind::VoiceStateDelete,
            Self::VoiceSettingsUpdate(_) => EventKind::VoiceSettingsUpdate,
            Self::VoiceConnectionStatus(_) => EventKind::VoiceConnectionStatus,
            Self::SpeakingStart(_) => EventKind::SpeakingStart,
            Self::SpeakingStop(_) => EventKind::SpeakingStop,
            Self::MessageCreate(_) => EventKind::MessageCreate,
            Self::MessageUpdate(_) => EventKind::MessageUpdate,
            Self::MessageDelete(_) => EventKind::MessageDelete,
            Self::NotificationCreate(_) => EventKind::NotificationCreate,
            Self::ActivityJoin(_) => EventKind::ActivityJoin,
            Self::ActivitySpectate(_) => EventKind::ActivitySpectate,
            Self::ActivityJoinRequest(_) => EventKind::ActivityJoinRequest,
        }
    }
}

/// A pushed event frame: `cmd` is always `DISPATCH` and there is no nonce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventFrame {
    pub cmd: DispatchTag,
    #[serde(flatten)]
    pub event: EventData,
}

/// The fixed `"DISPATCH"` value of `cmd` on event frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DispatchTag {
    #[default]
    #[serde(rename = "DISPATCH")]
    Dispatch,
}

impl EventFrame {
    pub fn new(event: EventData) -> Self {
        Self {
            cmd: DispatchTag::Dispatch,
            event,
        }
    }
}
