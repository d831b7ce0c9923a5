// Copyright 2025 the Harmony project developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command payload shapes
//!
//! Commands are the request/response half of the protocol: every request
//! carries a caller-generated `nonce` and the reply echoes it. The `cmd`
//! string selects both the `args` shape accepted and the `data` shape
//! returned, which is what the tagged unions below pin down.

use serde::{Deserialize, Serialize};
use validator::Validate;

use harmony_domain_types::{
    Activity, CertifiedDevice, ChannelType, GuildMember, Message, Pan, PartialChannel,
    PartialGuild, PartialUser, Snowflake, VoiceStateItem,
};

use crate::codes::RpcErrorCode;
use crate::event::{EventKind, SubscriptionArgs};

/// Closed enumeration of the `cmd` discriminant.
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
pub enum CommandKind {
    /// Carrier of every subscribed-event push; see [`crate::event`].
    Dispatch,
    Authorize,
    Authenticate,
    GetGuild,
    GetGuilds,
    GetChannel,
    GetChannels,
    Subscribe,
    Unsubscribe,
    SetUserVoiceSettings,
    SelectVoiceChannel,
    GetSelectedVoiceChannel,
    SelectTextChannel,
    GetVoiceSettings,
    SetVoiceSettings,
    SetCertifiedDevices,
    SetActivity,
    SendActivityJoinInvite,
    CloseActivityRequest,
}

// ---------------------------------------------------------------------------
// Per-command argument shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizeArgs {
    pub client_id: Snowflake,
    /// OAuth2 scopes to authorize.
    pub scopes: Vec<String>,
    /// One-time use token issued out of band; skips the authorize dialog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc_token: Option<String>,
    /// Username to create a guest account with when no user is logged in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticateArgs {
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetGuildArgs {
    pub guild_id: Snowflake,
    /// Seconds to wait before timing out server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GetGuildsArgs {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetChannelArgs {
    pub channel_id: Snowflake,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetChannelsArgs {
    pub guild_id: Snowflake,
}

/// Args and data of `SET_USER_VOICE_SETTINGS`: local overrides for how one
/// other user sounds. Omitted fields keep their current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserVoiceSettings {
    pub user_id: Snowflake,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan: Option<Pan>,
    /// Playback volume, `0..=200` (100 is unity gain).
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(max = 200, message = "Volume must be at most 200"))]
    pub volume: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mute: Option<bool>,
}

/// Args of `SELECT_VOICE_CHANNEL`. A null `channel_id` means "leave the
/// current voice channel" — it is not the same request as omitting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectVoiceChannelArgs {
    pub channel_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    /// Required to move a user already in another voice channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GetSelectedVoiceChannelArgs {}

/// Args of `SELECT_TEXT_CHANNEL`; null deselects, like the voice variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectTextChannelArgs {
    pub channel_id: Option<Snowflake>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GetVoiceSettingsArgs {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetCertifiedDevicesArgs {
    pub devices: Vec<CertifiedDevice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetActivityArgs {
    /// Process id of the application setting the activity.
    pub pid: u32,
    pub activity: Activity,
}

/// Args of both `SEND_ACTIVITY_JOIN_INVITE` and `CLOSE_ACTIVITY_REQUEST`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityUserArgs {
    pub user_id: Snowflake,
}

// ---------------------------------------------------------------------------
// Voice settings shapes (GET/SET_VOICE_SETTINGS, VOICE_SETTINGS_UPDATE)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioDevice {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettingsInput {
    pub device_id: String,
    /// Input volume, `0..=100`.
    pub volume: f32,
    /// Read-only list of the devices the client can see.
    pub available_devices: Vec<AudioDevice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettingsOutput {
    pub device_id: String,
    /// Output volume, `0..=200`.
    pub volume: f32,
    pub available_devices: Vec<AudioDevice>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum VoiceModeType {
    PushToTalk,
    VoiceActivity,
}

/// Key class of a shortcut combo entry, numeric on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
#[repr(u8)]
pub enum KeyType {
    KeyboardKey = 0,
    MouseButton = 1,
    KeyboardModifierKey = 2,
    GamepadButton = 3,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutKeyCombo {
    #[serde(rename = "type")]
    pub kind: KeyType,
    pub code: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct VoiceSettingsMode {
    #[serde(rename = "type")]
    pub kind: VoiceModeType,
    /// Use automatically detected voice activity threshold.
    pub auto_threshold: bool,
    /// Manual threshold in dB, `-100.0..=0.0`.
    #[validate(range(min = -100.0, max = 0.0, message = "Threshold must be in -100..=0"))]
    pub threshold: f32,
    pub shortcut: Vec<ShortcutKeyCombo>,
    /// Push-to-talk release delay in milliseconds, `0.0..=2000.0`.
    #[validate(range(min = 0.0, max = 2000.0, message = "Delay must be in 0..=2000"))]
    pub delay: f32,
}

/// Full voice settings snapshot, as returned by `GET_VOICE_SETTINGS` and
/// pushed by `VOICE_SETTINGS_UPDATE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct VoiceSettings {
    pub input: VoiceSettingsInput,
    pub output: VoiceSettingsOutput,
    #[validate(nested)]
    pub mode: VoiceSettingsMode,
    pub automatic_gain_control: bool,
    pub echo_cancellation: bool,
    pub noise_suppression: bool,
    pub qos: bool,
    pub silence_warning: bool,
    pub deaf: bool,
    pub mute: bool,
}

/// Partial device group for [`VoiceSettingsUpdate`]; `available_devices`
/// is read-only and therefore not settable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VoiceDeviceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f32>,
}

/// Args of `SET_VOICE_SETTINGS`: every field optional, omitted fields are
/// left untouched. The reply carries the resulting full [`VoiceSettings`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, Default)]
pub struct VoiceSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<VoiceDeviceUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<VoiceDeviceUpdate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub mode: Option<VoiceSettingsMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_gain_control: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub echo_cancellation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_suppression: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qos: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silence_warning: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deaf: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mute: Option<bool>,
}

// ---------------------------------------------------------------------------
// Per-command data shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizeData {
    /// OAuth2 authorization code to exchange for a token.
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuth2Application {
    pub id: Snowflake,
    pub name: String,
    pub description: String,
    /// Icon hash; null when the application has none.
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rpc_origins: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticateData {
    pub application: OAuth2Application,
    pub expires: chrono::DateTime<chrono::Utc>,
    pub user: PartialUser,
    pub scopes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetGuildData {
    pub id: Snowflake,
    pub name: String,
    pub icon_url: Option<url::Url>,
    pub members: Vec<GuildMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetGuildsData {
    pub guilds: Vec<PartialGuild>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetChannelsData {
    pub channels: Vec<PartialChannel>,
}

/// Full channel snapshot returned by `GET_CHANNEL` and the select-channel
/// commands. Voice fields are zeroed for text channels and vice versa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcChannel {
    pub id: Snowflake,
    /// Absent for direct message channels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChannelType,
    pub topic: String,
    pub bitrate: u32,
    pub user_limit: u32,
    pub position: u32,
    pub voice_states: Vec<VoiceStateItem>,
    pub messages: Vec<Message>,
}

/// Reply body of `SUBSCRIBE` and `UNSUBSCRIBE`: just the event acknowledged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionAck {
    pub evt: EventKind,
}

/// Body of an `ERROR` reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorData {
    pub code: RpcErrorCode,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Tagged unions
// ---------------------------------------------------------------------------

/// Argument union of every plain command, keyed by `cmd`.
///
/// `SUBSCRIBE`/`UNSUBSCRIBE` are not listed: their args are keyed by `evt`
/// and live in [`SubscriptionRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", content = "args", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandArgs {
    Authorize(AuthorizeArgs),
    Authenticate(AuthenticateArgs),
    GetGuild(GetGuildArgs),
    GetGuilds(GetGuildsArgs),
    GetChannel(GetChannelArgs),
    GetChannels(GetChannelsArgs),
    SetUserVoiceSettings(UserVoiceSettings),
    SelectVoiceChannel(SelectVoiceChannelArgs),
    GetSelectedVoiceChannel(GetSelectedVoiceChannelArgs),
    SelectTextChannel(SelectTextChannelArgs),
    GetVoiceSettings(GetVoiceSettingsArgs),
    SetVoiceSettings(VoiceSettingsUpdate),
    SetCertifiedDevices(SetCertifiedDevicesArgs),
    SetActivity(SetActivityArgs),
    SendActivityJoinInvite(ActivityUserArgs),
    CloseActivityRequest(ActivityUserArgs),
}

impl CommandArgs {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Authorize(_) => CommandKind::Authorize,
            Self::Authenticate(_) => CommandKind::Authenticate,
            Self::GetGuild(_) => CommandKind::GetGuild,
            Self::GetGuilds(_) => CommandKind::GetGuilds,
            Self::GetChannel(_) => CommandKind::GetChannel,
            Self::GetChannels(_) => CommandKind::GetChannels,
            Self::SetUserVoiceSettings(_) => CommandKind::SetUserVoiceSettings,
            Self::SelectVoiceChannel(_) => CommandKind::SelectVoiceChannel,
            Self::GetSelectedVoiceChannel(_) => CommandKind::GetSelectedVoiceChannel,
            Self::SelectTextChannel(_) => CommandKind::SelectTextChannel,
            Self::GetVoiceSettings(_) => CommandKind::GetVoiceSettings,
            Self::SetVoiceSettings(_) => CommandKind::SetVoiceSettings,
            Self::SetCertifiedDevices(_) => CommandKind::SetCertifiedDevices,
            Self::SetActivity(_) => CommandKind::SetActivity,
            Self::SendActivityJoinInvite(_) => CommandKind::SendActivityJoinInvite,
            Self::CloseActivityRequest(_) => CommandKind::CloseActivityRequest,
        }
    }
}

/// A plain command request: correlation token plus the `cmd`/`args` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRequest {
    pub nonce: String,
    #[serde(flatten)]
    pub args: CommandArgs,
}

/// `SUBSCRIBE`/`UNSUBSCRIBE` request: the event (and its scope args) to
/// (un)subscribe. The same args shape scopes every later push for the
/// subscription, even where the push body does not repeat it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    pub nonce: String,
    pub cmd: SubscribeOp,
    #[serde(flatten)]
    pub subscription: SubscriptionArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscribeOp {
    Subscribe,
    Unsubscribe,
}

/// Data union of every command reply, keyed by `cmd`.
///
/// The three select/get channel commands return `Option<RpcChannel>`: an
/// explicit `null` means "no channel selected" and is part of the contract,
/// not an omitted field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandData {
    Authorize(AuthorizeData),
    Authenticate(AuthenticateData),
    GetGuild(GetGuildData),
    GetGuilds(GetGuildsData),
    GetChannel(RpcChannel),
    GetChannels(GetChannelsData),
    Subscribe(SubscriptionAck),
    Unsubscribe(SubscriptionAck),
    SetUserVoiceSettings(UserVoiceSettings),
    SelectVoiceChannel(Option<RpcChannel>),
    GetSelectedVoiceChannel(Option<RpcChannel>),
    SelectTextChannel(Option<RpcChannel>),
    GetVoiceSettings(VoiceSettings),
    SetVoiceSettings(VoiceSettings),
    SetCertifiedDevices(()),
    SetActivity(Activity),
    SendActivityJoinInvite(()),
    CloseActivityRequest(()),
}

/// A successful command reply, echoing the request's nonce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub nonce: String,
    #[serde(flatten)]
    pub data: CommandData,
}

/// An `ERROR` reply to a command: keeps the original `cmd`, tags `evt` as
/// `ERROR`, and still echoes the nonce so the caller can correlate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub nonce: String,
    pub cmd: CommandKind,
    pub evt: ErrorTag,
    pub data: ErrorData,
}

/// The fixed `"ERROR"` value of `evt` on error replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorTag {
    #[serde(rename = "ERROR")]
    Error,
}

/// Either outcome of a command, as read off the socket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseFrame {
    // Error first: it is the more constrained shape (requires evt = ERROR).
    Error(ErrorResponse),
    Reply(CommandResponse),
}

// ---------------------------------------------------------------------------
// Request constructors
// ---------------------------------------------------------------------------

impl CommandRequest {
    pub fn new(nonce: impl Into<String>, args: CommandArgs) -> Self {
        Self {
            nonce: nonce.into(),
            args,
        }
    }

    pub fn authorize(nonce: impl Into<String>, args: AuthorizeArgs) -> Self {
        Self::new(nonce, CommandArgs::Authorize(args))
    }

    pub fn authenticate(nonce: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self::new(
            nonce,
            CommandArgs::Authenticate(AuthenticateArgs {
                access_token: access_token.into(),
            }),
        )
    }

    pub fn get_guild(nonce: impl Into<String>, guild_id: Snowflake, timeout: Option<u32>) -> Self {
        Self::new(
            nonce,
            CommandArgs::GetGuild(GetGuildArgs { guild_id, timeout }),
        )
    }

    pub fn get_guilds(nonce: impl Into<String>) -> Self {
        Self::new(nonce, CommandArgs::GetGuilds(GetGuildsArgs {}))
    }

    pub fn get_channel(nonce: impl Into<String>, channel_id: Snowflake) -> Self {
        Self::new(nonce, CommandArgs::GetChannel(GetChannelArgs { channel_id }))
    }

    pub fn get_channels(nonce: impl Into<String>, guild_id: Snowflake) -> Self {
        Self::new(nonce, CommandArgs::GetChannels(GetChannelsArgs { guild_id }))
    }

    pub fn set_user_voice_settings(nonce: impl Into<String>, settings: UserVoiceSettings) -> Self {
        Self::new(nonce, CommandArgs::SetUserVoiceSettings(settings))
    }

    pub fn select_voice_channel(
        nonce: impl Into<String>,
        channel_id: Option<Snowflake>,
        timeout: Option<u32>,
        force: Option<bool>,
    ) -> Self {
        Self::new(
            nonce,
            CommandArgs::SelectVoiceChannel(SelectVoiceChannelArgs {
                channel_id,
                timeout,
                force,
            }),
        )
    }

    pub fn get_selected_voice_channel(nonce: impl Into<String>) -> Self {
        Self::new(
            nonce,
            CommandArgs::GetSelectedVoiceChannel(GetSelectedVoiceChannelArgs {}),
        )
    }

    pub fn select_text_channel(
        nonce: impl Into<String>,
        channel_id: Option<Snowflake>,
        timeout: Option<u32>,
    ) -> Self {
        Self::new(
            nonce,
            CommandArgs::SelectTextChannel(SelectTextChannelArgs {
                channel_id,
                timeout,
            }),
        )
    }

    pub fn get_voice_settings(nonce: impl Into<String>) -> Self {
        Self::new(nonce, CommandArgs::GetVoiceSettings(GetVoiceSettingsArgs {}))
    }

    pub fn set_voice_settings(nonce: impl Into<String>, update: VoiceSettingsUpdate) -> Self {
        Self::new(nonce, CommandArgs::SetVoiceSettings(update))
    }

    pub fn set_certified_devices(
        nonce: impl Into<String>,
        devices: Vec<CertifiedDevice>,
    ) -> Self {
        Self::new(
            nonce,
            CommandArgs::SetCertifiedDevices(SetCertifiedDevicesArgs { devices }),
        )
    }

    pub fn set_activity(nonce: impl Into<String>, pid: u32, activity: Activity) -> Self {
        Self::new(nonce, CommandArgs::SetActivity(SetActivityArgs { pid, activity }))
    }

    pub fn send_activity_join_invite(nonce: impl Into<String>, user_id: Snowflake) -> Self {
        Self::new(
            nonce,
            CommandArgs::SendActivityJoinInvite(ActivityUserArgs { user_id }),
        )
    }

    pub fn close_activity_request(nonce: impl Into<String>, user_id: Snowflake) -> Self {
        Self::new(
            nonce,
            CommandArgs::CloseActivityRequest(ActivityUserArgs { user_id }),
        )
    }
}

impl SubscriptionRequest {
    pub fn subscribe(nonce: impl Into<String>, subscription: SubscriptionArgs) -> Self {
        Self {
            nonce: nonce.into(),
            cmd: SubscribeOp::Subscribe,
            subscription,
        }
    }

    pub fn unsubscribe(nonce: impl Into<String>, subscription: SubscriptionArgs) -> Self {
        Self {
            nonce: nonce.into(),
            cmd: SubscribeOp::Unsubscribe,
            subscription,
        }
    }
}
