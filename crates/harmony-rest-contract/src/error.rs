// Copyright 2025 the Harmony project developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! REST error taxonomy
//!
//! The platform reports request failures as a JSON body with a numeric
//! `code` and a canonical `message`. The codes are an external contract:
//! they are sparse, the gaps are deliberate, and neither the numbers nor the
//! messages may drift. Ranges are reserved by category — 10000s unknown
//! resource, 20000s endpoint restricted (bots, write limits), 30000s limit
//! reached, 40000s request rejected, 50000s validation failure, 90001 and
//! 130000 platform-side blocks, 200000s content filter.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use strum::IntoEnumIterator;
use thiserror::Error;

/// Errors produced while interpreting or validating contract payloads.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// The consuming HTTP layer must treat codes outside the declared table
    /// as this fallback case rather than rejecting the response.
    #[error("unknown error code: {0}")]
    UnknownErrorCode(u32),

    #[error("invalid snowflake: {0:?}")]
    InvalidSnowflake(String),

    #[error("empty request: {0}")]
    EmptyRequest(&'static str),
}

/// JSON error response body returned alongside 4xx/5xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ApiErrorBody {
    pub code: u32,
    pub message: String,
}

impl ApiErrorBody {
    /// Resolve the numeric code against the declared taxonomy.
    pub fn kind(&self) -> Result<JsonErrorCode, ContractError> {
        JsonErrorCode::try_from(self.code)
    }
}

impl From<JsonErrorCode> for ApiErrorBody {
    fn from(code: JsonErrorCode) -> Self {
        Self {
            code: code as u32,
            message: code.message().to_owned(),
        }
    }
}

/// The platform's JSON error codes, bit-exact and never renumbered.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize_repr,
    Deserialize_repr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[repr(u32)]
pub enum JsonErrorCode {
    GeneralError = 0,

    UnknownAccount = 10001,
    UnknownApplication = 10002,
    UnknownChannel = 10003,
    UnknownGuild = 10004,
    UnknownIntegration = 10005,
    UnknownInvite = 10006,
    UnknownMember = 10007,
    UnknownMessage = 10008,
    UnknownPermissionOverwrite = 10009,
    UnknownProvider = 10010,
    UnknownRole = 10011,
    UnknownToken = 10012,
    UnknownUser = 10013,
    UnknownEmoji = 10014,
    UnknownWebhook = 10015,
    UnknownWebhookService = 10016,
    UnknownSession = 10020,
    UnknownBan = 10026,
    UnknownSku = 10027,
    UnknownStoreListing = 10028,
    UnknownEntitlement = 10029,
    UnknownBuild = 10030,
    UnknownLobby = 10031,
    UnknownBranch = 10032,
    UnknownStoreDirectoryLayout = 10033,
    UnknownRedistributable = 10036,
    UnknownGiftCode = 10038,
    UnknownGuildTemplate = 10057,
    UnknownInteraction = 10062,
    UnknownApplicationCommand = 10063,
    UnknownApplicationCommandPermissions = 10066,
    UnknownStageInstance = 10067,

    BotsCannotUseThisEndpoint = 20001,
    OnlyBotsCanUseThisEndpoint = 20002,
    ExplicitContentCannotBeSent = 20009,
    NotAuthorizedForApplication = 20012,
    SlowmodeRateLimited = 20016,
    OnlyAccountOwner = 20018,
    AnnouncementEditRateLimited = 20022,
    ChannelWriteRateLimited = 20028,

    MaximumGuilds = 30001,
    MaximumFriends = 30002,
    MaximumPins = 30003,
    MaximumRecipients = 30004,
    MaximumGuildRoles = 30005,
    MaximumWebhooks = 30007,
    MaximumEmojis = 30008,
    MaximumReactions = 30010,
    MaximumGuildChannels = 30013,
    MaximumAttachments = 30015,
    MaximumInvites = 30016,
    MaximumAnimatedEmojis = 30018,
    MaximumServerMembers = 30019,
    MaximumThreadParticipants = 30033,
    MaximumNonMemberBans = 30035,
    MaximumBanFetches = 30037,

    Unauthorized = 40001,
    AccountVerificationRequired = 40002,
    DirectMessagesTooFast = 40003,
    RequestEntityTooLarge = 40005,
    FeatureTemporarilyDisabled = 40006,
    UserBannedFromGuild = 40007,
    AlreadyCrossposted = 40033,
    ApplicationCommandNameExists = 40041,

    MissingAccess = 50001,
    InvalidAccountType = 50002,
    CannotExecuteOnDm = 50003,
    GuildWidgetDisabled = 50004,
    CannotEditAnotherUsersMessage = 50005,
    CannotSendEmptyMessage = 50006,
    CannotSendMessagesToUser = 50007,
    CannotSendMessagesInVoiceChannel = 50008,
    ChannelVerificationTooHigh = 50009,
    OAuth2ApplicationHasNoBot = 50010,
    OAuth2ApplicationLimitReached = 50011,
    InvalidOAuth2State = 50012,
    MissingPermissions = 50013,
    InvalidAuthenticationToken = 50014,
    NoteTooLong = 50015,
    InvalidBulkDeleteCount = 50016,
    MessagePinnedInWrongChannel = 50019,
    InviteCodeInvalidOrTaken = 50020,
    CannotExecuteOnSystemMessage = 50021,
    CannotExecuteOnChannelType = 50024,
    InvalidOAuth2AccessToken = 50025,
    MissingRequiredOAuth2Scope = 50026,
    InvalidWebhookToken = 50027,
    InvalidRole = 50028,
    InvalidRecipients = 50033,
    BulkDeleteMessageTooOld = 50034,
    InvalidFormBody = 50035,
    InviteAcceptedToGuildWithoutBot = 50036,
    InvalidApiVersion = 50041,
    FileUploadTooBig = 50045,
    InvalidFileUploaded = 50046,
    CannotSelfRedeemGift = 50054,
    PaymentSourceRequired = 50070,
    CannotDeleteCommunityRequiredChannel = 50074,
    InvalidStickerSent = 50081,

    ReactionBlocked = 90001,

    ApiResourceOverloaded = 130000,

    BlockedByAutomaticModeration = 200000,
    TitleBlockedByAutomaticModeration = 200001,
}

impl JsonErrorCode {
    /// The single canonical message for this code. The mapping is total over
    /// the declared codes and stable across lookups.
    pub const fn message(self) -> &'static str {
        match self {
            Self::GeneralError => "General error (such as a malformed request body, amongst other things)",

            Self::UnknownAccount => "Unknown account",
            Self::UnknownApplication => "Unknown application",
            Self::UnknownChannel => "Unknown channel",
            Self::UnknownGuild => "Unknown guild",
            Self::UnknownIntegration => "Unknown integration",
            Self::UnknownInvite => "Unknown invite",
            Self::UnknownMember => "Unknown member",
            Self::UnknownMessage => "Unknown message",
            Self::UnknownPermissionOverwrite => "Unknown permission overwrite",
            Self::UnknownProvider => "Unknown provider",
            Self::UnknownRole => "Unknown role",
            Self::UnknownToken => "Unknown token",
            Self::UnknownUser => "Unknown user",
            Self::UnknownEmoji => "Unknown emoji",
            Self::UnknownWebhook => "Unknown webhook",
            Self::UnknownWebhookService => "Unknown webhook service",
            Self::UnknownSession => "Unknown session",
            Self::UnknownBan => "Unknown ban",
            Self::UnknownSku => "Unknown SKU",
            Self::UnknownStoreListing => "Unknown Store Listing",
            Self::UnknownEntitlement => "Unknown entitlement",
            Self::UnknownBuild => "Unknown build",
            Self::UnknownLobby => "Unknown lobby",
            Self::UnknownBranch => "Unknown branch",
            Self::UnknownStoreDirectoryLayout => "Unknown store directory layout",
            Self::UnknownRedistributable => "Unknown redistributable",
            Self::UnknownGiftCode => "Unknown gift code",
            Self::UnknownGuildTemplate => "Unknown guild template",
            Self::UnknownInteraction => "Unknown interaction",
            Self::UnknownApplicationCommand => "Unknown application command",
            Self::UnknownApplicationCommandPermissions => "Unknown application command permissions",
            Self::UnknownStageInstance => "Unknown Stage Instance",

            Self::BotsCannotUseThisEndpoint => "Bots cannot use this endpoint",
            Self::OnlyBotsCanUseThisEndpoint => "Only bots can use this endpoint",
            Self::ExplicitContentCannotBeSent => "Explicit content cannot be sent to the desired recipient(s)",
            Self::NotAuthorizedForApplication => "You are not authorized to perform this action on this application",
            Self::SlowmodeRateLimited => "This action cannot be performed due to slowmode rate limit",
            Self::OnlyAccountOwner => "Only the owner of this account can perform this action",
            Self::AnnouncementEditRateLimited => "This message cannot be edited due to announcement rate limits",
            Self::ChannelWriteRateLimited => "The channel you are writing has hit the write rate limit",

            Self::MaximumGuilds => "Maximum number of guilds reached (100)",
            Self::MaximumFriends => "Maximum number of friends reached (1000)",
            Self::MaximumPins => "Maximum number of pins reached for the channel (50)",
            Self::MaximumRecipients => "Maximum number of recipients reached (10)",
            Self::MaximumGuildRoles => "Maximum number of guild roles reached (250)",
            Self::MaximumWebhooks => "Maximum number of webhooks reached (10)",
            Self::MaximumEmojis => "Maximum number of emojis reached",
            Self::MaximumReactions => "Maximum number of reactions reached (20)",
            Self::MaximumGuildChannels => "Maximum number of guild channels reached (500)",
            Self::MaximumAttachments => "Maximum number of attachments in a message reached (10)",
            Self::MaximumInvites => "Maximum number of invites reached (1000)",
            Self::MaximumAnimatedEmojis => "Maximum number of animated emojis reached",
            Self::MaximumServerMembers => "Maximum number of server members reached",
            Self::MaximumThreadParticipants => "Max number of thread participants has been reached",
            Self::MaximumNonMemberBans => "Maximum number of bans for non-guild members have been exceeded",
            Self::MaximumBanFetches => "Maximum number of bans fetches has been reached. Try again later",

            Self::Unauthorized => "Unauthorized. Provide a valid token and try again",
            Self::AccountVerificationRequired => "You need to verify your account in order to perform this action",
            Self::DirectMessagesTooFast => "You are opening direct messages too fast",
            Self::RequestEntityTooLarge => "Request entity too large. Try sending something smaller in size",
            Self::FeatureTemporarilyDisabled => "This feature has been temporarily disabled server-side",
            Self::UserBannedFromGuild => "The user is banned from this guild",
            Self::AlreadyCrossposted => "This message has already been crossposted",
            Self::ApplicationCommandNameExists => "An application command with that name already exists",

            Self::MissingAccess => "Missing access",
            Self::InvalidAccountType => "Invalid account type",
            Self::CannotExecuteOnDm => "Cannot execute action on a DM channel",
            Self::GuildWidgetDisabled => "Guild widget disabled",
            Self::CannotEditAnotherUsersMessage => "Cannot edit a message authored by another user",
            Self::CannotSendEmptyMessage => "Cannot send an empty message",
            Self::CannotSendMessagesToUser => "Cannot send messages to this user",
            Self::CannotSendMessagesInVoiceChannel => "Cannot send messages in a voice channel",
            Self::ChannelVerificationTooHigh => "Channel verification level is too high for you to gain access",
            Self::OAuth2ApplicationHasNoBot => "OAuth2 application does not have a bot",
            Self::OAuth2ApplicationLimitReached => "OAuth2 application limit reached",
            Self::InvalidOAuth2State => "Invalid OAuth2 state",
            Self::MissingPermissions => "You lack permissions to perform that action",
            Self::InvalidAuthenticationToken => "Invalid authentication token provided",
            Self::NoteTooLong => "Note was too long",
            Self::InvalidBulkDeleteCount => "Provided too few or too many messages to delete. Must provide at least 2 and fewer than 100 messages to delete",
            Self::MessagePinnedInWrongChannel => "A message can only be pinned to the channel it was sent in",
            Self::InviteCodeInvalidOrTaken => "Invite code was either invalid or taken",
            Self::CannotExecuteOnSystemMessage => "Cannot execute action on a system message",
            Self::CannotExecuteOnChannelType => "Cannot execute action on this channel type",
            Self::InvalidOAuth2AccessToken => "Invalid OAuth2 access token provided",
            Self::MissingRequiredOAuth2Scope => "Missing required OAuth2 scope",
            Self::InvalidWebhookToken => "Invalid webhook token provided",
            Self::InvalidRole => "Invalid role",
            Self::InvalidRecipients => "Invalid Recipient(s)",
            Self::BulkDeleteMessageTooOld => "A message provided was too old to bulk delete",
            Self::InvalidFormBody => "Invalid form body (returned for both application/json and multipart/form-data bodies), or invalid Content-Type provided",
            Self::InviteAcceptedToGuildWithoutBot => "An invite was accepted to a guild the application's bot is not in",
            Self::InvalidApiVersion => "Invalid API version provided",
            Self::FileUploadTooBig => "File uploaded exceeds the maximum size",
            Self::InvalidFileUploaded => "Invalid file uploaded",
            Self::CannotSelfRedeemGift => "Cannot self-redeem this gift",
            Self::PaymentSourceRequired => "Payment source required to redeem gift",
            Self::CannotDeleteCommunityRequiredChannel => "Cannot delete a channel required for Community guilds",
            Self::InvalidStickerSent => "Invalid sticker sent",

            Self::ReactionBlocked => "Reaction was blocked",

            Self::ApiResourceOverloaded => "API resource is currently overloaded. Try again a little later",

            Self::BlockedByAutomaticModeration => "Message was blocked by automatic moderation",
            Self::TitleBlockedByAutomaticModeration => "Title was blocked by automatic moderation",
        }
    }
}

impl TryFrom<u32> for JsonErrorCode {
    type Error = ContractError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::iter()
            .find(|code| *code as u32 == value)
            .ok_or(ContractError::UnknownErrorCode(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_has_exactly_one_stable_message() {
        for code in JsonErrorCode::iter() {
            let first = code.message();
            let second = code.message();
            assert!(!first.is_empty());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn codes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for code in JsonErrorCode::iter() {
            assert!(seen.insert(code as u32), "duplicate code {}", code as u32);
        }
    }

    #[test]
    fn unknown_invite_is_10006() {
        let code = JsonErrorCode::try_from(10006).unwrap();
        assert_eq!(code, JsonErrorCode::UnknownInvite);
        assert_eq!(code.message(), "Unknown invite");
    }

    #[test]
    fn unknown_code_falls_back() {
        match JsonErrorCode::try_from(99999) {
            Err(ContractError::UnknownErrorCode(99999)) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn error_body_round_trips_through_json() {
        let body = ApiErrorBody::from(JsonErrorCode::MissingAccess);
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"code":50001,"message":"Missing access"}"#);
        let parsed: ApiErrorBody = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, body);
        assert_eq!(parsed.kind().unwrap(), JsonErrorCode::MissingAccess);
    }
}
