// Copyright 2025 the Harmony project developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Payload validation
//!
//! Schema-level checks a client or server can run before acting on a frame:
//! envelope invariants on the generic [`Payload`], and per-command argument
//! constraints on the typed requests.

use thiserror::Error;
use validator::Validate;

use harmony_domain_types::Snowflake;

use crate::command::{CommandArgs, CommandKind, CommandRequest, SubscriptionRequest};
use crate::event::{EventKind, SubscriptionArgs};
use crate::payload::Payload;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid payload: {0}")]
    Schema(String),
    #[error("Constraint violation: {0}")]
    Constraint(#[from] validator::ValidationErrors),
}

fn require_snowflake(field: &'static str, id: &Snowflake) -> Result<(), ValidationError> {
    if id.is_well_formed() {
        Ok(())
    } else {
        Err(ValidationError::Schema(format!(
            "{field} is not a well-formed id: {:?}",
            id.0
        )))
    }
}

fn require_nonce(nonce: &str) -> Result<(), ValidationError> {
    if nonce.is_empty() {
        Err(ValidationError::Schema("nonce must be non-empty".into()))
    } else {
        Ok(())
    }
}

/// Validate a command request before sending it.
pub fn validate_command(request: &CommandRequest) -> Result<(), ValidationError> {
    require_nonce(&request.nonce)?;
    match &request.args {
        CommandArgs::Authorize(args) => {
            require_snowflake("client_id", &args.client_id)?;
            if args.scopes.is_empty() {
                return Err(ValidationError::Schema(
                    "AUTHORIZE requires at least one scope".into(),
                ));
            }
        }
        CommandArgs::Authenticate(args) => {
            if args.access_token.is_empty() {
                return Err(ValidationError::Schema(
                    "AUTHENTICATE requires an access_token".into(),
                ));
            }
        }
        CommandArgs::GetGuild(args) => require_snowflake("guild_id", &args.guild_id)?,
        CommandArgs::GetChannel(args) => require_snowflake("channel_id", &args.channel_id)?,
        CommandArgs::GetChannels(args) => require_snowflake("guild_id", &args.guild_id)?,
        CommandArgs::SetUserVoiceSettings(settings) => {
            require_snowflake("user_id", &settings.user_id)?;
            settings.validate()?;
        }
        CommandArgs::SelectVoiceChannel(args) => {
            if let Some(id) = &args.channel_id {
                require_snowflake("channel_id", id)?;
            }
        }
        CommandArgs::SelectTextChannel(args) => {
            if let Some(id) = &args.channel_id {
                require_snowflake("channel_id", id)?;
            }
        }
        CommandArgs::SetVoiceSettings(update) => update.validate()?,
        CommandArgs::SendActivityJoinInvite(args) | CommandArgs::CloseActivityRequest(args) => {
            require_snowflake("user_id", &args.user_id)?;
        }
        CommandArgs::GetGuilds(_)
        | CommandArgs::GetSelectedVoiceChannel(_)
        | CommandArgs::GetVoiceSettings(_)
        | CommandArgs::SetCertifiedDevices(_)
        | CommandArgs::SetActivity(_) => {}
    }
    Ok(())
}

/// Validate a subscribe/unsubscribe request before sending it.
pub fn validate_subscription(request: &SubscriptionRequest) -> Result<(), ValidationError> {
    require_nonce(&request.nonce)?;
    match &request.subscription {
        SubscriptionArgs::GuildStatus(args) => require_snowflake("guild_id", &args.guild_id),
        SubscriptionArgs::VoiceStateCreate(args)
        | SubscriptionArgs::VoiceStateUpdate(args)
        | SubscriptionArgs::VoiceStateDelete(args)
        | SubscriptionArgs::SpeakingStart(args)
        | SubscriptionArgs::SpeakingStop(args)
        | SubscriptionArgs::MessageCreate(args)
        | SubscriptionArgs::MessageUpdate(args)
        | SubscriptionArgs::MessageDelete(args) => {
            require_snowflake("channel_id", &args.channel_id)
        }
        _ => Ok(()),
    }
}

/// Check the envelope invariants on a generic [`Payload`].
///
/// Enforced shape, by `cmd`:
/// - `DISPATCH` carries an `evt` and never a `nonce`;
/// - `SUBSCRIBE`/`UNSUBSCRIBE` carry a `nonce` and the `evt` being
///   (un)subscribed;
/// - any other command carries a `nonce` and no `evt`, except `ERROR` on a
///   failed reply.
pub fn validate_payload(payload: &Payload) -> Result<(), ValidationError> {
    match payload.cmd {
        CommandKind::Dispatch => {
            if payload.evt.is_none() {
                return Err(ValidationError::Schema("DISPATCH requires an evt".into()));
            }
            if payload.nonce.is_some() {
                return Err(ValidationError::Schema(
                    "DISPATCH must not carry a nonce".into(),
                ));
            }
            return Ok(());
        }
        CommandKind::Subscribe | CommandKind::Unsubscribe => match payload.evt {
            None => {
                return Err(ValidationError::Schema(format!(
                    "{} requires an evt",
                    payload.cmd
                )));
            }
            Some(evt @ (EventKind::Ready | EventKind::Error)) => {
                return Err(ValidationError::Schema(format!(
                    "{evt} is not a subscribable event"
                )));
            }
            Some(_) => {}
        },
        _ => match payload.evt {
            None | Some(EventKind::Error) => {}
            Some(evt) => {
                return Err(ValidationError::Schema(format!(
                    "{} must not carry evt {evt}",
                    payload.cmd
                )));
            }
        },
    }
    // Everything except DISPATCH is half of a request/reply exchange and
    // needs the correlation token.
    if payload.nonce.is_none() {
        return Err(ValidationError::Schema(format!(
            "{} requires a nonce",
            payload.cmd
        )));
    }
    Ok(())
}
