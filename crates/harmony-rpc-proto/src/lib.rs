// Copyright 2025 the Harmony project developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Harmony local RPC payload schemas
//!
//! The local RPC socket speaks JSON frames with a fixed envelope: a `cmd`
//! discriminant, an optional `nonce` correlation token, an optional `evt`
//! discriminant, and `args`/`data` bodies whose shape the discriminants
//! determine. This crate is the contract for those frames: the closed
//! command and event enumerations, one payload struct per command and
//! event, the tagged unions tying them together, the numeric error and
//! close codes, and validation for the envelope invariants. It carries no
//! transport or connection state.

pub mod codes;
pub mod command;
pub mod event;
pub mod payload;
pub mod validation;

pub use codes::{RpcCloseCode, RpcErrorCode};
pub use command::{
    CommandArgs, CommandData, CommandKind, CommandRequest, CommandResponse, ErrorData,
    ErrorResponse, ResponseFrame, RpcChannel, SubscribeOp, SubscriptionAck, SubscriptionRequest,
    UserVoiceSettings, VoiceSettings, VoiceSettingsUpdate,
};
pub use event::{EventData, EventFrame, EventKind, SubscriptionArgs};
pub use payload::Payload;
pub use validation::{validate_command, validate_payload, validate_subscription, ValidationError};
