// Copyright 2025 the Harmony project developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic payload envelope
//!
//! Every frame on the socket is one of these. The typed unions in
//! [`crate::command`] and [`crate::event`] are the shapes clients should
//! work with; [`Payload`] is the supertype a transport can always fall back
//! to before it knows which side of the protocol a frame belongs to.
//!
//! Envelope invariants (checked by [`crate::validation::validate_payload`]):
//! `nonce` is present on command requests and their replies and absent on
//! subscribed-event pushes; `evt` is present on events and subscriptions and
//! absent on plain commands; the shape of `data` is fully determined by
//! `cmd`, and for `DISPATCH` by `evt`.

use serde::{Deserialize, Serialize};

use crate::command::CommandKind;
use crate::event::EventKind;

/// The untyped union of every command and event envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub cmd: CommandKind,
    /// Caller-generated correlation token, echoed verbatim in the reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evt: Option<EventKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<serde_json::Value>,
}
