// Copyright 2025 the Harmony project developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Voice state schemas
//!
//! [`VoiceState`] is the flag set the server tracks per connected user.
//! [`VoiceStateItem`] is the enriched shape the per-channel voice events
//! push: the flags plus the user, their display data, and local audio
//! settings.

use serde::{Deserialize, Serialize};

use crate::user::PartialUser;

/// Server-side voice flags for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceState {
    pub mute: bool,
    pub deaf: bool,
    pub self_mute: bool,
    pub self_deaf: bool,
    pub suppress: bool,
}

/// Stereo pan, each side in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pan {
    pub left: f32,
    pub right: f32,
}

/// One entry of a voice channel's member list, as pushed by the
/// `VOICE_STATE_CREATE`/`UPDATE`/`DELETE` events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceStateItem {
    pub voice_state: VoiceState,
    pub user: PartialUser,
    /// Display name in the channel's guild.
    pub nick: String,
    /// Local playback volume, `0..=200`.
    pub volume: u32,
    pub mute: bool,
    pub pan: Pan,
}
