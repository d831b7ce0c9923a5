// Copyright 2025 the Harmony project developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Harmony embedded SDK surface
//!
//! The call signatures a native embedded-runtime binding exposes to game
//! and application hosts: per-feature manager traits, the callback-queue
//! contract, the numeric result-code taxonomy, and the log hook. This crate
//! declares the surface only; it links no native code and owns no runtime
//! state.

pub mod error;
pub mod log;
pub mod managers;

pub use error::{SdkError, SdkResult};
pub use log::{tracing_log_hook, LogHook, SdkLogLevel};
pub use managers::{
    ActivityActionType, ActivityManager, EmbeddedSdk, InputMode, JoinRequestReply, OverlayManager,
    SdkCallback, UserManager, VoiceManager,
};
