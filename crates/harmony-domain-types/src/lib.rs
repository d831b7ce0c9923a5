// Copyright 2025 the Harmony project developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types for the Harmony platform contract crates
//!
//! This crate contains the resource schemas shared across the REST contract,
//! the local RPC payload catalogue, and the embedded SDK surface. Every type
//! mirrors the platform's documented wire format: field names and casing are
//! bit-exact, and all shapes are immutable values that compare structurally.
//!
//! Two flavours of "maybe" exist on the wire and are kept distinct here:
//! a plain nullable field is `Option<T>` serialized without skipping, while
//! a field that may be absent *or* null is `Option<Option<T>>` using
//! `serde_with::rust::double_option`.

pub mod activity;
pub mod channel;
pub mod device;
pub mod guild;
pub mod id;
pub mod message;
pub mod user;
pub mod voice;
pub mod webhook;

// Re-export commonly used types
pub use activity::*;
pub use channel::*;
pub use device::*;
pub use guild::*;
pub use id::Snowflake;
pub use message::*;
pub use user::*;
pub use voice::*;
pub use webhook::*;
