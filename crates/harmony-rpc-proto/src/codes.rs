// Copyright 2025 the Harmony project developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! RPC error and close codes
//!
//! Like the REST taxonomy these are bit-exact external contract values:
//! sparse, gapped, never renumbered.

use serde_repr::{Deserialize_repr, Serialize_repr};

/// Error codes carried by `ERROR` payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u32)]
pub enum RpcErrorCode {
    UnknownError = 1000,
    InvalidPayload = 4000,
    InvalidCommand = 4002,
    InvalidGuild = 4003,
    InvalidEvent = 4004,
    InvalidChannel = 4005,
    InvalidPermissions = 4006,
    InvalidClientId = 4007,
    InvalidOrigin = 4008,
    InvalidToken = 4009,
    InvalidUser = 4010,
    OAuth2Error = 5000,
    SelectChannelTimedOut = 5001,
    GetGuildTimedOut = 5002,
    SelectVoiceForceRequired = 5003,
    CaptureShortcutAlreadyListening = 5004,
}

/// Codes the socket is closed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u16)]
pub enum RpcCloseCode {
    CloseNormal = 1000,
    CloseUnsupported = 1003,
    CloseAbnormal = 1006,
    InvalidClientId = 4000,
    InvalidOrigin = 4001,
    RateLimited = 4002,
    TokenRevoked = 4003,
    InvalidVersion = 4004,
    InvalidEncoding = 4005,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_serialize_as_bare_numbers() {
        assert_eq!(
            serde_json::to_string(&RpcErrorCode::InvalidPayload).unwrap(),
            "4000"
        );
        assert_eq!(
            serde_json::to_string(&RpcCloseCode::TokenRevoked).unwrap(),
            "4003"
        );
        let code: RpcErrorCode = serde_json::from_str("5002").unwrap();
        assert_eq!(code, RpcErrorCode::GetGuildTimedOut);
    }
}
