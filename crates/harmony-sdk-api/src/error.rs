// Copyright 2025 the Harmony project developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SDK result codes
//!
//! Every SDK entry point completes with one of these codes (or success).
//! The numeric values cross the FFI boundary and are fixed; the enum is
//! sparse on purpose and must never be renumbered.

use thiserror::Error;

/// Result alias used throughout the SDK surface.
pub type SdkResult<T> = Result<T, SdkError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, strum::EnumIter)]
#[repr(u32)]
pub enum SdkError {
    #[error("Service unavailable")]
    ServiceUnavailable = 1,
    #[error("Invalid SDK version")]
    InvalidVersion = 2,
    #[error("Failed to lock the local state file")]
    LockFailed = 3,
    #[error("Internal error")]
    InternalError = 4,
    #[error("Invalid payload")]
    InvalidPayload = 5,
    #[error("Invalid command")]
    InvalidCommand = 6,
    #[error("Invalid permissions")]
    InvalidPermissions = 7,
    #[error("Data not yet fetched")]
    NotFetched = 8,
    #[error("Not found")]
    NotFound = 9,
    #[error("A conflicting operation is already in flight")]
    Conflict = 10,
    #[error("Invalid secret")]
    InvalidSecret = 11,
    #[error("Invalid join secret")]
    InvalidJoinSecret = 12,
    #[error("No eligible activity")]
    NoEligibleActivity = 13,
    #[error("Invalid invite")]
    InvalidInvite = 14,
    #[error("Not authenticated")]
    NotAuthenticated = 15,
    #[error("Invalid access token")]
    InvalidAccessToken = 16,
    #[error("Application id mismatch")]
    ApplicationMismatch = 17,
    #[error("Invalid data url")]
    InvalidDataUrl = 18,
    #[error("Invalid base64")]
    InvalidBase64 = 19,
    #[error("Value not filtered")]
    NotFiltered = 20,
    #[error("Invalid filename")]
    InvalidFilename = 23,
    #[error("Invalid file size")]
    InvalidFileSize = 24,
    #[error("Client not installed")]
    NotInstalled = 26,
    #[error("Client not running")]
    NotRunning = 27,
    #[error("Insufficient buffer")]
    InsufficientBuffer = 28,
    #[error("Invalid guild")]
    InvalidGuild = 30,
    #[error("Invalid event")]
    InvalidEvent = 31,
    #[error("Invalid channel")]
    InvalidChannel = 32,
    #[error("Invalid origin")]
    InvalidOrigin = 33,
    #[error("Rate limited")]
    RateLimited = 34,
    #[error("OAuth2 error")]
    OAuth2Error = 35,
    #[error("Select channel timed out")]
    SelectChannelTimeout = 36,
    #[error("Get guild timed out")]
    GetGuildTimeout = 37,
    #[error("Force required to move between voice channels")]
    SelectVoiceForceRequired = 38,
    #[error("A capture shortcut is already listening")]
    CaptureShortcutAlreadyListening = 39,
    #[error("Invalid gift code")]
    InvalidGiftCode = 41,
    #[error("Transaction aborted")]
    TransactionAborted = 43,
}

impl SdkError {
    /// The numeric code as it crosses the FFI boundary.
    pub const fn code(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for SdkError {
    type Error = u32;

    fn try_from(code: u32) -> Result<Self, u32> {
        use strum::IntoEnumIterator;
        Self::iter().find(|e| e.code() == code).ok_or(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn codes_round_trip() {
        for error in SdkError::iter() {
            assert_eq!(SdkError::try_from(error.code()), Ok(error));
        }
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(SdkError::ServiceUnavailable.code(), 1);
        assert_eq!(SdkError::NotRunning.code(), 27);
        assert_eq!(SdkError::RateLimited.code(), 34);
    }

    #[test]
    fn unknown_code_is_reported_back() {
        assert_eq!(SdkError::try_from(9999), Err(9999));
        // Gaps in the table are unknown codes too.
        assert_eq!(SdkError::try_from(21), Err(21));
    }
}
