// Copyright 2025 the Harmony project developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SDK log hook
//!
//! The embedded runtime emits its own diagnostic lines; hosts register a
//! hook to receive them instead of losing them to the runtime's stderr.

/// Severity of an SDK-emitted log line, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SdkLogLevel {
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

/// Receiver for SDK-emitted log lines.
pub type LogHook = Box<dyn FnMut(SdkLogLevel, &str) + Send>;

/// A [`LogHook`] that forwards SDK log lines to `tracing` at the mapped
/// level, under the `harmony_sdk` target.
pub fn tracing_log_hook() -> LogHook {
    Box::new(|level, message| match level {
        SdkLogLevel::Error => tracing::error!(target: "harmony_sdk", "{message}"),
        SdkLogLevel::Warn => tracing::warn!(target: "harmony_sdk", "{message}"),
        SdkLogLevel::Info => tracing::info!(target: "harmony_sdk", "{message}"),
        SdkLogLevel::Debug => tracing::debug!(target: "harmony_sdk", "{message}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_order_by_severity() {
        assert!(SdkLogLevel::Error < SdkLogLevel::Debug);
        assert_eq!(SdkLogLevel::Warn.to_string(), "warn");
    }

    #[test]
    fn tracing_hook_accepts_all_levels() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let mut hook = tracing_log_hook();
            hook(SdkLogLevel::Error, "connection dropped");
            hook(SdkLogLevel::Debug, "pumping callbacks");
        });
    }
}
