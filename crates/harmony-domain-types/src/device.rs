// Copyright 2025 the Harmony project developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Certified hardware device schemas, used by `SET_CERTIFIED_DEVICES`.

use serde::{Deserialize, Serialize};
use url::Url;

/// Hardware class of a certified device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    AudioInput,
    AudioOutput,
    VideoInput,
}

/// Device manufacturer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceVendor {
    pub name: String,
    pub url: Url,
}

/// Device model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceModel {
    pub name: String,
    pub url: Url,
}

/// A certified device reported by hardware integrations.
///
/// The trailing processing flags only make sense for `audioinput` devices
/// and are omitted otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertifiedDevice {
    #[serde(rename = "type")]
    pub kind: DeviceType,
    /// Windows UUID of the device.
    pub id: String,
    pub vendor: DeviceVendor,
    pub model: DeviceModel,
    /// UUIDs of related devices (e.g. the headset a mic belongs to).
    pub related: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub echo_cancellation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise_suppression: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_gain_control: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_mute: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_type_uses_lowercase_tags() {
        assert_eq!(
            serde_json::to_string(&DeviceType::AudioInput).unwrap(),
            "\"audioinput\""
        );
        assert_eq!(
            serde_json::to_string(&DeviceType::VideoInput).unwrap(),
            "\"videoinput\""
        );
    }
}
