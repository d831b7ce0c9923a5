// Copyright 2025 the Harmony project developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Channel resource schemas

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::id::Snowflake;

/// Channel kind, carried on the wire as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[repr(u8)]
pub enum ChannelType {
    GuildText = 0,
    Dm = 1,
    GuildVoice = 2,
    GroupDm = 3,
    GuildCategory = 4,
    GuildAnnouncement = 5,
}

/// Identity-level projection of a channel, as listed by `GET_CHANNELS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct PartialChannel {
    pub id: Snowflake,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChannelType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_type_is_numeric_on_the_wire() {
        let channel = PartialChannel {
            id: Snowflake::from("199737254929760256"),
            name: "general".to_owned(),
            kind: ChannelType::GuildVoice,
        };
        let json = serde_json::to_string(&channel).unwrap();
        assert_eq!(
            json,
            r#"{"id":"199737254929760256","name":"general","type":2}"#
        );
    }
}
