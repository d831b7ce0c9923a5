// Copyright 2025 the Harmony project developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde_json::json;

use harmony_domain_types::Snowflake;
use harmony_rpc_proto::command::{GetGuildsArgs, SelectVoiceChannelArgs};
use harmony_rpc_proto::event::{ChannelScopedArgs, EventData, EventFrame, ReadyData, ServerConfig};
use harmony_rpc_proto::*;

fn snowflake(s: &str) -> Snowflake {
    Snowflake::from(s)
}

#[test]
fn get_guild_request_wire_shape() {
    let request = CommandRequest::get_guild("a1b2c3", snowflake("199737254929760256"), None);
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({
            "cmd": "GET_GUILD",
            "nonce": "a1b2c3",
            "args": { "guild_id": "199737254929760256" }
        })
    );

    let back: CommandRequest = serde_json::from_value(value).unwrap();
    assert_eq!(back, request);
}

#[test]
fn request_without_required_arg_is_rejected() {
    let result: Result<CommandRequest, _> = serde_json::from_value(json!({
        "cmd": "GET_GUILD",
        "nonce": "a1b2c3",
        "args": {}
    }));
    assert!(result.is_err());
}

#[test]
fn no_arg_command_serializes_empty_args() {
    let request = CommandRequest::get_guilds("n-1");
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["args"], json!({}));

    // An empty args object deserializes back to the same request.
    let back: CommandRequest = serde_json::from_value(value).unwrap();
    assert_eq!(back.args, CommandArgs::GetGuilds(GetGuildsArgs {}));
}

#[test]
fn leaving_voice_sends_explicit_null_channel() {
    let request = CommandRequest::select_voice_channel("n-2", None, None, Some(true));
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value["args"],
        json!({ "channel_id": null, "force": true })
    );
}

#[test]
fn nullable_result_round_trips_as_explicit_null() {
    let response = CommandResponse {
        nonce: "n-3".into(),
        data: CommandData::GetSelectedVoiceChannel(None),
    };
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(
        value,
        json!({
            "cmd": "GET_SELECTED_VOICE_CHANNEL",
            "nonce": "n-3",
            "data": null
        })
    );

    let back: CommandResponse = serde_json::from_value(value).unwrap();
    assert_eq!(back.data, CommandData::GetSelectedVoiceChannel(None));
}

#[test]
fn subscribe_request_wire_shape() {
    let request = SubscriptionRequest::subscribe(
        "n-4",
        SubscriptionArgs::MessageCreate(ChannelScopedArgs {
            channel_id: snowflake("199737254929760256"),
        }),
    );
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({
            "cmd": "SUBSCRIBE",
            "nonce": "n-4",
            "evt": "MESSAGE_CREATE",
            "args": { "channel_id": "199737254929760256" }
        })
    );
}

#[test]
fn global_subscription_omits_args() {
    let request = SubscriptionRequest::unsubscribe("n-5", SubscriptionArgs::VoiceSettingsUpdate);
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({
            "cmd": "UNSUBSCRIBE",
            "nonce": "n-5",
            "evt": "VOICE_SETTINGS_UPDATE"
        })
    );
}

#[test]
fn response_frame_distinguishes_error_from_reply() {
    let error: ResponseFrame = serde_json::from_value(json!({
        "cmd": "GET_GUILD",
        "nonce": "n-6",
        "evt": "ERROR",
        "data": { "code": 4003, "message": "Unknown guild" }
    }))
    .unwrap();
    match error {
        ResponseFrame::Error(err) => {
            assert_eq!(err.cmd, CommandKind::GetGuild);
            assert_eq!(err.data.code, RpcErrorCode::InvalidGuild);
            assert_eq!(err.nonce, "n-6");
        }
        ResponseFrame::Reply(_) => panic!("error frame parsed as a reply"),
    }

    let reply: ResponseFrame = serde_json::from_value(json!({
        "cmd": "GET_GUILDS",
        "nonce": "n-7",
        "data": { "guilds": [{ "id": "1", "name": "general" }] }
    }))
    .unwrap();
    assert!(matches!(
        reply,
        ResponseFrame::Reply(CommandResponse {
            data: CommandData::GetGuilds(_),
            ..
        })
    ));
}

#[test]
fn dispatch_frame_narrows_ready_data() {
    let frame: EventFrame = serde_json::from_value(json!({
        "cmd": "DISPATCH",
        "evt": "READY",
        "data": {
            "v": 1,
            "config": {
                "cdn_host": "cdn.example.com",
                "api_endpoint": "//api.example.com",
                "environment": "production"
            },
            "user": {
                "id": "53908232506183680",
                "username": "mason",
                "discriminator": "1337",
                "avatar": null
            }
        }
    }))
    .unwrap();
    assert_eq!(frame.event.kind(), EventKind::Ready);
    match frame.event {
        EventData::Ready(ready) => {
            assert_eq!(ready.v, 1);
            assert_eq!(ready.config.environment, "production");
            assert_eq!(ready.user.username, "mason");
        }
        other => panic!("unexpected event: {:?}", other.kind()),
    }
}

#[test]
fn dispatch_frame_serializes_with_dispatch_cmd() {
    let frame = EventFrame::new(EventData::Ready(ReadyData {
        v: 1,
        config: ServerConfig {
            cdn_host: "cdn.example.com".into(),
            api_endpoint: "//api.example.com".into(),
            environment: "production".into(),
        },
        user: harmony_domain_types::PartialUser {
            id: snowflake("53908232506183680"),
            username: "mason".into(),
            discriminator: "1337".into(),
            avatar: None,
        },
    }));
    let value = serde_json::to_value(&frame).unwrap();
    assert_eq!(value["cmd"], "DISPATCH");
    assert_eq!(value["evt"], "READY");
    assert!(value.get("nonce").is_none());
}

#[test]
fn generic_payload_accepts_any_frame() {
    let payload: Payload = serde_json::from_value(json!({
        "cmd": "SET_ACTIVITY",
        "nonce": "n-8",
        "args": { "pid": 9999, "activity": {} }
    }))
    .unwrap();
    assert_eq!(payload.cmd, CommandKind::SetActivity);
    assert!(payload.args.is_some());
    assert!(payload.evt.is_none());
    assert!(validate_payload(&payload).is_ok());
}

#[test]
fn dispatch_payload_requires_evt_and_no_nonce() {
    let mut payload = Payload {
        cmd: CommandKind::Dispatch,
        nonce: None,
        evt: Some(EventKind::GuildStatus),
        data: None,
        args: None,
    };
    assert!(validate_payload(&payload).is_ok());

    payload.nonce = Some("n-9".into());
    assert!(validate_payload(&payload).is_err());

    payload.nonce = None;
    payload.evt = None;
    assert!(validate_payload(&payload).is_err());
}

#[test]
fn command_payloads_require_a_nonce() {
    let mut payload = Payload {
        cmd: CommandKind::GetGuild,
        nonce: None,
        evt: None,
        data: None,
        args: None,
    };
    assert!(validate_payload(&payload).is_err());

    payload.nonce = Some("n-16".into());
    assert!(validate_payload(&payload).is_ok());

    // Subscriptions are request/reply exchanges too.
    payload.cmd = CommandKind::Subscribe;
    payload.evt = Some(EventKind::MessageCreate);
    payload.nonce = None;
    assert!(validate_payload(&payload).is_err());
}

#[test]
fn subscribe_payload_rejects_unsubscribable_events() {
    let payload = Payload {
        cmd: CommandKind::Subscribe,
        nonce: Some("n-10".into()),
        evt: Some(EventKind::Ready),
        data: None,
        args: None,
    };
    assert!(validate_payload(&payload).is_err());
}

#[test]
fn plain_command_payload_allows_error_evt_only() {
    let mut payload = Payload {
        cmd: CommandKind::GetGuild,
        nonce: Some("n-11".into()),
        evt: Some(EventKind::Error),
        data: None,
        args: None,
    };
    assert!(validate_payload(&payload).is_ok());

    payload.evt = Some(EventKind::MessageCreate);
    assert!(validate_payload(&payload).is_err());
}

#[test]
fn command_validation_rejects_malformed_ids() {
    let request = CommandRequest::get_channel("n-12", snowflake("not-an-id"));
    assert!(validate_command(&request).is_err());

    let request = CommandRequest::get_channel("n-12", snowflake("199737254929760256"));
    assert!(validate_command(&request).is_ok());
}

#[test]
fn command_validation_rejects_empty_nonce() {
    let request = CommandRequest::get_guilds("");
    assert!(validate_command(&request).is_err());
}

#[test]
fn user_voice_volume_is_capped() {
    let settings = UserVoiceSettings {
        user_id: snowflake("53908232506183680"),
        pan: None,
        volume: Some(250),
        mute: None,
    };
    let request = CommandRequest::set_user_voice_settings("n-13", settings.clone());
    assert!(validate_command(&request).is_err());

    let request = CommandRequest::set_user_voice_settings(
        "n-13",
        UserVoiceSettings {
            volume: Some(150),
            ..settings
        },
    );
    assert!(validate_command(&request).is_ok());
}

#[test]
fn authorize_requires_scopes() {
    let request = CommandRequest::authorize(
        "n-14",
        harmony_rpc_proto::command::AuthorizeArgs {
            client_id: snowflake("53908232506183680"),
            scopes: vec![],
            rpc_token: None,
            username: None,
        },
    );
    assert!(validate_command(&request).is_err());
}

#[test]
fn subscription_validation_checks_scope_ids() {
    let request = SubscriptionRequest::subscribe(
        "n-15",
        SubscriptionArgs::SpeakingStart(ChannelScopedArgs {
            channel_id: snowflake(""),
        }),
    );
    assert!(validate_subscription(&request).is_err());

    let request = SubscriptionRequest::subscribe("n-15", SubscriptionArgs::ActivityJoin);
    assert!(validate_subscription(&request).is_ok());
}

#[test]
fn select_args_preserve_null_vs_absent_timeout() {
    let args: SelectVoiceChannelArgs = serde_json::from_value(json!({
        "channel_id": "199737254929760256"
    }))
    .unwrap();
    assert!(args.timeout.is_none());
    assert!(args.force.is_none());
    let value = serde_json::to_value(&args).unwrap();
    assert!(value.get("timeout").is_none());
    assert!(value.get("force").is_none());
}
