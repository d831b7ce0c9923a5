// Copyright 2025 the Harmony project developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Manager traits
//!
//! The embedded runtime exposes one manager per feature area. Completion is
//! asynchronous but callback-based, not future-based: a call enqueues work
//! and its [`SdkCallback`] fires from a later [`EmbeddedSdk::run_callbacks`]
//! on the host's own loop, so no manager call ever re-enters the host.
//!
//! Getter methods (`is_self_mute`, `get_local_volume`, ...) read cached
//! state synchronously and fail with [`SdkError::NotFetched`] until the
//! runtime has populated it.

use harmony_domain_types::{Activity, Snowflake, User};

use crate::error::{SdkError, SdkResult};
use crate::log::{LogHook, SdkLogLevel};

/// Completion callback for an asynchronous manager call.
pub type SdkCallback<T> = Box<dyn FnOnce(SdkResult<T>) + Send>;

/// Reply to an incoming activity join request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum JoinRequestReply {
    No = 0,
    Yes = 1,
    Ignore = 2,
}

/// Which action an overlay invite is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ActivityActionType {
    Join = 1,
    Spectate = 2,
}

/// Voice input trigger mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    VoiceActivity,
    /// Push-to-talk bound to the given shortcut combo, e.g. `"shift + p"`.
    PushToTalk { shortcut: String },
}

/// Rich-presence and join/spectate flow.
pub trait ActivityManager {
    fn update_activity(&mut self, activity: Activity, callback: SdkCallback<()>);
    fn clear_activity(&mut self, callback: SdkCallback<()>);
    /// Answer a `JoinRequest` from `user_id`.
    fn send_request_reply(
        &mut self,
        user_id: Snowflake,
        reply: JoinRequestReply,
        callback: SdkCallback<()>,
    );
    /// Accept an activity invite previously received from `user_id`.
    fn accept_invite(&mut self, user_id: Snowflake, callback: SdkCallback<()>);
}

/// Identity of the connected user and user lookups.
pub trait UserManager {
    /// The user the runtime is logged in as. [`SdkError::NotFetched`] until
    /// the first connect completes.
    fn current_user(&self) -> SdkResult<User>;
    fn get_user(&mut self, user_id: Snowflake, callback: SdkCallback<User>);
}

/// In-game overlay control.
pub trait OverlayManager {
    fn is_enabled(&self) -> bool;
    fn is_locked(&self) -> bool;
    fn set_locked(&mut self, locked: bool, callback: SdkCallback<()>);
    fn open_activity_invite(&mut self, action: ActivityActionType, callback: SdkCallback<()>);
    fn open_voice_settings(&mut self, callback: SdkCallback<()>);
}

/// Local voice controls; all reads are of locally cached state.
pub trait VoiceManager {
    fn input_mode(&self) -> SdkResult<InputMode>;
    fn set_input_mode(&mut self, mode: InputMode, callback: SdkCallback<()>);
    fn is_self_mute(&self) -> SdkResult<bool>;
    fn set_self_mute(&mut self, mute: bool) -> SdkResult<()>;
    fn is_self_deaf(&self) -> SdkResult<bool>;
    fn set_self_deaf(&mut self, deaf: bool) -> SdkResult<()>;
    fn is_local_mute(&self, user_id: &Snowflake) -> SdkResult<bool>;
    fn set_local_mute(&mut self, user_id: Snowflake, mute: bool) -> SdkResult<()>;
    /// Local playback volume for one user, `0..=200`.
    fn local_volume(&self, user_id: &Snowflake) -> SdkResult<u8>;
    fn set_local_volume(&mut self, user_id: Snowflake, volume: u8) -> SdkResult<()>;
}

/// Root handle of the embedded runtime.
pub trait EmbeddedSdk {
    fn activity(&mut self) -> &mut dyn ActivityManager;
    fn user(&mut self) -> &mut dyn UserManager;
    fn overlay(&mut self) -> &mut dyn OverlayManager;
    fn voice(&mut self) -> &mut dyn VoiceManager;

    /// Drain pending completions, firing their callbacks on this thread.
    ///
    /// Must be pumped regularly (typically once per frame). Returns
    /// [`SdkError::NotRunning`] once the runtime has gone away, after which
    /// no further callbacks will fire.
    fn run_callbacks(&mut self) -> SdkResult<()>;

    /// Route the runtime's own log lines at `min_level` and above to `hook`.
    fn set_log_hook(&mut self, min_level: SdkLogLevel, hook: LogHook);
}

// The traits are only useful behind a pointer; keep them object-safe.
const _: () = {
    const fn assert_object_safe<T: ?Sized>() {}
    assert_object_safe::<dyn ActivityManager>();
    assert_object_safe::<dyn UserManager>();
    assert_object_safe::<dyn OverlayManager>();
    assert_object_safe::<dyn VoiceManager>();
    assert_object_safe::<dyn EmbeddedSdk>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Test double that queues completions until pumped, the way the real
    /// runtime does.
    #[derive(Default)]
    struct QueueingActivityManager {
        pending: VecDeque<SdkCallback<()>>,
    }

    impl ActivityManager for QueueingActivityManager {
        fn update_activity(&mut self, _activity: Activity, callback: SdkCallback<()>) {
            self.pending.push_back(callback);
        }

        fn clear_activity(&mut self, callback: SdkCallback<()>) {
            self.pending.push_back(callback);
        }

        fn send_request_reply(
            &mut self,
            _user_id: Snowflake,
            _reply: JoinRequestReply,
            callback: SdkCallback<()>,
        ) {
            self.pending.push_back(callback);
        }

        fn accept_invite(&mut self, _user_id: Snowflake, callback: SdkCallback<()>) {
            self.pending.push_back(callback);
        }
    }

    impl QueueingActivityManager {
        fn pump(&mut self) {
            while let Some(callback) = self.pending.pop_front() {
                callback(Ok(()));
            }
        }
    }

    #[test]
    fn callbacks_fire_only_when_pumped() {
        use std::sync::atomic::{AtomicU32, Ordering};
        use std::sync::Arc;

        let completed = Arc::new(AtomicU32::new(0));
        let mut manager = QueueingActivityManager::default();

        for _ in 0..3 {
            let completed = Arc::clone(&completed);
            manager.update_activity(
                Activity::default(),
                Box::new(move |result| {
                    assert!(result.is_ok());
                    completed.fetch_add(1, Ordering::SeqCst);
                }),
            );
        }
        assert_eq!(completed.load(Ordering::SeqCst), 0);

        manager.pump();
        assert_eq!(completed.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn callback_surfaces_sdk_errors() {
        let mut manager = QueueingActivityManager::default();
        manager.clear_activity(Box::new(|result| {
            assert_eq!(result, Err(SdkError::NotRunning));
        }));
        // Fail the queued call the way a dead runtime would.
        while let Some(callback) = manager.pending.pop_front() {
            callback(Err(SdkError::NotRunning));
        }
    }
}
