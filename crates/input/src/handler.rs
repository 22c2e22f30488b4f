//! Key release synthesis for terminal environments.
//!
//! Most terminals report key presses (and auto-repeat) but never releases.
//! Held movement and spin keys still need a key-up, so any key that has not
//! been re-asserted within a timeout is released here.

use arrayvec::ArrayVec;

use crate::types::{InputEvent, Key};

/// Keys tracked at once; further presses are forwarded but not tracked
const MAX_HELD: usize = 8;

// Terminal auto-repeat typically starts after ~250ms; a shorter timeout would
// release and re-press a held key between the first press and the first repeat.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 300;

#[derive(Debug, Clone)]
pub struct KeyReleaseTracker {
    /// Held keys with the time since they were last asserted
    held: ArrayVec<(Key, u32), MAX_HELD>,
    key_release_timeout_ms: u32,
}

impl KeyReleaseTracker {
    pub fn new() -> Self {
        Self {
            held: ArrayVec::new(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.iter().any(|(k, _)| *k == key)
    }

    /// Record a game input event. Key-downs (re)start a key's timer, key-ups
    /// stop tracking it.
    pub fn observe(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(key) => {
                if let Some(entry) = self.held.iter_mut().find(|(k, _)| *k == key) {
                    entry.1 = 0;
                } else {
                    let _ = self.held.try_push((key, 0));
                }
            }
            InputEvent::KeyUp(key) => self.held.retain(|(k, _)| *k != key),
            _ => {}
        }
    }

    /// Advance timers and return key-ups for keys that timed out.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<InputEvent, MAX_HELD> {
        let mut released = ArrayVec::new();
        let timeout = self.key_release_timeout_ms;
        self.held.retain(|(key, age)| {
            *age = age.saturating_add(elapsed_ms);
            if *age > timeout {
                released.push(InputEvent::KeyUp(*key));
                false
            } else {
                true
            }
        });
        released
    }

    /// Release everything at once.
    pub fn release_all(&mut self) -> ArrayVec<InputEvent, MAX_HELD> {
        self.held
            .drain(..)
            .map(|(key, _)| InputEvent::KeyUp(key))
            .collect()
    }
}

impl Default for KeyReleaseTracker {
    fn default() -> Self {
        Self::new()
    }
}
