//! Input model: remote key codes, key events, and the key-to-command mapper.
//!
//! `KeyEvent` is what the host delivers for every press. `KeyMap` turns a
//! key-down into a semantic `KeyCommand`; everything it does not recognize
//! (including key-ups and the back key) comes back as `None` so the host can
//! fall through to its default key handling.

#[cfg(test)]
#[path = "keymap_test.rs"]
mod keymap_test;

use serde::{Deserialize, Serialize};

use crate::consts::{ACCEL_STEP_PX, BASE_STEP_PX, SEEK_SECONDS};

/// A key on the remote, as far as the engine cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
    DpadCenter,
    Enter,
    ButtonA,
    MediaPlayPause,
    MediaPlay,
    MediaPause,
    MediaStop,
    MediaNext,
    MediaFastForward,
    MediaRewind,
    /// Any other platform key code, passed through untouched.
    Other(i32),
}

impl KeyCode {
    /// Translate an Android `KeyEvent.KEYCODE_*` value.
    #[must_use]
    pub fn from_android(code: i32) -> Self {
        match code {
            19 => Self::DpadUp,
            20 => Self::DpadDown,
            21 => Self::DpadLeft,
            22 => Self::DpadRight,
            23 => Self::DpadCenter,
            66 => Self::Enter,
            85 => Self::MediaPlayPause,
            86 => Self::MediaStop,
            87 => Self::MediaNext,
            89 => Self::MediaRewind,
            90 => Self::MediaFastForward,
            96 => Self::ButtonA,
            126 => Self::MediaPlay,
            127 => Self::MediaPause,
            other => Self::Other(other),
        }
    }

    /// The directional component of this key, if any.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::DpadUp => Some(Direction::Up),
            Self::DpadDown => Some(Direction::Down),
            Self::DpadLeft => Some(Direction::Left),
            Self::DpadRight => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    #[default]
    Down,
    Up,
}

/// A raw key event from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub action: KeyAction,
    /// How many auto-repeats preceded this event while the key was held (0 for the first press).
    pub repeat_count: u32,
}

impl KeyEvent {
    /// A first key-down with no repeats.
    #[must_use]
    pub fn down(code: KeyCode) -> Self {
        Self { code, action: KeyAction::Down, repeat_count: 0 }
    }

    /// A held key-down after `repeat_count` auto-repeats.
    #[must_use]
    pub fn repeat(code: KeyCode, repeat_count: u32) -> Self {
        Self { code, action: KeyAction::Down, repeat_count }
    }

    #[must_use]
    pub fn up(code: KeyCode) -> Self {
        Self { code, action: KeyAction::Up, repeat_count: 0 }
    }
}

/// Screen direction of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector in container space (y grows downward).
    #[must_use]
    pub fn unit(self) -> (f64, f64) {
        match self {
            Self::Up => (0.0, -1.0),
            Self::Down => (0.0, 1.0),
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
        }
    }
}

/// Semantic command produced from a key-down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyCommand {
    /// Move the pointer `magnitude` container pixels in `direction`.
    Move { direction: Direction, magnitude: f64 },
    /// Click at the pointer (or the focused element, per configuration).
    Activate,
    ToggleFullscreen,
    PlayPause,
    Play,
    Pause,
    SeekForward(f64),
    SeekBackward(f64),
}

impl KeyCommand {
    /// Pointer delta carried by a `Move`, in container pixels.
    #[must_use]
    pub fn delta(self) -> Option<(f64, f64)> {
        match self {
            Self::Move { direction, magnitude } => {
                let (ux, uy) = direction.unit();
                Some((ux * magnitude, uy * magnitude))
            }
            _ => None,
        }
    }
}

/// Key-down to command translation with repeat acceleration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyMap {
    pub base_step_px: f64,
    pub accel_step_px: f64,
    pub seek_seconds: f64,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self { base_step_px: BASE_STEP_PX, accel_step_px: ACCEL_STEP_PX, seek_seconds: SEEK_SECONDS }
    }
}

impl KeyMap {
    /// Step length for a directional key held through `repeat_count` repeats.
    ///
    /// Grows linearly so short taps stay precise and a long hold can cross
    /// the whole viewport.
    #[must_use]
    pub fn step_for(&self, repeat_count: u32) -> f64 {
        self.base_step_px + f64::from(repeat_count) * self.accel_step_px
    }

    /// Map a key event to a command. Key-ups and unknown keys yield `None`.
    #[must_use]
    pub fn map(&self, event: &KeyEvent) -> Option<KeyCommand> {
        if event.action != KeyAction::Down {
            return None;
        }
        if let Some(direction) = event.code.direction() {
            return Some(KeyCommand::Move { direction, magnitude: self.step_for(event.repeat_count) });
        }
        match event.code {
            KeyCode::DpadCenter | KeyCode::Enter | KeyCode::ButtonA => Some(KeyCommand::Activate),
            KeyCode::MediaNext => Some(KeyCommand::ToggleFullscreen),
            KeyCode::MediaPlayPause => Some(KeyCommand::PlayPause),
            KeyCode::MediaPlay => Some(KeyCommand::Play),
            KeyCode::MediaPause | KeyCode::MediaStop => Some(KeyCommand::Pause),
            KeyCode::MediaFastForward => Some(KeyCommand::SeekForward(self.seek_seconds)),
            KeyCode::MediaRewind => Some(KeyCommand::SeekBackward(self.seek_seconds)),
            _ => None,
        }
    }
}
