//! Session script format: one JSON object per line.
//!
//! ```text
//! {"event":"layout","width":1920,"height":1080}
//! {"event":"key","code":"dpad_down","at_ms":16}
//! {"event":"key","code":20,"repeat":3,"at_ms":120}
//! {"event":"bridge_result","op":"click","raw":"false"}
//! {"event":"bridge_result","op":"toggle_fullscreen","document":0,"raw":"\"entered\""}
//! ```

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use pointer::bridge::{BridgeOp, DocumentId};
use pointer::keymap::{KeyAction, KeyCode};
use serde::Deserialize;

/// One script line: an optional clock reading plus the event itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScriptLine {
    /// Sets the replay clock before the event is applied.
    #[serde(default)]
    pub at_ms: Option<f64>,
    #[serde(flatten)]
    pub event: ScriptEvent,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    Layout {
        width: u32,
        height: u32,
    },
    Dpr {
        value: f64,
    },
    Key {
        code: KeyInput,
        #[serde(default)]
        action: KeyAction,
        #[serde(default)]
        repeat: u32,
    },
    Tick {
        now_ms: f64,
    },
    PageFinished,
    BridgeResult {
        op: BridgeOp,
        /// Document the script ran in. Omitted means the current one.
        #[serde(default)]
        document: Option<DocumentId>,
        raw: String,
    },
    ShowCustomView {
        view: u64,
    },
    HideCustomView,
    Back,
    CanGoBack {
        value: bool,
    },
}

/// A key given either as a platform key code or by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum KeyInput {
    Android(i32),
    Named(KeyCode),
}

impl From<KeyInput> for KeyCode {
    fn from(input: KeyInput) -> Self {
        match input {
            KeyInput::Android(code) => KeyCode::from_android(code),
            KeyInput::Named(code) => code,
        }
    }
}

/// Parse a script line. Blank lines and `#` comments yield `None`.
///
/// # Errors
///
/// Returns the JSON error for a line that is not a valid event.
pub fn parse_line(line: &str) -> Result<Option<ScriptLine>, serde_json::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed).map(Some)
}
