//! A [`Host`] that writes every call it receives as a JSON line.

#[cfg(test)]
#[path = "recorder_test.rs"]
mod recorder_test;

use std::io::{self, Write};

use pointer::Host;
use pointer::bridge::{BridgeOp, BridgeReply, DocumentId};
use pointer::fullscreen::ViewId;
use pointer::geometry::Point;
use pointer::keymap::KeyCode;
use serde::Serialize;

/// One output line. Host calls first, then engine results the replay reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum Record<'a> {
    LoadUrl {
        url: &'a str,
    },
    EvaluateScript {
        op: BridgeOp,
        document: DocumentId,
        #[serde(skip_serializing_if = "Option::is_none")]
        script: Option<&'a str>,
    },
    GoBack,
    PresentCustomView {
        view: ViewId,
    },
    RemoveCustomView {
        view: ViewId,
    },
    CursorMoved {
        x: f64,
        y: f64,
    },
    Finish,
    Key {
        code: KeyCode,
        handled: bool,
    },
    Frame {
        x: f64,
        y: f64,
        animating: bool,
    },
    Reply {
        op: BridgeOp,
        reply: BridgeReply,
    },
    Dismissed {
        view: ViewId,
    },
}

pub struct RecordingHost<W: Write> {
    out: W,
    history: bool,
    full_scripts: bool,
    error: Option<io::Error>,
}

impl<W: Write> RecordingHost<W> {
    /// With `full_scripts` off, evaluations are logged by op only.
    #[must_use]
    pub fn new(out: W, full_scripts: bool) -> Self {
        Self { out, history: false, full_scripts, error: None }
    }

    /// What `can_go_back` answers from now on.
    pub fn set_history(&mut self, available: bool) {
        self.history = available;
    }

    /// Write one record. After the first write failure everything is
    /// dropped until [`Self::take_error`] reports it.
    pub fn record(&mut self, record: &Record<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = write_line(&mut self.out, record) {
            self.error = Some(err);
        }
    }

    /// Surface a write failure that happened inside a host callback.
    ///
    /// # Errors
    ///
    /// The first I/O error since the last call.
    pub fn take_error(&mut self) -> io::Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn write_line<W: Write>(out: &mut W, record: &Record<'_>) -> io::Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    out.write_all(b"\n")
}

impl<W: Write> Host for RecordingHost<W> {
    fn load_url(&mut self, url: &str) {
        self.record(&Record::LoadUrl { url });
    }

    fn evaluate_script(&mut self, op: BridgeOp, document: DocumentId, script: &str) {
        let script = self.full_scripts.then_some(script);
        self.record(&Record::EvaluateScript { op, document, script });
    }

    fn can_go_back(&self) -> bool {
        self.history
    }

    fn go_back(&mut self) {
        self.record(&Record::GoBack);
    }

    fn present_custom_view(&mut self, view: ViewId) {
        self.record(&Record::PresentCustomView { view });
    }

    fn remove_custom_view(&mut self, view: ViewId) {
        self.record(&Record::RemoveCustomView { view });
    }

    fn cursor_moved(&mut self, target: Point) {
        self.record(&Record::CursorMoved { x: target.x, y: target.y });
    }

    fn finish(&mut self) {
        self.record(&Record::Finish);
    }
}
