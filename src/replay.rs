//! Drive an [`Engine`] from a session script.

#[cfg(test)]
#[path = "replay_test.rs"]
mod replay_test;

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use pointer::fullscreen::ViewId;
use pointer::keymap::KeyEvent;
use pointer::{ConfigError, Engine, PointerConfig};

use crate::recorder::{Record, RecordingHost};
use crate::script::{ScriptEvent, ScriptLine, parse_line};

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("cannot open script {path}: {source}")]
    Open { path: String, source: io::Error },
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: invalid event: {source}")]
    Parse { line: usize, source: serde_json::Error },
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// A session in progress: the engine, its recording host and the replay clock.
pub struct Replay<W: Write> {
    engine: Engine<RecordingHost<W>>,
    clock_ms: f64,
    dismissed: Rc<RefCell<Vec<ViewId>>>,
}

impl<W: Write> Replay<W> {
    #[must_use]
    pub fn new(out: W, config: PointerConfig, full_scripts: bool) -> Self {
        Self {
            engine: Engine::new(RecordingHost::new(out, full_scripts), config),
            clock_ms: 0.0,
            dismissed: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Load the start page.
    ///
    /// # Errors
    ///
    /// Output write failures.
    pub fn start(&mut self) -> Result<(), ReplayError> {
        self.engine.start();
        Ok(self.engine.host_mut().take_error()?)
    }

    /// Apply one script line.
    ///
    /// # Errors
    ///
    /// Output write failures.
    pub fn apply(&mut self, line: ScriptLine) -> Result<(), ReplayError> {
        if let Some(at_ms) = line.at_ms {
            self.clock_ms = at_ms;
        }
        let now = self.clock_ms;
        match line.event {
            ScriptEvent::Layout { width, height } => self.engine.on_layout(width, height, now),
            ScriptEvent::Dpr { value } => self.engine.set_device_pixel_ratio(value),
            ScriptEvent::Key { code, action, repeat } => {
                let event = KeyEvent { code: code.into(), action, repeat_count: repeat };
                let handled = self.engine.on_key(&event, now);
                self.engine.host_mut().record(&Record::Key { code: event.code, handled });
            }
            ScriptEvent::Tick { now_ms } => {
                self.clock_ms = now_ms;
                let cursor = self.engine.tick(now_ms);
                let animating = self.engine.core.is_animating(now_ms);
                self.engine.host_mut().record(&Record::Frame { x: cursor.x, y: cursor.y, animating });
            }
            ScriptEvent::PageFinished => self.engine.on_page_finished(),
            ScriptEvent::BridgeResult { op, document, raw } => {
                let document = document.unwrap_or_else(|| self.engine.core.document());
                let reply = self.engine.on_bridge_result(op, document, &raw);
                self.engine.host_mut().record(&Record::Reply { op, reply });
            }
            ScriptEvent::ShowCustomView { view } => {
                let id = ViewId(view);
                let dismissed = Rc::clone(&self.dismissed);
                self.engine.on_show_custom_view(id, Box::new(move || dismissed.borrow_mut().push(id)));
            }
            ScriptEvent::HideCustomView => self.engine.on_hide_custom_view(),
            ScriptEvent::Back => self.engine.on_back(),
            ScriptEvent::CanGoBack { value } => self.engine.host_mut().set_history(value),
        }

        let dismissed: Vec<ViewId> = self.dismissed.borrow_mut().drain(..).collect();
        for view in dismissed {
            self.engine.host_mut().record(&Record::Dismissed { view });
        }
        Ok(self.engine.host_mut().take_error()?)
    }

    #[must_use]
    pub fn into_output(self) -> W {
        self.engine.into_host().into_inner()
    }
}

/// Replay a whole script and return the output writer, flushed.
///
/// # Errors
///
/// Read or write failures and the first malformed line.
pub fn run<R: BufRead, W: Write>(
    input: R,
    out: W,
    config: PointerConfig,
    full_scripts: bool,
) -> Result<W, ReplayError> {
    let mut replay = Replay::new(out, config, full_scripts);
    replay.start()?;

    let mut events = 0usize;
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let parsed = parse_line(&line).map_err(|source| ReplayError::Parse { line: index + 1, source })?;
        let Some(parsed) = parsed else {
            continue;
        };
        replay.apply(parsed)?;
        events += 1;
    }
    tracing::info!(events, "replay finished");

    let mut out = replay.into_output();
    out.flush()?;
    Ok(out)
}
