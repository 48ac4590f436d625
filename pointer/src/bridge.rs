//! Content bridge: the script side of the engine.
//!
//! DESIGN
//! ======
//! The engine never touches the page directly. Every operation becomes a
//! self-contained script handed to the renderer's evaluate channel. Each
//! script first runs the installer, which is a no-op when
//! `window.__remotePointer.installed` is already set in that document, then
//! calls one primitive and returns its result as the completion value.
//!
//! Coordinates passed in here are already in content (CSS) pixels; the
//! container-to-content conversion happens in the engine before this
//! boundary.
//!
//! The DOM lookups (first `<video>`, largest `<iframe>` by area, topmost
//! element at a point) are heuristics. They work for typical embedded
//! players and are not guaranteed for every page structure.

#[cfg(test)]
#[path = "bridge_test.rs"]
mod bridge_test;

use serde::{Deserialize, Serialize};

use crate::edge_scroll::ScrollRequest;
use crate::geometry::Point;

/// Global the installer defines inside the page.
pub const BRIDGE_GLOBAL: &str = "window.__remotePointer";

/// Class added to the element shown in simulated fullscreen.
pub const FULLSCREEN_MARKER: &str = "rp-fullscreen-target";

/// Id of the injected fullscreen stylesheet.
pub const FULLSCREEN_STYLE_ID: &str = "rp-fullscreen-style";

/// Idempotent installer. Defines the bridge object once per document.
pub const INSTALL_SCRIPT: &str = r"(function(){
if (window.__remotePointer && window.__remotePointer.installed) { return; }
var MARK = 'rp-fullscreen-target';
var ACTIVE = 'rp-fullscreen-active';
var STYLE_ID = 'rp-fullscreen-style';
var CSS = 'html.' + ACTIVE + ',html.' + ACTIVE + ' body{background:#000!important;overflow:hidden!important}'
  + '.' + MARK + '{position:fixed!important;left:0!important;top:0!important;width:100vw!important;height:100vh!important;'
  + 'z-index:2147483647!important;background:#000!important;object-fit:contain!important}';
function opts(x, y) { return { clientX: x, clientY: y, bubbles: true, cancelable: true, view: window }; }
function fire(el, type, x, y) {
  try {
    var Ctor = (type.indexOf('pointer') === 0 && typeof PointerEvent === 'function') ? PointerEvent : MouseEvent;
    el.dispatchEvent(new Ctor(type, opts(x, y)));
  } catch (e) {}
}
function clickSequence(el, x, y) {
  ['pointerdown', 'mousedown', 'pointerup', 'mouseup', 'click'].forEach(function (t) { fire(el, t, x, y); });
}
function largestIframe() {
  var frames = document.querySelectorAll('iframe');
  var best = null, bestArea = 0;
  for (var i = 0; i < frames.length; i++) {
    var r = frames[i].getBoundingClientRect();
    var area = r.width * r.height;
    if (area > bestArea) { bestArea = area; best = frames[i]; }
  }
  return best;
}
function firstVideo() { return document.querySelector('video'); }
function ensureStyle() {
  if (document.getElementById(STYLE_ID)) { return; }
  var s = document.createElement('style');
  s.id = STYLE_ID;
  s.textContent = CSS;
  (document.head || document.documentElement).appendChild(s);
}
function dropStyle() {
  var s = document.getElementById(STYLE_ID);
  if (s && s.parentNode) { s.parentNode.removeChild(s); }
}
window.__remotePointer = {
  installed: true,
  move: function (x, y) {
    fire(document, 'pointermove', x, y);
    fire(document, 'mousemove', x, y);
    var el = document.elementFromPoint(x, y);
    if (el) {
      fire(el, 'pointermove', x, y);
      fire(el, 'mousemove', x, y);
    }
    return !!el;
  },
  click: function (x, y) {
    var el = document.elementFromPoint(x, y);
    if (!el) { return false; }
    clickSequence(el, x, y);
    return true;
  },
  clickFocused: function () {
    var el = document.activeElement;
    if (!el || el === document.body || el === document.documentElement) { return false; }
    var r = el.getBoundingClientRect();
    clickSequence(el, r.left + r.width / 2, r.top + r.height / 2);
    return true;
  },
  toggleFullscreenTarget: function () {
    var marked = document.querySelector('.' + MARK);
    if (marked) {
      marked.classList.remove(MARK);
      document.documentElement.classList.remove(ACTIVE);
      dropStyle();
      return 'exited';
    }
    var target = firstVideo() || largestIframe();
    if (!target) { return false; }
    ensureStyle();
    document.documentElement.classList.add(ACTIVE);
    target.classList.add(MARK);
    return 'entered';
  },
  playPause: function () {
    var v = firstVideo();
    if (!v) { return false; }
    if (v.paused) {
      var p = v.play();
      if (p && typeof p.catch === 'function') { p.catch(function () {}); }
    } else {
      v.pause();
    }
    return true;
  },
  play: function () {
    var v = firstVideo();
    if (!v) { return false; }
    var p = v.play();
    if (p && typeof p.catch === 'function') { p.catch(function () {}); }
    return true;
  },
  pause: function () {
    var v = firstVideo();
    if (!v) { return false; }
    v.pause();
    return true;
  },
  seek: function (seconds) {
    var v = firstVideo();
    if (!v) { return false; }
    try {
      var end = isFinite(v.duration) ? v.duration : Infinity;
      v.currentTime = Math.max(0, Math.min(end, v.currentTime + seconds));
    } catch (e) {}
    return true;
  },
  scrollBy: function (dx, dy) {
    window.scrollBy(dx, dy);
    return true;
  },
  hideNativeCursor: function () {
    if (!document.body) { return false; }
    document.body.style.cursor = 'none';
    return true;
  }
};
})();";

/// Generation of the page document a script was sent to. Bumped on every
/// finished page load so replies from a replaced document can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DocumentId(pub u64);

impl DocumentId {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Which bridge primitive a script invokes. Used to route replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeOp {
    HideCursor,
    Move,
    Click,
    ClickFocused,
    ToggleFullscreen,
    PlayPause,
    Play,
    Pause,
    Seek,
    ScrollBy,
}

/// One bridge invocation with its arguments, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BridgeCall {
    HideCursor,
    Move(Point),
    Click(Point),
    ClickFocused,
    ToggleFullscreen,
    PlayPause,
    Play,
    Pause,
    Seek { seconds: f64 },
    ScrollBy(ScrollRequest),
}

impl BridgeCall {
    #[must_use]
    pub fn op(&self) -> BridgeOp {
        match self {
            Self::HideCursor => BridgeOp::HideCursor,
            Self::Move(_) => BridgeOp::Move,
            Self::Click(_) => BridgeOp::Click,
            Self::ClickFocused => BridgeOp::ClickFocused,
            Self::ToggleFullscreen => BridgeOp::ToggleFullscreen,
            Self::PlayPause => BridgeOp::PlayPause,
            Self::Play => BridgeOp::Play,
            Self::Pause => BridgeOp::Pause,
            Self::Seek { .. } => BridgeOp::Seek,
            Self::ScrollBy(_) => BridgeOp::ScrollBy,
        }
    }

    /// The JS expression invoked on the bridge object, without the installer.
    #[must_use]
    pub fn invocation(&self) -> String {
        match self {
            Self::HideCursor => "b.hideNativeCursor()".to_owned(),
            Self::Move(p) => format!("b.move({}, {})", js_number(p.x), js_number(p.y)),
            Self::Click(p) => format!("b.click({}, {})", js_number(p.x), js_number(p.y)),
            Self::ClickFocused => "b.clickFocused()".to_owned(),
            Self::ToggleFullscreen => "b.toggleFullscreenTarget()".to_owned(),
            Self::PlayPause => "b.playPause()".to_owned(),
            Self::Play => "b.play()".to_owned(),
            Self::Pause => "b.pause()".to_owned(),
            Self::Seek { seconds } => format!("b.seek({})", js_number(*seconds)),
            Self::ScrollBy(req) => format!("b.scrollBy({}, {})", js_number(req.dx), js_number(req.dy)),
        }
    }

    /// Full script for the renderer: install (idempotent), then invoke.
    #[must_use]
    pub fn script(&self) -> String {
        format!(
            "(function(){{\n{INSTALL_SCRIPT}\nvar b = {BRIDGE_GLOBAL};\nreturn b ? {} : false;\n}})();",
            self.invocation()
        )
    }
}

/// Render a float as a JS numeric literal. Non-finite values become `0`.
fn js_number(v: f64) -> String {
    if v.is_finite() { format!("{v}") } else { "0".to_owned() }
}

/// Decoded completion value of a bridge script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeReply {
    /// The primitive found its target.
    Success,
    /// No target element (nothing under the point, no video, ...).
    Failure,
    /// Simulated fullscreen switched on.
    Entered,
    /// Simulated fullscreen switched off.
    Exited,
    /// Null, undefined or unparseable: the document likely went away.
    NoResult,
}

impl BridgeReply {
    /// Parse the JSON string the renderer reports for a finished evaluation.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(raw.trim()) {
            Ok(serde_json::Value::Bool(true)) => Self::Success,
            Ok(serde_json::Value::Bool(false)) => Self::Failure,
            Ok(serde_json::Value::String(s)) => match s.as_str() {
                "entered" => Self::Entered,
                "exited" => Self::Exited,
                _ => Self::NoResult,
            },
            Ok(_) | Err(_) => Self::NoResult,
        }
    }

    /// Whether the primitive reached a target.
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success | Self::Entered | Self::Exited)
    }
}
