//! Shared numeric constants for the pointer crate.

// ── Movement ────────────────────────────────────────────────────

/// Distance of a single directional press, in container pixels.
pub const BASE_STEP_PX: f64 = 60.0;

/// Extra distance added per key-repeat while a direction is held.
pub const ACCEL_STEP_PX: f64 = 18.0;

/// Width of the band along each viewport edge that triggers auto-scroll.
pub const EDGE_MARGIN_PX: f64 = 40.0;

// ── Edge scroll ─────────────────────────────────────────────────

/// Horizontal scroll increment requested at the left/right edge (CSS pixels).
pub const SCROLL_STEP_X_PX: f64 = 120.0;

/// Vertical scroll increment requested at the top/bottom edge (CSS pixels).
pub const SCROLL_STEP_Y_PX: f64 = 150.0;

// ── Animation ───────────────────────────────────────────────────

/// Duration of one cursor glide.
pub const ANIMATION_MS: f64 = 110.0;

// ── Media ───────────────────────────────────────────────────────

/// Seek distance for fast-forward / rewind keys.
pub const SEEK_SECONDS: f64 = 10.0;

// ── Cursor overlay ──────────────────────────────────────────────

/// Radius of the ring drawn at the rendered cursor position.
pub const CURSOR_RADIUS_PX: f64 = 12.0;

/// Stroke width of the cursor ring.
pub const CURSOR_BORDER_PX: f64 = 2.0;

/// Cursor ring color (ARGB, cyan 500).
pub const CURSOR_COLOR_ARGB: u32 = 0xFF00_BCD4;

// ── Session ─────────────────────────────────────────────────────

/// Document loaded when the session starts.
pub const DEFAULT_START_URL: &str = "https://gitanime-web.vercel.app/";
