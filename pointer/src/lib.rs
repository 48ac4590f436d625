//! Remote-to-pointer engine for embedded web content on TV-class devices.
//!
//! A D-pad remote has no pointing device. This crate turns its discrete key
//! events into a clamped virtual pointer, glides a cursor overlay toward it,
//! and drives the page through a small injected script bridge: synthetic
//! pointer and mouse events, clicks, edge scrolling, media transport and a
//! CSS fallback for fullscreen. The platform shell owns the window and the
//! content renderer and is reached only through [`engine::Host`] or by
//! applying the [`engine::Action`]s that [`engine::EngineCore`] returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine, testable [`engine::EngineCore`], [`engine::Host`] trait |
//! | [`keymap`] | Key events, platform key codes, key-to-command mapping |
//! | [`pointer`] | Authoritative clamped pointer position and edge detection |
//! | [`animator`] | Cursor glide (fast-out-slow-in) and overlay styling |
//! | [`edge_scroll`] | Scroll requests when the pointer pushes into an edge margin |
//! | [`bridge`] | In-page installer script, call scripts, reply decoding |
//! | [`fullscreen`] | Native custom view vs. simulated fullscreen, back gesture |
//! | [`geometry`] | Points, viewport bounds, container-to-content transform |
//! | [`config`] | Tuning from environment variables |
//! | [`error`] | Configuration errors |
//! | [`consts`] | Default steps, margins, durations and cursor styling |

pub mod animator;
pub mod bridge;
pub mod config;
pub mod consts;
pub mod edge_scroll;
pub mod engine;
pub mod error;
pub mod fullscreen;
pub mod geometry;
pub mod keymap;
pub mod pointer;

pub use config::{ActivateTarget, PointerConfig};
pub use engine::{Action, Engine, EngineCore, Host, KeyOutcome};
pub use error::ConfigError;
