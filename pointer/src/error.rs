//! Error types for the pointer crate.
//!
//! Engine operations never fail; only configuration parsing does.

/// Error returned by [`crate::config::PointerConfig::from_env`].
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    /// A numeric setting was negative or not finite.
    #[error("invalid value for {var}: {value} (must be a finite, non-negative number)")]
    InvalidValue { var: &'static str, value: f64 },
    /// `TVPOINTER_ACTIVATE_TARGET` named something other than `pointer` or `focused`.
    #[error("unknown activate target '{0}' (expected 'pointer' or 'focused')")]
    UnknownActivateTarget(String),
}
