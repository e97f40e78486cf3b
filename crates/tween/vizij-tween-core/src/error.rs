//! Error types for the tween registry and easing library.

use crate::ids::TweenId;
use crate::value::ValueKind;

/// Errors raised by the tween core.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TweenError {
    /// A tween reached `tick` holding a value kind the registry cannot interpolate.
    #[error("{id}: cannot tween values of type {kind:?}")]
    UnsupportedType { id: TweenId, kind: ValueKind },

    /// Start and end (or the live value) disagree on kind.
    #[error("{id}: value kind mismatch, expected {expected:?}, got {actual:?}")]
    KindMismatch {
        id: TweenId,
        expected: ValueKind,
        actual: ValueKind,
    },

    /// Transition name not in the easing library.
    #[error("unknown transition: {name}")]
    UnknownTransition { name: String },

    /// Ease direction name not one of in/out/in_out.
    #[error("unknown ease direction: {name}")]
    UnknownEase { name: String },

    /// Easing string did not have the `transition.direction` shape.
    #[error("malformed easing: {input}")]
    MalformedEasing { input: String },

    /// Configuration rejected by `Config::validate`.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    /// Configuration could not be decoded.
    #[error("config decode error: {0}")]
    Config(#[from] serde_json::Error),
}

impl TweenError {
    /// Tick-time failures only affect the tween that raised them.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedType { .. } | Self::KindMismatch { .. }
        )
    }

    /// Error category for logging.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnsupportedType { .. } | Self::KindMismatch { .. } => "value",
            Self::UnknownTransition { .. }
            | Self::UnknownEase { .. }
            | Self::MalformedEasing { .. } => "easing",
            Self::InvalidConfig { .. } | Self::Config(_) => "config",
        }
    }

    /// The tween this error belongs to, when it came out of a tick.
    pub fn tween(&self) -> Option<TweenId> {
        match self {
            Self::UnsupportedType { id, .. } | Self::KindMismatch { id, .. } => Some(*id),
            _ => None,
        }
    }
}

/// Tween core result type.
pub type Result<T> = core::result::Result<T, TweenError>;
