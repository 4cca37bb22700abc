use thiserror::Error;

/// Failures while navigating a captured stack. `OutOfRange` and
/// `NoMatch` are ordinary user-facing outcomes; the session variants
/// indicate lifecycle misuse by the surrounding engine.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("no frame at index {index} (stack has {len} frames)")]
    OutOfRange { index: isize, len: usize },

    #[error("no frame that matches {pattern}")]
    NoMatch { pattern: String },

    #[error("bad frame pattern: {0}")]
    BadPattern(#[from] regex::Error),

    #[error("cannot build a frame stack from an empty capture")]
    EmptyStack,

    #[error("no active debugging session on this thread")]
    NoActiveSession,

    #[error("session handle does not name the innermost active session")]
    SessionMismatch,
}
