mod stack;

pub use stack::FrameStack;

/// Direction of travel through the stack. Index 0 is the innermost
/// frame, so `Up` walks toward older callers and `Down` back toward
/// the entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A single captured execution context. Frames arrive from the
/// capturing collaborator already ordered (innermost first) and are
/// never mutated or reordered afterward.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Routine name, used for pattern matching and display.
    pub label: String,
    /// Source position for display only; never matched against.
    pub location: Option<String>,
}

impl Frame {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            location: None,
        }
    }

    pub fn with_location(label: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            location: Some(location.into()),
        }
    }
}
