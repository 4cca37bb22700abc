use super::{Direction, Frame};
use crate::error::NavError;

/// The ordered, immutable frame sequence for one session plus its
/// movable cursor. Index 0 is the context the session was entered in;
/// higher indices are progressively older callers.
pub struct FrameStack {
    frames: Vec<Frame>,
    current: usize,
}

impl FrameStack {
    /// Build a stack over an already-captured frame sequence. The
    /// starting index is clamped into range; an empty capture is a
    /// collaborator error, not a valid stack.
    pub fn new(frames: Vec<Frame>, start_index: usize) -> Result<Self, NavError> {
        if frames.is_empty() {
            return Err(NavError::EmptyStack);
        }
        let current = start_index.min(frames.len() - 1);
        Ok(Self { frames, current })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        // A constructed stack always holds at least one frame.
        self.frames.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.current]
    }

    /// Relative move: walk `count` frames in `direction`, stopping at
    /// the boundary instead of erroring. Returns the new position.
    pub fn shift(&mut self, direction: Direction, count: usize) -> usize {
        let last = self.frames.len() - 1;
        self.current = match direction {
            Direction::Up => self.current.saturating_add(count).min(last),
            Direction::Down => self.current.saturating_sub(count),
        };
        self.current
    }

    /// Absolute jump with negative indexing: -1 selects the outermost
    /// frame, -len selects frame 0. An out-of-range target leaves the
    /// cursor where it was.
    pub fn jump(&mut self, index: isize) -> Result<usize, NavError> {
        let len = self.frames.len();
        let resolved = if index < 0 {
            index + len as isize
        } else {
            index
        };
        if resolved < 0 || resolved >= len as isize {
            return Err(NavError::OutOfRange { index, len });
        }
        self.current = resolved as usize;
        Ok(self.current)
    }

    /// Directional search: tests frames from one step beyond the
    /// cursor out to the boundary, nearest first. Never wraps and
    /// never re-tests the current frame. A hit moves the cursor.
    pub fn seek<P>(&mut self, direction: Direction, predicate: P) -> Option<usize>
    where
        P: Fn(&Frame) -> bool,
    {
        let found = match direction {
            Direction::Up => {
                (self.current + 1..self.frames.len()).find(|&i| predicate(&self.frames[i]))
            }
            Direction::Down => (0..self.current).rev().find(|&i| predicate(&self.frames[i])),
        };
        if let Some(index) = found {
            self.current = index;
        }
        found
    }

    /// One-line report for the frame at `index`: `#<index> <label>`,
    /// with the source location appended when the capture carried one.
    pub fn describe(&self, index: usize) -> Option<String> {
        self.frames.get(index).map(|frame| match &frame.location {
            Some(loc) => format!("#{} {} ({})", index, frame.label, loc),
            None => format!("#{} {}", index, frame.label),
        })
    }

    /// Report line for the currently selected frame.
    pub fn describe_current(&self) -> String {
        let frame = &self.frames[self.current];
        match &frame.location {
            Some(loc) => format!("#{} {} ({})", self.current, frame.label, loc),
            None => format!("#{} {}", self.current, frame.label),
        }
    }
}
