use std::collections::HashMap;
use std::thread::{self, ThreadId};

use crate::error::NavError;
use crate::frames::{Frame, FrameStack};

/// Opaque ticket for one started session. A handle is only honored on
/// the thread that started the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionHandle {
    owner: ThreadId,
    serial: u64,
}

struct Entry {
    serial: u64,
    stack: FrameStack,
}

/// Per-thread LIFO chains of frame stacks. Each thread of control that
/// starts sessions owns an independent chain; a session started from
/// within another stacks on top of it, and ending the inner session
/// makes the enclosing stack visible again.
pub struct SessionRegistry {
    chains: HashMap<ThreadId, Vec<Entry>>,
    next_serial: u64,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            chains: HashMap::new(),
            next_serial: 0,
        }
    }

    /// Build a frame stack for a freshly entered session and make it
    /// the calling thread's innermost one. `start_index` is clamped
    /// the same way `FrameStack::new` clamps it.
    pub fn start_session(
        &mut self,
        frames: Vec<Frame>,
        start_index: usize,
    ) -> Result<SessionHandle, NavError> {
        let stack = FrameStack::new(frames, start_index)?;
        let owner = thread::current().id();
        let serial = self.next_serial;
        self.next_serial += 1;
        self.chains
            .entry(owner)
            .or_default()
            .push(Entry { serial, stack });
        Ok(SessionHandle { owner, serial })
    }

    /// The calling thread's innermost active stack.
    pub fn active_stack(&self) -> Result<&FrameStack, NavError> {
        self.chains
            .get(&thread::current().id())
            .and_then(|chain| chain.last())
            .map(|entry| &entry.stack)
            .ok_or(NavError::NoActiveSession)
    }

    pub fn active_stack_mut(&mut self) -> Result<&mut FrameStack, NavError> {
        self.chains
            .get_mut(&thread::current().id())
            .and_then(|chain| chain.last_mut())
            .map(|entry| &mut entry.stack)
            .ok_or(NavError::NoActiveSession)
    }

    /// Tear down the session named by `handle`. Only the innermost
    /// entry of the calling thread's chain may be ended; anything else
    /// is a lifecycle bug in the caller and removes nothing.
    pub fn end_session(&mut self, handle: SessionHandle) -> Result<(), NavError> {
        if handle.owner != thread::current().id() {
            return Err(NavError::SessionMismatch);
        }
        let chain = self
            .chains
            .get_mut(&handle.owner)
            .ok_or(NavError::SessionMismatch)?;
        match chain.last() {
            Some(entry) if entry.serial == handle.serial => {
                chain.pop();
                if chain.is_empty() {
                    self.chains.remove(&handle.owner);
                }
                Ok(())
            }
            _ => Err(NavError::SessionMismatch),
        }
    }

    /// Number of active sessions nested on the calling thread.
    pub fn depth(&self) -> usize {
        self.chains
            .get(&thread::current().id())
            .map_or(0, |chain| chain.len())
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
