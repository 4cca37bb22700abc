//! Call-stack navigation for an interactive debugging session: walk a
//! captured frame sequence up and down, jump to an absolute or
//! name-matched frame, and track nested sessions.

pub mod commands;
pub mod error;
pub mod frames;
pub mod session;
