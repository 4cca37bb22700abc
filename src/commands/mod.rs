//! Routing for the stack-navigation commands. The surrounding session
//! engine hands over an already-tokenized command name plus the rest
//! of the input line; everything here is a synchronous index
//! computation that answers with a single output line.

use regex::Regex;

use crate::error::NavError;
use crate::frames::{Direction, FrameStack};

/// How the raw argument text of a command is interpreted.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// No argument given.
    Empty,
    /// Argument parsed as an integer (a count or an absolute index).
    Number(isize),
    /// Anything that is not an integer is a label pattern.
    Pattern(String),
}

impl Argument {
    /// Classify the argument of `up`/`down`: a bare count or a
    /// pattern. A signed number is not a count, so it falls through to
    /// pattern text.
    pub fn count(text: &str) -> Argument {
        let text = text.trim();
        if text.is_empty() {
            Argument::Empty
        } else if let Ok(n) = text.parse::<usize>() {
            Argument::Number(n as isize)
        } else {
            Argument::Pattern(text.to_string())
        }
    }

    /// Classify the argument of `frame`: a signed absolute index or a
    /// pattern.
    pub fn index(text: &str) -> Argument {
        let text = text.trim();
        if text.is_empty() {
            Argument::Empty
        } else if let Ok(n) = text.parse::<isize>() {
            Argument::Number(n)
        } else {
            Argument::Pattern(text.to_string())
        }
    }
}

/// Execute one navigation command against `stack` and return the line
/// to print. A failed jump or search reports a single error line and
/// leaves the cursor untouched.
pub fn run_command(stack: &mut FrameStack, command: &str, argtext: &str) -> String {
    let result = match command {
        "up" => navigate(stack, Direction::Up, argtext),
        "down" => navigate(stack, Direction::Down, argtext),
        "frame" => select_frame(stack, argtext),
        "stack" => return render_stack(stack),
        other => return format!("Unknown command: {}", other),
    };

    match result {
        Ok(line) => line,
        Err(_) => format!("Error: No frame that matches {}", argtext.trim()),
    }
}

fn navigate(stack: &mut FrameStack, direction: Direction, argtext: &str) -> Result<String, NavError> {
    match Argument::count(argtext) {
        Argument::Empty => {
            stack.shift(direction, 1);
        }
        Argument::Number(count) => {
            stack.shift(direction, count as usize);
        }
        Argument::Pattern(pattern) => {
            seek_pattern(stack, direction, &pattern)?;
        }
    }
    Ok(stack.describe_current())
}

fn select_frame(stack: &mut FrameStack, argtext: &str) -> Result<String, NavError> {
    match Argument::index(argtext) {
        // Bare `frame` only reports the current position.
        Argument::Empty => {}
        Argument::Number(index) => {
            stack.jump(index)?;
        }
        // A direction-less name search only ever looks outward.
        Argument::Pattern(pattern) => {
            seek_pattern(stack, Direction::Up, &pattern)?;
        }
    }
    Ok(stack.describe_current())
}

fn seek_pattern(
    stack: &mut FrameStack,
    direction: Direction,
    pattern: &str,
) -> Result<usize, NavError> {
    let re = Regex::new(pattern)?;
    stack
        .seek(direction, |frame| re.is_match(&frame.label))
        .ok_or_else(|| NavError::NoMatch {
            pattern: pattern.to_string(),
        })
}

/// List every frame, innermost first, marking the cursor. This is a
/// separate command; `frame` with no argument never enumerates.
pub fn render_stack(stack: &FrameStack) -> String {
    (0..stack.len())
        .map(|i| {
            let marker = if i == stack.current() { "=> " } else { "   " };
            format!("{}{}", marker, stack.describe(i).unwrap_or_default())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
