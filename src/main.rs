use std::io::{self, BufRead, Write};

use stack_explorer::commands;
use stack_explorer::frames::Frame;
use stack_explorer::session::SessionRegistry;

fn main() -> io::Result<()> {
    let mut registry = SessionRegistry::new();
    let handle = match registry.start_session(sample_capture(), 0) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Failed to start session: {}", e);
            return Ok(());
        }
    };

    eprintln!("Interactive stack navigator. Commands: up, down, frame, stack, exit.");
    if let Ok(stack) = registry.active_stack() {
        println!("{}", stack.describe_current());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // First token is the command, the remaining tokens are the
        // argument text (quotes preserved by shlex for patterns with
        // spaces).
        let mut lexer = shlex::Shlex::new(line);
        let command = match lexer.next() {
            Some(c) => c,
            None => continue,
        };
        if command == "exit" || command == "quit" {
            break;
        }
        let argtext: String = lexer.collect::<Vec<_>>().join(" ");

        match registry.active_stack_mut() {
            Ok(stack) => println!("{}", commands::run_command(stack, &command, &argtext)),
            Err(e) => {
                eprintln!("{}", e);
                break;
            }
        }
    }

    if let Err(e) = registry.end_session(handle) {
        eprintln!("Failed to end session: {}", e);
    }
    Ok(())
}

/// A canned capture standing in for the host runtime's stack walker:
/// bang was entered from bong, which was entered from bing.
fn sample_capture() -> Vec<Frame> {
    vec![
        Frame::with_location("bang", "demo.rs:21"),
        Frame::with_location("bong", "demo.rs:14"),
        Frame::with_location("bing", "demo.rs:7"),
    ]
}
