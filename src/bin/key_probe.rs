//! Key-event probe.
//!
//! Prints every key event with its mapped page action and detector code, and
//! reports when the typed stream completes the hidden sequence. Useful for
//! checking what codes a terminal actually delivers. Quit with `q` or ctrl-c.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use tui_cyberfolio::core::konami::SequenceDetector;
use tui_cyberfolio::input::{handle_key_event, key_code, should_quit};

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let result = probe();
    terminal::disable_raw_mode()?;
    result
}

fn probe() -> Result<()> {
    let mut detector = SequenceDetector::new();
    println!("key probe: press keys, q or ctrl-c to quit\r");

    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(());
            }

            let action = handle_key_event(key).map(|a| a.as_str()).unwrap_or("-");
            match key_code(key) {
                Some(code) => {
                    let matched = detector.observe(code);
                    println!(
                        "{:?} -> code {} action {} window {:?}{}\r",
                        key.code,
                        code,
                        action,
                        detector.window(),
                        if matched { "  << sequence matched" } else { "" },
                    );
                }
                None => {
                    println!("{:?} -> no code, action {}\r", key.code, action);
                }
            }
        }
    }
}
