//! Input mapping: terminal key events to page actions and detector codes.

pub mod map;

pub use map::{handle_key_event, key_code, should_quit};
