//! Terminal-simulation intro: staggered typewriter lines and a blinking cursor.

use crate::blink::Blink;
use crate::typewriter::Typewriter;
use tui_cyberfolio_types::{
    CONSOLE_LEAD_IN_MS, CONSOLE_LINE_BASE_MS, CONSOLE_LINE_STAGGER_MS, CURSOR_BLINK_MS,
    TYPE_INTERVAL_MS,
};

/// One scripted console line.
#[derive(Debug, Clone)]
pub struct ConsoleLine {
    delay_ms: u32,
    typer: Typewriter,
}

impl ConsoleLine {
    /// Line with the default delay for its position: `index * 500 + 1000` ms.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        let delay_ms = (index as u32) * CONSOLE_LINE_STAGGER_MS + CONSOLE_LINE_BASE_MS;
        Self::with_delay(text, delay_ms)
    }

    /// Line with an explicit delay from the lead-in.
    pub fn with_delay(text: impl Into<String>, delay_ms: u32) -> Self {
        Self {
            delay_ms,
            typer: Typewriter::new(text, TYPE_INTERVAL_MS),
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Visible prefix of the line (empty until its delay elapses).
    pub fn visible(&self) -> &str {
        self.typer.visible()
    }

    pub fn started(&self) -> bool {
        self.typer.started()
    }

    pub fn done(&self) -> bool {
        self.typer.done()
    }
}

/// The console window state: scripted lines plus the blinking cursor.
///
/// After a 500 ms lead-in, each line starts its own reveal once its delay
/// elapses. Lines are independent; a line that is still revealing never blocks
/// the next one from starting.
#[derive(Debug, Clone)]
pub struct ConsoleIntro {
    lines: Vec<ConsoleLine>,
    cursor: Blink,
    clock_ms: u32,
}

impl ConsoleIntro {
    pub fn new(lines: Vec<ConsoleLine>) -> Self {
        Self {
            lines,
            cursor: Blink::new(CURSOR_BLINK_MS),
            clock_ms: 0,
        }
    }

    /// Build from plain strings using the default per-index delays.
    pub fn from_script(script: &[&str]) -> Self {
        let lines = script
            .iter()
            .enumerate()
            .map(|(i, text)| ConsoleLine::new(i, *text))
            .collect();
        Self::new(lines)
    }

    pub fn tick(&mut self, elapsed_ms: u32) {
        self.cursor.tick(elapsed_ms);
        self.clock_ms = self.clock_ms.saturating_add(elapsed_ms);

        let since_lead_in = self.clock_ms.saturating_sub(CONSOLE_LEAD_IN_MS);
        if self.clock_ms < CONSOLE_LEAD_IN_MS {
            return;
        }

        for line in &mut self.lines {
            if !line.typer.started() && since_lead_in >= line.delay_ms {
                line.typer.start();
            }
            line.typer.tick(elapsed_ms);
        }
    }

    pub fn lines(&self) -> &[ConsoleLine] {
        &self.lines
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor.visible()
    }

    /// True once every line has fully revealed.
    pub fn finished(&self) -> bool {
        self.lines.iter().all(|l| l.done())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intro() -> ConsoleIntro {
        ConsoleIntro::from_script(&["ab", "cd"])
    }

    #[test]
    fn test_no_line_starts_before_lead_in_plus_delay() {
        let mut c = intro();
        // Lead-in 500 + base delay 1000: nothing at 1499.
        c.tick(1499);
        assert!(!c.lines()[0].started());
        assert_eq!(c.lines()[0].visible(), "");
    }

    #[test]
    fn test_lines_start_in_stagger_order() {
        let mut c = intro();
        c.tick(1500);
        assert!(c.lines()[0].started());
        assert!(!c.lines()[1].started());

        c.tick(500);
        assert!(c.lines()[1].started());
    }

    #[test]
    fn test_all_lines_finish() {
        let mut c = intro();
        for _ in 0..500 {
            c.tick(16);
        }
        assert!(c.finished());
        assert_eq!(c.lines()[0].visible(), "ab");
        assert_eq!(c.lines()[1].visible(), "cd");
    }

    #[test]
    fn test_empty_script_is_inert_and_finished() {
        let mut c = ConsoleIntro::from_script(&[]);
        c.tick(10_000);
        assert!(c.finished());
        assert!(c.lines().is_empty());
    }

    #[test]
    fn test_explicit_delay_overrides_default() {
        let mut c = ConsoleIntro::new(vec![ConsoleLine::with_delay("x", 0)]);
        c.tick(500);
        assert!(c.lines()[0].started());
    }
}
