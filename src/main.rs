//! Portfolio page runner (default binary).
//!
//! One cooperative loop: poll input with a timeout until the next 16 ms tick,
//! advance every effect, render through the frame limiter. Any fault unwinds
//! to the top, is logged as a warning, and the terminal is restored.

use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use tui_cyberfolio::engine::Page;
use tui_cyberfolio::input::{handle_key_event, key_code, should_quit};
use tui_cyberfolio::term::{FrameBuffer, FrameLimiter, PageView, TerminalRenderer, Viewport};
use tui_cyberfolio::types::TICK_MS;

/// Idle repaint interval for the frame limiter.
const IDLE_REPAINT_MS: u64 = 250;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    // The page degrades to inert rather than wrecking the terminal: catch any
    // unwind, restore the screen, log one warning.
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| run(&mut term)));

    let _ = term.exit();

    match outcome {
        Ok(result) => result,
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
                .unwrap_or("unknown panic");
            warn!(reason, "page fault, exiting");
            Ok(())
        }
    }
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0x9e37);
    let mut page = Page::new(seed, w, h);

    let view = PageView::default();
    let mut fb = FrameBuffer::new(w, h);
    let mut limiter = FrameLimiter::new(IDLE_REPAINT_MS);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let now_ms = started.elapsed().as_millis() as u64;
        if limiter.should_render(now_ms, page.fingerprint(), page.is_animating()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&page, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                // Auto-repeat scrolls and feeds the detector like a fresh
                // press; only releases are ignored.
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    // Every key press feeds the detector; bound keys also
                    // scroll.
                    if let Some(code) = key_code(key) {
                        page.observe_key(code);
                    }
                    if let Some(action) = handle_key_event(key) {
                        page.apply_action(action);
                    }
                }
                Event::Resize(w, h) => {
                    page.resize(w, h);
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            page.tick(TICK_MS);
        }
    }
}
