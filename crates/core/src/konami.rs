//! Hidden key-sequence detection and the celebration it triggers.
//!
//! The detector keeps a FIFO window of the most recent key codes, capped at
//! the target length. Every observed code is appended, the oldest code is
//! evicted past the cap, and the window is compared to the target. Only a
//! full, ordered, contiguous match fires; the window is cleared on a match so
//! the same keystrokes cannot re-trigger without a complete fresh occurrence.

use arrayvec::ArrayVec;
use tui_cyberfolio_types::{EGG_FADE_MS, EGG_OVERLAY_MS, EGG_SHAKE_MS, EGG_SHAKE_STEP_MS, KONAMI_CODE};

/// Watches the key-code stream for the target sequence.
#[derive(Debug, Clone)]
pub struct SequenceDetector {
    window: ArrayVec<u16, { KONAMI_CODE.len() }>,
    target: [u16; KONAMI_CODE.len()],
    matches: u32,
}

impl SequenceDetector {
    pub fn new() -> Self {
        Self::with_target(KONAMI_CODE)
    }

    pub fn with_target(target: [u16; KONAMI_CODE.len()]) -> Self {
        Self {
            window: ArrayVec::new(),
            target,
            matches: 0,
        }
    }

    /// Observe one key code. Returns true when the window exactly matches the
    /// target.
    pub fn observe(&mut self, code: u16) -> bool {
        if self.window.is_full() {
            self.window.remove(0);
        }
        self.window.push(code);

        if self.window.as_slice() == self.target.as_slice() {
            self.window.clear();
            self.matches += 1;
            return true;
        }
        false
    }

    /// Codes currently held, oldest first. Never longer than the target.
    pub fn window(&self) -> &[u16] {
        self.window.as_slice()
    }

    /// Total matches observed so far.
    pub fn matches(&self) -> u32 {
        self.matches
    }
}

impl Default for SequenceDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// The time-limited celebration overlay and page shake.
#[derive(Debug, Clone)]
pub struct EasterEgg {
    overlay_left_ms: u32,
    shake_left_ms: u32,
}

impl EasterEgg {
    pub fn new() -> Self {
        Self {
            overlay_left_ms: 0,
            shake_left_ms: 0,
        }
    }

    /// Fire (or re-fire) the celebration.
    pub fn trigger(&mut self) {
        self.overlay_left_ms = EGG_OVERLAY_MS;
        self.shake_left_ms = EGG_SHAKE_MS;
    }

    pub fn tick(&mut self, elapsed_ms: u32) {
        self.overlay_left_ms = self.overlay_left_ms.saturating_sub(elapsed_ms);
        self.shake_left_ms = self.shake_left_ms.saturating_sub(elapsed_ms);
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_left_ms > 0
    }

    /// True during the fade-out tail of the overlay lifetime.
    pub fn overlay_fading(&self) -> bool {
        self.overlay_left_ms > 0 && self.overlay_left_ms <= EGG_FADE_MS
    }

    /// Horizontal jitter in cells while the shake runs, alternating each step.
    pub fn shake_offset(&self) -> i16 {
        if self.shake_left_ms == 0 {
            return 0;
        }
        let step = (EGG_SHAKE_MS - self.shake_left_ms) / EGG_SHAKE_STEP_MS;
        if step % 2 == 0 {
            1
        } else {
            -1
        }
    }
}

impl Default for EasterEgg {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_sequence_fires_exactly_once() {
        let mut d = SequenceDetector::new();
        let mut fired = 0;
        for code in KONAMI_CODE {
            if d.observe(code) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert_eq!(d.matches(), 1);
    }

    #[test]
    fn test_swapped_tail_never_fires() {
        let mut d = SequenceDetector::new();
        let stream = [38, 38, 40, 40, 37, 39, 37, 39, 65, 66];
        assert!(stream.iter().all(|&c| !d.observe(c)));
        assert_eq!(d.matches(), 0);
    }

    #[test]
    fn test_window_never_exceeds_target_length() {
        let mut d = SequenceDetector::new();
        for i in 0..1000u16 {
            d.observe(i % 97);
            assert!(d.window().len() <= KONAMI_CODE.len());
        }
    }

    #[test]
    fn test_oldest_codes_are_evicted_first() {
        let mut d = SequenceDetector::new();
        for code in 0..12u16 {
            d.observe(code);
        }
        assert_eq!(d.window(), &[2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
    }

    #[test]
    fn test_prefix_repeats_do_not_fire_early() {
        let mut d = SequenceDetector::new();
        // Lots of Up presses prefix-match but must never fire.
        for _ in 0..50 {
            assert!(!d.observe(38));
        }
        assert_eq!(d.matches(), 0);
    }

    #[test]
    fn test_noise_then_full_sequence_fires() {
        let mut d = SequenceDetector::new();
        for &c in &[72u16, 73, 74] {
            d.observe(c);
        }
        let mut fired = 0;
        for code in KONAMI_CODE {
            if d.observe(code) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_match_clears_window_blocking_instant_retrigger() {
        let mut d = SequenceDetector::new();
        for code in KONAMI_CODE {
            d.observe(code);
        }
        assert!(d.window().is_empty());

        // A second full occurrence fires again.
        let mut fired = 0;
        for code in KONAMI_CODE {
            if d.observe(code) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert_eq!(d.matches(), 2);
    }

    #[test]
    fn test_overlay_lifetime_and_fade_tail() {
        let mut egg = EasterEgg::new();
        assert!(!egg.overlay_visible());

        egg.trigger();
        assert!(egg.overlay_visible());
        assert!(!egg.overlay_fading());

        egg.tick(EGG_OVERLAY_MS - EGG_FADE_MS);
        assert!(egg.overlay_fading());

        egg.tick(EGG_FADE_MS);
        assert!(!egg.overlay_visible());
    }

    #[test]
    fn test_shake_alternates_and_stops() {
        let mut egg = EasterEgg::new();
        egg.trigger();

        let first = egg.shake_offset();
        egg.tick(EGG_SHAKE_STEP_MS);
        assert_eq!(egg.shake_offset(), -first);

        egg.tick(EGG_SHAKE_MS);
        assert_eq!(egg.shake_offset(), 0);
    }

    #[test]
    fn test_retrigger_restarts_timers() {
        let mut egg = EasterEgg::new();
        egg.trigger();
        egg.tick(EGG_OVERLAY_MS - 1);
        egg.trigger();
        egg.tick(EGG_OVERLAY_MS - 1);
        assert!(egg.overlay_visible());
    }
}
