//! One-shot scroll-triggered section fade-ins.

use crate::nav::PageLayout;
use tui_cyberfolio_types::{REVEAL_FADE_MS, REVEAL_RISE_ROWS, REVEAL_THRESHOLD};

#[derive(Debug, Clone, Copy)]
struct RevealSlot {
    revealed: bool,
    fade_ms: u32,
}

/// Tracks which sections have entered the viewport and animates their fade-in.
///
/// A section reveals once, the first time at least [`REVEAL_THRESHOLD`] of its
/// band is visible; it never un-reveals when scrolled away.
#[derive(Debug, Clone)]
pub struct SectionReveal {
    slots: Vec<RevealSlot>,
}

impl SectionReveal {
    pub fn new(section_count: usize) -> Self {
        Self {
            slots: vec![
                RevealSlot {
                    revealed: false,
                    fade_ms: 0,
                };
                section_count
            ],
        }
    }

    /// Observe current visibility and advance running fades.
    pub fn tick(&mut self, layout: &PageLayout, scroll_y: u16, viewport_rows: u16, elapsed_ms: u32) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if !slot.revealed
                && layout.visible_fraction(i, scroll_y, viewport_rows) >= REVEAL_THRESHOLD
            {
                slot.revealed = true;
            }
            if slot.revealed && slot.fade_ms < REVEAL_FADE_MS {
                slot.fade_ms = (slot.fade_ms + elapsed_ms).min(REVEAL_FADE_MS);
            }
        }
    }

    pub fn revealed(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|s| s.revealed)
    }

    /// Fade-in progress in [0, 1]; 0 while hidden, 1 once settled.
    pub fn progress(&self, index: usize) -> f32 {
        self.slots.get(index).map_or(0.0, |s| {
            if !s.revealed {
                0.0
            } else {
                s.fade_ms as f32 / REVEAL_FADE_MS as f32
            }
        })
    }

    /// Upward offset in rows while the fade runs (the "rise").
    pub fn rise_rows(&self, index: usize) -> u16 {
        let p = self.progress(index);
        if p > 0.0 && p < 1.0 {
            REVEAL_RISE_ROWS
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_cyberfolio_types::SectionKind;

    fn layout() -> PageLayout {
        PageLayout::stack(&[
            (SectionKind::Home, 20),
            (SectionKind::About, 20),
            (SectionKind::Skills, 20),
        ])
    }

    #[test]
    fn test_offscreen_sections_stay_hidden() {
        let l = layout();
        let mut r = SectionReveal::new(3);
        r.tick(&l, 0, 10, 16);
        assert!(r.revealed(0));
        assert!(!r.revealed(2));
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let l = layout();
        let mut r = SectionReveal::new(3);

        // Scroll to the bottom section, then back to the top.
        r.tick(&l, 40, 24, 16);
        assert!(r.revealed(2));
        r.tick(&l, 0, 24, 16);
        assert!(r.revealed(2), "scrolling away must not un-reveal");
    }

    #[test]
    fn test_fade_progress_reaches_one_and_settles() {
        let l = layout();
        let mut r = SectionReveal::new(3);
        for _ in 0..(REVEAL_FADE_MS / 16 + 2) {
            r.tick(&l, 0, 24, 16);
        }
        assert!((r.progress(0) - 1.0).abs() < 1e-6);
        assert_eq!(r.rise_rows(0), 0);
    }

    #[test]
    fn test_rise_only_during_fade() {
        let l = layout();
        let mut r = SectionReveal::new(3);
        assert_eq!(r.rise_rows(0), 0);
        r.tick(&l, 0, 24, 16);
        assert_eq!(r.rise_rows(0), REVEAL_RISE_ROWS);
    }

    #[test]
    fn test_out_of_range_index_is_hidden() {
        let r = SectionReveal::new(1);
        assert!(!r.revealed(9));
        assert_eq!(r.progress(9), 0.0);
    }
}
