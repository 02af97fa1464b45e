//! Animated skill-bar fills.
//!
//! Bars are armed once, the first time the skills section becomes visible.
//! Bar `i` starts after `i * 100` ms and fills to its target over 900 ms with
//! an ease-out curve; afterwards it is inert.

use tui_cyberfolio_types::{SKILL_DEFAULT_LEVEL, SKILL_FILL_MS, SKILL_LEVELS, SKILL_STAGGER_MS};

/// Fill target in percent for bar `index`.
pub fn level_for(index: usize) -> u8 {
    SKILL_LEVELS.get(index).copied().unwrap_or(SKILL_DEFAULT_LEVEL)
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[derive(Debug, Clone)]
struct Bar {
    target: u8,
    /// Time since arming, clamped once the fill completes.
    clock_ms: u32,
    start_ms: u32,
}

impl Bar {
    fn fill_fraction(&self) -> f32 {
        if self.clock_ms <= self.start_ms {
            return 0.0;
        }
        ease_out_cubic((self.clock_ms - self.start_ms) as f32 / SKILL_FILL_MS as f32)
    }
}

/// The skill-bar set with labels.
#[derive(Debug, Clone)]
pub struct SkillBars {
    labels: Vec<&'static str>,
    bars: Vec<Bar>,
    armed: bool,
}

impl SkillBars {
    pub fn new(labels: Vec<&'static str>) -> Self {
        let bars = (0..labels.len())
            .map(|i| Bar {
                target: level_for(i),
                clock_ms: 0,
                start_ms: (i as u32) * SKILL_STAGGER_MS,
            })
            .collect();
        Self {
            labels,
            bars,
            armed: false,
        }
    }

    /// Arm the fill animation. One-shot: later calls are no-ops.
    pub fn arm(&mut self) {
        self.armed = true;
    }

    pub fn armed(&self) -> bool {
        self.armed
    }

    pub fn tick(&mut self, elapsed_ms: u32) {
        if !self.armed {
            return;
        }
        for bar in &mut self.bars {
            let ceiling = bar.start_ms + SKILL_FILL_MS;
            if bar.clock_ms < ceiling {
                bar.clock_ms = (bar.clock_ms + elapsed_ms).min(ceiling);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn label(&self, index: usize) -> &'static str {
        self.labels.get(index).copied().unwrap_or("")
    }

    /// Fill target in percent.
    pub fn target(&self, index: usize) -> u8 {
        self.bars.get(index).map_or(0, |b| b.target)
    }

    /// Current fill in percent, `0.0..=target`.
    pub fn fill(&self, index: usize) -> f32 {
        self.bars
            .get(index)
            .map_or(0.0, |b| b.fill_fraction() * b.target as f32)
    }

    /// True once every bar has reached its target.
    pub fn settled(&self) -> bool {
        self.armed
            && self
                .bars
                .iter()
                .all(|b| b.clock_ms >= b.start_ms + SKILL_FILL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars(n: usize) -> SkillBars {
        SkillBars::new(vec!["x"; n])
    }

    #[test]
    fn test_levels_follow_table_with_default_past_end() {
        assert_eq!(level_for(0), 95);
        assert_eq!(level_for(15), 89);
        assert_eq!(level_for(16), SKILL_DEFAULT_LEVEL);
    }

    #[test]
    fn test_unarmed_bars_stay_empty() {
        let mut s = bars(3);
        s.tick(10_000);
        assert_eq!(s.fill(0), 0.0);
        assert!(!s.settled());
    }

    #[test]
    fn test_stagger_delays_later_bars() {
        let mut s = bars(3);
        s.arm();
        s.tick(SKILL_STAGGER_MS / 2);
        assert!(s.fill(0) > 0.0);
        assert_eq!(s.fill(1), 0.0);
        assert_eq!(s.fill(2), 0.0);
    }

    #[test]
    fn test_fill_reaches_exact_target_and_settles() {
        let mut s = bars(4);
        s.arm();
        for _ in 0..((SKILL_FILL_MS + 4 * SKILL_STAGGER_MS) / 16 + 2) {
            s.tick(16);
        }
        assert!(s.settled());
        for i in 0..4 {
            assert!((s.fill(i) - s.target(i) as f32).abs() < 1e-3);
        }
    }

    #[test]
    fn test_settled_bars_are_inert() {
        let mut s = bars(1);
        s.arm();
        s.tick(SKILL_FILL_MS);
        let before = s.fill(0);
        s.tick(10_000);
        assert_eq!(s.fill(0), before);
    }

    #[test]
    fn test_fill_is_monotonic() {
        let mut s = bars(2);
        s.arm();
        let mut prev = 0.0f32;
        for _ in 0..200 {
            s.tick(16);
            let now = s.fill(1);
            assert!(now >= prev);
            prev = now;
        }
    }

    #[test]
    fn test_empty_bar_set_is_safe() {
        let mut s = bars(0);
        s.arm();
        s.tick(1000);
        assert!(s.is_empty());
        assert!(s.settled());
    }
}
