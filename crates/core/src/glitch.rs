//! Low-probability periodic glitch flicker for labeled targets.
//!
//! Every [`GLITCH_SAMPLE_MS`] each target draws once from the random source;
//! below [`GLITCH_CHANCE`] it enters a glitched state for [`GLITCH_HOLD_MS`]
//! and then reverts. Targets are independent; the view scrambles a glitched
//! target's text using the per-activation seed.

use crate::rng::SimpleRng;
use tui_cyberfolio_types::{GLITCH_CHANCE, GLITCH_HOLD_MS, GLITCH_SAMPLE_MS};

#[derive(Debug, Clone, Copy)]
struct TargetState {
    hold_ms: u32,
    scramble_seed: u32,
}

/// Flicker state for a fixed set of glitchable targets.
#[derive(Debug, Clone)]
pub struct GlitchFlicker {
    targets: Vec<TargetState>,
    sample_acc_ms: u32,
    rng: SimpleRng,
}

impl GlitchFlicker {
    pub fn new(target_count: usize, rng: SimpleRng) -> Self {
        Self {
            targets: vec![
                TargetState {
                    hold_ms: 0,
                    scramble_seed: 0,
                };
                target_count
            ],
            sample_acc_ms: 0,
            rng,
        }
    }

    pub fn tick(&mut self, elapsed_ms: u32) {
        for t in &mut self.targets {
            t.hold_ms = t.hold_ms.saturating_sub(elapsed_ms);
        }

        self.sample_acc_ms += elapsed_ms;
        while self.sample_acc_ms >= GLITCH_SAMPLE_MS {
            self.sample_acc_ms -= GLITCH_SAMPLE_MS;
            for t in &mut self.targets {
                if self.rng.next_f32() < GLITCH_CHANCE {
                    t.hold_ms = GLITCH_HOLD_MS;
                    t.scramble_seed = self.rng.next_u32();
                }
            }
        }
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Whether target `index` is currently glitched.
    ///
    /// Out-of-range indices are never glitched.
    pub fn is_glitched(&self, index: usize) -> bool {
        self.targets.get(index).is_some_and(|t| t.hold_ms > 0)
    }

    /// Scramble seed of the target's latest activation.
    pub fn scramble_seed(&self, index: usize) -> u32 {
        self.targets.get(index).map_or(0, |t| t.scramble_seed)
    }
}
