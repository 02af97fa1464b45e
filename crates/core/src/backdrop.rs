//! Slow random rotation of the page's background tint.

use crate::rng::SimpleRng;
use tui_cyberfolio_types::{BACKDROP_SHIFT_MS, BACKDROP_VARIANTS};

/// Picks one of the background tint variants every shift interval.
#[derive(Debug, Clone)]
pub struct BackdropShift {
    variant: u8,
    acc_ms: u32,
    rng: SimpleRng,
}

impl BackdropShift {
    pub fn new(rng: SimpleRng) -> Self {
        Self {
            variant: 0,
            acc_ms: 0,
            rng,
        }
    }

    pub fn tick(&mut self, elapsed_ms: u32) {
        self.acc_ms += elapsed_ms;
        while self.acc_ms >= BACKDROP_SHIFT_MS {
            self.acc_ms -= BACKDROP_SHIFT_MS;
            self.variant = self.rng.next_range(BACKDROP_VARIANTS as u32) as u8;
        }
    }

    /// Current tint variant in `0..BACKDROP_VARIANTS`.
    pub fn variant(&self) -> u8 {
        self.variant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_is_stable_between_shifts() {
        let mut b = BackdropShift::new(SimpleRng::new(1));
        let v = b.variant();
        b.tick(BACKDROP_SHIFT_MS - 1);
        assert_eq!(b.variant(), v);
    }

    #[test]
    fn test_variant_stays_in_range() {
        let mut b = BackdropShift::new(SimpleRng::new(17));
        for _ in 0..100 {
            b.tick(BACKDROP_SHIFT_MS);
            assert!(b.variant() < BACKDROP_VARIANTS);
        }
    }
}
