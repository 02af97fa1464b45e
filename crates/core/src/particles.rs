//! Drifting decorative particles.

use crate::rng::SimpleRng;
use tui_cyberfolio_types::{
    PARTICLE_COUNT, PARTICLE_CYCLE_MIN_MS, PARTICLE_CYCLE_SPAN_MS, PARTICLE_DRIFT_CELLS,
};

/// Palette slot for a particle; the view maps slots to concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleColor {
    Green,
    Red,
    Copper,
    Neon,
}

const PALETTE: [ParticleColor; 4] = [
    ParticleColor::Green,
    ParticleColor::Red,
    ParticleColor::Copper,
    ParticleColor::Neon,
];

/// One particle's generated parameter record plus its cycle clock.
///
/// All parameters are a pure function of the random source; the clock is the
/// only mutable state.
#[derive(Debug, Clone)]
pub struct Particle {
    x_frac: f32,
    y_frac: f32,
    size: f32,
    color: ParticleColor,
    base_opacity: f32,
    drift_x: f32,
    drift_y: f32,
    cycle_ms: u32,
    clock_ms: u32,
}

impl Particle {
    /// Sample a fresh particle from the random source.
    pub fn generate(rng: &mut SimpleRng) -> Self {
        Self {
            x_frac: rng.next_f32(),
            y_frac: rng.next_f32(),
            size: rng.next_f32_in(2.0, 4.0),
            color: *rng.pick(&PALETTE),
            base_opacity: rng.next_f32_in(0.2, 0.5),
            drift_x: rng.next_f32_in(-PARTICLE_DRIFT_CELLS, 2.0 * PARTICLE_DRIFT_CELLS),
            drift_y: rng.next_f32_in(-PARTICLE_DRIFT_CELLS, 2.0 * PARTICLE_DRIFT_CELLS),
            cycle_ms: rng.next_in(PARTICLE_CYCLE_MIN_MS, PARTICLE_CYCLE_SPAN_MS),
            clock_ms: 0,
        }
    }

    fn tick(&mut self, elapsed_ms: u32) {
        self.clock_ms = (self.clock_ms + elapsed_ms) % self.cycle_ms;
    }

    /// Cycle progress in [0, 1).
    pub fn progress(&self) -> f32 {
        self.clock_ms as f32 / self.cycle_ms as f32
    }

    /// Cell position for the given viewport, drifting over the cycle.
    pub fn position(&self, width: u16, height: u16) -> (u16, u16) {
        if width == 0 || height == 0 {
            return (0, 0);
        }
        let t = self.progress();
        let x = self.x_frac * (width - 1) as f32 + self.drift_x * t;
        let y = self.y_frac * (height - 1) as f32 + self.drift_y * t;
        (
            (x.round().max(0.0) as u16).min(width - 1),
            (y.round().max(0.0) as u16).min(height - 1),
        )
    }

    /// Current opacity: ramps in over the first 10% of the cycle and out over
    /// the last 10%, holding the base opacity in between.
    pub fn opacity(&self) -> f32 {
        let t = self.progress();
        let envelope = if t < 0.1 {
            t / 0.1
        } else if t > 0.9 {
            (1.0 - t) / 0.1
        } else {
            1.0
        };
        self.base_opacity * envelope
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color(&self) -> ParticleColor {
        self.color
    }

    pub fn base_opacity(&self) -> f32 {
        self.base_opacity
    }

    pub fn cycle_ms(&self) -> u32 {
        self.cycle_ms
    }
}

/// The fixed-size particle set.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(rng: &mut SimpleRng) -> Self {
        Self::with_count(PARTICLE_COUNT, rng)
    }

    pub fn with_count(count: usize, rng: &mut SimpleRng) -> Self {
        Self {
            particles: (0..count).map(|_| Particle::generate(rng)).collect(),
        }
    }

    pub fn tick(&mut self, elapsed_ms: u32) {
        for p in &mut self.particles {
            p.tick(elapsed_ms);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
