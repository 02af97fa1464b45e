//! Determinism of randomized visual parameters: fixed seed, fixed page.

use tui_cyberfolio::core::glitch::GlitchFlicker;
use tui_cyberfolio::core::matrix::RainColumn;
use tui_cyberfolio::core::particles::{Particle, ParticleField};
use tui_cyberfolio::core::rng::SimpleRng;
use tui_cyberfolio::types::{GLITCH_HOLD_MS, GLITCH_SAMPLE_MS, PARTICLE_COUNT};

#[test]
fn particle_records_are_pure_functions_of_the_seed() {
    let mut a = SimpleRng::new(31337);
    let mut b = SimpleRng::new(31337);

    for _ in 0..PARTICLE_COUNT {
        let pa = Particle::generate(&mut a);
        let pb = Particle::generate(&mut b);
        assert_eq!(pa.cycle_ms(), pb.cycle_ms());
        assert_eq!(pa.color(), pb.color());
        assert_eq!(pa.size().to_bits(), pb.size().to_bits());
        assert_eq!(pa.base_opacity().to_bits(), pb.base_opacity().to_bits());
    }
}

#[test]
fn column_records_are_pure_functions_of_the_seed() {
    let mut a = SimpleRng::new(555);
    let mut b = SimpleRng::new(555);
    for i in 0..8 {
        let ca = RainColumn::generate(i, &mut a);
        let cb = RainColumn::generate(i, &mut b);
        assert_eq!(ca.fall_ms(), cb.fall_ms());
        assert_eq!(ca.delay_ms(), cb.delay_ms());
        assert_eq!(ca.x(), cb.x());
    }
}

#[test]
fn identically_seeded_fields_animate_identically() {
    let mut fa = ParticleField::new(&mut SimpleRng::new(2));
    let mut fb = ParticleField::new(&mut SimpleRng::new(2));

    for _ in 0..500 {
        fa.tick(16);
        fb.tick(16);
    }
    for (a, b) in fa.particles().iter().zip(fb.particles()) {
        assert_eq!(a.position(100, 40), b.position(100, 40));
        assert_eq!(a.opacity().to_bits(), b.opacity().to_bits());
    }
}

#[test]
fn identically_seeded_flickers_glitch_in_lockstep() {
    let mut ga = GlitchFlicker::new(5, SimpleRng::new(777));
    let mut gb = GlitchFlicker::new(5, SimpleRng::new(777));

    for _ in 0..200 {
        ga.tick(GLITCH_SAMPLE_MS / 2);
        gb.tick(GLITCH_SAMPLE_MS / 2);
        for i in 0..5 {
            assert_eq!(ga.is_glitched(i), gb.is_glitched(i));
        }
    }
}

#[test]
fn glitch_flash_is_transient() {
    let mut g = GlitchFlicker::new(1, SimpleRng::new(3));

    // Find an activation, then watch it revert on schedule.
    for _ in 0..500 {
        g.tick(GLITCH_SAMPLE_MS);
        if g.is_glitched(0) {
            g.tick(GLITCH_HOLD_MS - 1);
            let still = g.is_glitched(0);
            g.tick(1);
            assert!(!g.is_glitched(0));
            // The flash either lasted to the final millisecond or a fresh
            // draw re-armed it mid-hold; both end not-glitched here.
            let _ = still;
            return;
        }
    }
    panic!("no activation in 500 samples");
}
