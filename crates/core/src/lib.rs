//! Effect state machines for the portfolio page - pure, deterministic, testable.
//!
//! Everything in this crate advances through `tick(elapsed_ms)` calls from the
//! single event loop; nothing reads a clock, touches I/O, or shares state with
//! another effect. Randomized visual parameters are sampled from the seeded
//! [`rng::SimpleRng`], so a fixed seed reproduces the exact same page.
//!
//! # Module Structure
//!
//! - [`rng`]: seeded LCG behind every randomized parameter
//! - [`blink`]: fixed-interval visibility toggle (console cursor)
//! - [`typewriter`]: per-line progressive text reveal
//! - [`console`]: the staggered terminal-simulation intro
//! - [`matrix`]: falling-glyph backdrop with resize regeneration
//! - [`particles`]: drifting decorative particles
//! - [`glitch`]: low-probability text flicker
//! - [`skills`]: staggered skill-bar fills
//! - [`reveal`]: one-shot scroll-triggered section fade-ins
//! - [`nav`]: section layout, scroll clamping, active-nav responder
//! - [`konami`]: hidden key-sequence detector and celebration timers
//! - [`backdrop`]: slow background tint rotation
//! - [`content`]: static page copy
//!
//! # Example
//!
//! ```
//! use tui_cyberfolio_core::konami::SequenceDetector;
//! use tui_cyberfolio_types::KONAMI_CODE;
//!
//! let mut detector = SequenceDetector::new();
//! let mut fired = 0;
//! for code in KONAMI_CODE {
//!     if detector.observe(code) {
//!         fired += 1;
//!     }
//! }
//! assert_eq!(fired, 1);
//! ```

pub mod backdrop;
pub mod blink;
pub mod console;
pub mod content;
pub mod glitch;
pub mod konami;
pub mod matrix;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod rng;
pub mod skills;
pub mod typewriter;

pub use tui_cyberfolio_types as types;

// Re-export commonly used types for convenience
pub use backdrop::BackdropShift;
pub use blink::Blink;
pub use console::{ConsoleIntro, ConsoleLine};
pub use glitch::GlitchFlicker;
pub use konami::{EasterEgg, SequenceDetector};
pub use matrix::{MatrixRain, RainColumn};
pub use nav::{NavState, PageLayout, ScrollState, SectionBand};
pub use particles::{Particle, ParticleColor, ParticleField};
pub use reveal::SectionReveal;
pub use rng::SimpleRng;
pub use skills::SkillBars;
pub use typewriter::Typewriter;
