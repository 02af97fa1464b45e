//! The page aggregate: every effect instance plus scroll and layout state.

use crate::registry::{EffectId, EffectRegistry};

use tui_cyberfolio_core::console::ConsoleIntro;
use tui_cyberfolio_core::content;
use tui_cyberfolio_core::glitch::GlitchFlicker;
use tui_cyberfolio_core::konami::{EasterEgg, SequenceDetector};
use tui_cyberfolio_core::matrix::MatrixRain;
use tui_cyberfolio_core::nav::{NavState, PageLayout, ScrollState};
use tui_cyberfolio_core::particles::ParticleField;
use tui_cyberfolio_core::reveal::SectionReveal;
use tui_cyberfolio_core::rng::SimpleRng;
use tui_cyberfolio_core::skills::SkillBars;
use tui_cyberfolio_core::BackdropShift;
use tui_cyberfolio_types::{PageAction, REVEAL_THRESHOLD, NAV_BAR_ROWS, SectionKind};

/// Everything the view needs, advanced by the event loop.
///
/// Construction is the page-ready moment: each effect is installed in the
/// registry exactly once and owns its own state from then on. All methods are
/// cheap; nothing blocks.
pub struct Page {
    registry: EffectRegistry,
    rng: SimpleRng,
    width: u16,
    height: u16,

    layout: PageLayout,
    scroll: ScrollState,
    nav: NavState,

    console: ConsoleIntro,
    matrix: MatrixRain,
    particles: ParticleField,
    glitch: GlitchFlicker,
    skills: SkillBars,
    reveal: SectionReveal,
    detector: SequenceDetector,
    egg: EasterEgg,
    backdrop: BackdropShift,
}

impl Page {
    pub fn new(seed: u32, width: u16, height: u16) -> Self {
        let mut rng = SimpleRng::new(seed);
        let mut registry = EffectRegistry::new();
        for id in EffectId::ALL {
            registry.install(id);
        }

        let layout = PageLayout::stack(
            &SectionKind::ALL.map(|kind| (kind, content::section_rows(kind))),
        );
        let section_count = layout.bands().len();

        let matrix = MatrixRain::new(width, height, &mut rng);
        let particles = ParticleField::new(&mut rng);
        let glitch_rng = SimpleRng::new(rng.next_u32());
        let backdrop_rng = SimpleRng::new(rng.next_u32());

        Self {
            registry,
            rng,
            width,
            height,
            layout,
            scroll: ScrollState::new(),
            nav: NavState::new(),
            console: ConsoleIntro::from_script(&content::CONSOLE_SCRIPT),
            matrix,
            particles,
            glitch: GlitchFlicker::new(section_count, glitch_rng),
            skills: SkillBars::new(content::SKILL_LABELS.to_vec()),
            reveal: SectionReveal::new(section_count),
            detector: SequenceDetector::new(),
            egg: EasterEgg::new(),
            backdrop: BackdropShift::new(backdrop_rng),
        }
    }

    /// Rows available to page content below the nav bar.
    pub fn content_rows(&self) -> u16 {
        self.height.saturating_sub(NAV_BAR_ROWS)
    }

    /// Advance every enabled effect by one timestep and run the per-frame
    /// scroll responder.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.registry.enabled(EffectId::Console) {
            self.console.tick(elapsed_ms);
        }
        if self.registry.enabled(EffectId::MatrixRain) {
            self.matrix.tick(elapsed_ms);
        }
        if self.registry.enabled(EffectId::Particles) {
            self.particles.tick(elapsed_ms);
        }
        if self.registry.enabled(EffectId::Glitch) {
            self.glitch.tick(elapsed_ms);
        }
        if self.registry.enabled(EffectId::Backdrop) {
            self.backdrop.tick(elapsed_ms);
        }
        if self.registry.enabled(EffectId::EasterEgg) {
            self.egg.tick(elapsed_ms);
        }

        let rows = self.content_rows();
        if self.registry.enabled(EffectId::Reveal) {
            self.reveal
                .tick(&self.layout, self.scroll.y(), rows, elapsed_ms);
        }
        if self.registry.enabled(EffectId::Skills) {
            if !self.skills.armed() {
                if let Some(idx) = self.section_index(SectionKind::Skills) {
                    if self.layout.visible_fraction(idx, self.scroll.y(), rows)
                        >= REVEAL_THRESHOLD
                    {
                        self.skills.arm();
                    }
                }
            }
            self.skills.tick(elapsed_ms);
        }

        // The responder runs once per frame; scroll input only moves the
        // offset.
        if self.registry.enabled(EffectId::Nav) {
            self.nav.recompute(&self.layout, self.scroll.y());
        }
    }

    /// Feed one key code to the sequence detector.
    ///
    /// Returns true when the code completed the target sequence.
    pub fn observe_key(&mut self, code: u16) -> bool {
        if !self.registry.enabled(EffectId::EasterEgg) {
            return false;
        }
        let matched = self.detector.observe(code);
        if matched {
            self.egg.trigger();
        }
        matched
    }

    pub fn apply_action(&mut self, action: PageAction) {
        let rows = self.content_rows();
        match action {
            PageAction::ScrollUp => self.scroll.scroll_by(-1, &self.layout, rows),
            PageAction::ScrollDown => self.scroll.scroll_by(1, &self.layout, rows),
            PageAction::PageUp => self.scroll.scroll_by(-(rows as i32), &self.layout, rows),
            PageAction::PageDown => self.scroll.scroll_by(rows as i32, &self.layout, rows),
            PageAction::Top => self.scroll.scroll_to(0, &self.layout, rows),
            PageAction::Bottom => {
                self.scroll
                    .scroll_to(self.layout.total_rows(), &self.layout, rows)
            }
            PageAction::NextSection => {
                let y = self.scroll.y();
                let next = self
                    .layout
                    .bands()
                    .iter()
                    .map(|b| b.top)
                    .find(|&top| top > y);
                if let Some(top) = next {
                    self.scroll.scroll_to(top, &self.layout, rows);
                }
            }
            PageAction::PrevSection => {
                let y = self.scroll.y();
                let prev = self
                    .layout
                    .bands()
                    .iter()
                    .map(|b| b.top)
                    .filter(|&top| top < y)
                    .last();
                self.scroll.scroll_to(prev.unwrap_or(0), &self.layout, rows);
            }
        }
    }

    /// Apply a viewport resize; rain columns regenerate only when their
    /// derived count changes.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.matrix.resize(width, height, &mut self.rng);
        // Re-clamp the scroll offset against the new viewport.
        let rows = self.content_rows();
        self.scroll.scroll_by(0, &self.layout, rows);
    }

    fn section_index(&self, kind: SectionKind) -> Option<usize> {
        self.layout.bands().iter().position(|b| b.kind == kind)
    }

    /// Whether any effect is mid-animation and the next frame will differ.
    ///
    /// The rain and particle layers animate for the page's lifetime, so this
    /// is false only when those effects are disabled or inert.
    pub fn is_animating(&self) -> bool {
        (self.registry.enabled(EffectId::MatrixRain) && !self.matrix.columns().is_empty())
            || (self.registry.enabled(EffectId::Particles)
                && !self.particles.particles().is_empty())
            || (self.registry.enabled(EffectId::Console) && !self.console.finished())
            || self.egg.overlay_visible()
            || self.egg.shake_offset() != 0
            || (self.skills.armed() && !self.skills.settled())
            || (0..self.layout.bands().len()).any(|i| self.glitch.is_glitched(i))
    }

    /// Cheap digest of the frame-relevant discrete state, for the render gate.
    pub fn fingerprint(&self) -> u64 {
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        let mut mix = |v: u64| {
            hash ^= v;
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        };
        mix(self.scroll.y() as u64);
        mix(self.nav.active().map_or(u64::MAX, |i| i as u64));
        mix(self.nav.scrolled() as u64);
        mix(self.backdrop.variant() as u64);
        mix(self.egg.overlay_visible() as u64);
        mix(self.console.cursor_visible() as u64);
        for line in self.console.lines() {
            mix(line.visible().len() as u64);
        }
        for i in 0..self.layout.bands().len() {
            mix(self.glitch.is_glitched(i) as u64);
            mix((self.reveal.progress(i) * 255.0) as u64);
        }
        hash
    }

    pub fn registry(&self) -> &EffectRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut EffectRegistry {
        &mut self.registry
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn scroll_y(&self) -> u16 {
        self.scroll.y()
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn console(&self) -> &ConsoleIntro {
        &self.console
    }

    pub fn matrix(&self) -> &MatrixRain {
        &self.matrix
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn glitch(&self) -> &GlitchFlicker {
        &self.glitch
    }

    pub fn skills(&self) -> &SkillBars {
        &self.skills
    }

    pub fn reveal(&self) -> &SectionReveal {
        &self.reveal
    }

    pub fn detector(&self) -> &SequenceDetector {
        &self.detector
    }

    pub fn egg(&self) -> &EasterEgg {
        &self.egg
    }

    pub fn backdrop(&self) -> &BackdropShift {
        &self.backdrop
    }
}
