//! Effect trigger registry.
//!
//! Each effect is a one-time setup slot installed at page-ready. Installing a
//! slot twice is a warned no-op, so setup is idempotent. Effects never share
//! state, so installation order carries no meaning; a slot can be disabled to
//! park its effect without touching any other.

use tracing::warn;

/// Identity of every registered effect, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectId {
    MatrixRain,
    Console,
    Particles,
    Glitch,
    Skills,
    Reveal,
    Nav,
    EasterEgg,
    Backdrop,
}

impl EffectId {
    pub const ALL: [EffectId; 9] = [
        EffectId::MatrixRain,
        EffectId::Console,
        EffectId::Particles,
        EffectId::Glitch,
        EffectId::Skills,
        EffectId::Reveal,
        EffectId::Nav,
        EffectId::EasterEgg,
        EffectId::Backdrop,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EffectId::MatrixRain => "matrixRain",
            EffectId::Console => "console",
            EffectId::Particles => "particles",
            EffectId::Glitch => "glitch",
            EffectId::Skills => "skills",
            EffectId::Reveal => "reveal",
            EffectId::Nav => "nav",
            EffectId::EasterEgg => "easterEgg",
            EffectId::Backdrop => "backdrop",
        }
    }

    fn index(self) -> usize {
        EffectId::ALL.iter().position(|&id| id == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    installed: bool,
    enabled: bool,
}

/// Tracks which effects are installed and which are enabled.
#[derive(Debug, Clone)]
pub struct EffectRegistry {
    slots: [Slot; EffectId::ALL.len()],
}

impl EffectRegistry {
    pub fn new() -> Self {
        Self {
            slots: [Slot {
                installed: false,
                enabled: true,
            }; EffectId::ALL.len()],
        }
    }

    /// Mark `id` installed. Returns false (and warns) when it already was;
    /// callers must then skip re-running the setup.
    pub fn install(&mut self, id: EffectId) -> bool {
        let slot = &mut self.slots[id.index()];
        if slot.installed {
            warn!(effect = id.name(), "effect setup requested twice, ignoring");
            return false;
        }
        slot.installed = true;
        true
    }

    pub fn installed(&self, id: EffectId) -> bool {
        self.slots[id.index()].installed
    }

    pub fn installed_count(&self) -> usize {
        self.slots.iter().filter(|s| s.installed).count()
    }

    /// Enable or disable a single effect; others are unaffected.
    pub fn set_enabled(&mut self, id: EffectId, enabled: bool) {
        self.slots[id.index()].enabled = enabled;
    }

    /// Whether the effect should run this frame.
    pub fn enabled(&self, id: EffectId) -> bool {
        let slot = self.slots[id.index()];
        slot.installed && slot.enabled
    }
}

impl Default for EffectRegistry {
    fn default() -> Self {
        Self::new()
    }
}
