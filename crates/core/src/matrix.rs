//! Falling-glyph backdrop.
//!
//! One column per [`COLUMN_STRIDE`] viewport columns. Each column is a strip
//! of [`COLUMN_GLYPHS`] glyphs that translates from fully above the viewport
//! to fully below it and repeats. Column speed, start delay, opacity, and the
//! glyphs themselves are sampled once at generation time.
//!
//! Resizing recomputes the column count; when the count changes the whole set
//! is discarded and regenerated (full replace). When the count is unchanged
//! the existing columns are left untouched.

use crate::rng::SimpleRng;
use tui_cyberfolio_types::{
    COLUMN_DELAY_MAX_MS, COLUMN_FALL_MIN_MS, COLUMN_FALL_SPAN_MS, COLUMN_GLYPHS, COLUMN_STRIDE,
    RAIN_CHARSET,
};

/// One generated rain column.
#[derive(Debug, Clone)]
pub struct RainColumn {
    x: u16,
    glyphs: Vec<char>,
    /// Per-glyph brightness in [0, 1).
    glyph_levels: Vec<f32>,
    /// Whole-column brightness in [0.3, 1.0).
    level: f32,
    fall_ms: u32,
    delay_ms: u32,
    clock_ms: u32,
}

impl RainColumn {
    /// Sample a fresh column for stride slot `index`.
    pub fn generate(index: u16, rng: &mut SimpleRng) -> Self {
        let charset: Vec<char> = RAIN_CHARSET.chars().collect();
        let glyphs: Vec<char> = (0..COLUMN_GLYPHS).map(|_| *rng.pick(&charset)).collect();
        let glyph_levels: Vec<f32> = (0..COLUMN_GLYPHS).map(|_| rng.next_f32()).collect();

        Self {
            x: index * COLUMN_STRIDE,
            glyphs,
            glyph_levels,
            level: rng.next_f32_in(0.3, 0.7),
            fall_ms: rng.next_in(COLUMN_FALL_MIN_MS, COLUMN_FALL_SPAN_MS),
            delay_ms: rng.next_range(COLUMN_DELAY_MAX_MS),
            clock_ms: 0,
        }
    }

    pub fn x(&self) -> u16 {
        self.x
    }

    pub fn fall_ms(&self) -> u32 {
        self.fall_ms
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    fn tick(&mut self, elapsed_ms: u32) {
        self.clock_ms = self.clock_ms.wrapping_add(elapsed_ms);
    }

    /// Fall progress in [0, 1), or `None` while the start delay is pending.
    pub fn progress(&self) -> Option<f32> {
        let active = self.clock_ms.checked_sub(self.delay_ms)?;
        Some((active % self.fall_ms) as f32 / self.fall_ms as f32)
    }

    /// Visible glyphs as `(row, glyph, brightness)` for a viewport of
    /// `height` rows.
    ///
    /// The strip top moves from `-height` (fully above) to `+height` (fully
    /// below) over one fall cycle.
    pub fn visible_glyphs(&self, height: u16) -> impl Iterator<Item = (u16, char, f32)> + '_ {
        let h = height as i32;
        let top = self.progress().map(|t| -h + (t * (2 * h) as f32) as i32);
        (0..self.glyphs.len()).filter_map(move |i| {
            let top = top?;
            let row = top + i as i32;
            if row < 0 || row >= h {
                return None;
            }
            Some((row as u16, self.glyphs[i], self.level * self.glyph_levels[i]))
        })
    }
}

/// The whole backdrop: generated columns plus the viewport size they target.
#[derive(Debug, Clone)]
pub struct MatrixRain {
    columns: Vec<RainColumn>,
    width: u16,
    height: u16,
}

impl MatrixRain {
    /// Derived column count for a viewport width.
    pub fn column_count(width: u16) -> usize {
        (width / COLUMN_STRIDE) as usize
    }

    pub fn new(width: u16, height: u16, rng: &mut SimpleRng) -> Self {
        let mut rain = Self {
            columns: Vec::new(),
            width,
            height,
        };
        rain.regenerate(rng);
        rain
    }

    fn regenerate(&mut self, rng: &mut SimpleRng) {
        let count = Self::column_count(self.width);
        self.columns = (0..count)
            .map(|i| RainColumn::generate(i as u16, rng))
            .collect();
    }

    /// Apply a viewport resize.
    ///
    /// Regenerates all columns only when the derived count changes; otherwise
    /// the existing columns (and their animation state) are kept.
    pub fn resize(&mut self, width: u16, height: u16, rng: &mut SimpleRng) {
        self.height = height;
        if width == self.width && Self::column_count(width) == self.columns.len() {
            return;
        }
        let count_changed = Self::column_count(width) != self.columns.len();
        self.width = width;
        if count_changed {
            self.regenerate(rng);
        }
    }

    pub fn tick(&mut self, elapsed_ms: u32) {
        for col in &mut self.columns {
            col.tick(elapsed_ms);
        }
    }

    pub fn columns(&self) -> &[RainColumn] {
        &self.columns
    }

    pub fn height(&self) -> u16 {
        self.height
    }
}
