//! PageView: maps the `Page` aggregate into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tui_cyberfolio_core::content;
use tui_cyberfolio_core::particles::ParticleColor;
use tui_cyberfolio_engine::Page;
use tui_cyberfolio_types::{RAIN_CHARSET, NAV_BAR_ROWS, SectionKind};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const MATRIX_GREEN: Rgb = Rgb::new(0, 255, 65);
const ACCENT_RED: Rgb = Rgb::new(255, 0, 0);
const COPPER: Rgb = Rgb::new(184, 115, 51);
const NEON_GREEN: Rgb = Rgb::new(57, 255, 20);
const TEXT: Rgb = Rgb::new(200, 220, 200);

/// Background tints rotated by the backdrop shifter.
const BACKDROP_TINTS: [Rgb; 3] = [Rgb::new(0, 0, 0), Rgb::new(0, 12, 0), Rgb::new(10, 0, 4)];

/// A lightweight terminal renderer for the portfolio page.
pub struct PageView {
    /// Left margin of section content in cells.
    content_margin: u16,
}

impl Default for PageView {
    fn default() -> Self {
        Self { content_margin: 2 }
    }
}

impl PageView {
    /// Render the page into an existing framebuffer.
    ///
    /// Allocation-free hot path: callers reuse one framebuffer across frames
    /// and only resize when the terminal size changes.
    pub fn render_into(&self, page: &Page, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);

        let bg = BACKDROP_TINTS[(page.backdrop().variant() as usize) % BACKDROP_TINTS.len()];
        let base = CellStyle::with(TEXT, bg);
        fb.clear(Cell::new(' ', base));

        self.draw_rain(page, viewport, bg, fb);
        self.draw_particles(page, viewport, bg, fb);
        self.draw_sections(page, viewport, bg, fb);
        self.draw_nav_bar(page, viewport, bg, fb);
        if page.egg().overlay_visible() {
            self.draw_egg_overlay(page, viewport, fb);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, page: &Page, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(page, viewport, &mut fb);
        fb
    }

    fn draw_rain(&self, page: &Page, viewport: Viewport, bg: Rgb, fb: &mut FrameBuffer) {
        for col in page.matrix().columns() {
            if col.x() >= viewport.width {
                continue;
            }
            for (row, glyph, level) in col.visible_glyphs(viewport.height) {
                let style = CellStyle {
                    fg: MATRIX_GREEN.scale(0.2 + 0.8 * level),
                    bg,
                    bold: false,
                    dim: level < 0.3,
                };
                fb.put_char(col.x(), row, glyph, style);
            }
        }
    }

    fn draw_particles(&self, page: &Page, viewport: Viewport, bg: Rgb, fb: &mut FrameBuffer) {
        for p in page.particles().particles() {
            let (x, y) = p.position(viewport.width, viewport.height);
            let glyph = if p.size() < 3.0 {
                '·'
            } else if p.size() < 4.5 {
                '•'
            } else {
                '●'
            };
            let color = match p.color() {
                ParticleColor::Green => MATRIX_GREEN,
                ParticleColor::Red => ACCENT_RED,
                ParticleColor::Copper => COPPER,
                ParticleColor::Neon => NEON_GREEN,
            };
            let style = CellStyle {
                fg: color.scale(0.3 + p.opacity()),
                bg,
                bold: false,
                dim: true,
            };
            fb.put_char(x, y, glyph, style);
        }
    }

    fn draw_nav_bar(&self, page: &Page, viewport: Viewport, bg: Rgb, fb: &mut FrameBuffer) {
        if viewport.height == 0 {
            return;
        }
        // The bar covers the rain behind it.
        fb.fill_rect(0, 0, viewport.width, NAV_BAR_ROWS.min(viewport.height), ' ',
            CellStyle::with(TEXT, bg));

        let mut x = self.content_margin;
        for (i, band) in page.layout().bands().iter().enumerate() {
            let title = band.kind.title();
            let active = page.nav().active() == Some(i);
            let style = if active {
                CellStyle::with(Rgb::new(0, 0, 0), MATRIX_GREEN).bold()
            } else {
                CellStyle::with(MATRIX_GREEN.scale(0.7), bg)
            };
            if active {
                fb.put_char(x, 0, ' ', style);
                fb.put_str(x + 1, 0, title, style);
                fb.put_char(x + 1 + title.chars().count() as u16, 0, ' ', style);
                x += title.chars().count() as u16 + 2;
            } else {
                fb.put_str(x, 0, title, style);
                x += title.chars().count() as u16;
            }
            x += 2;
            if x >= viewport.width {
                break;
            }
        }

        // Separator line doubles as the scrolled indicator.
        let rule = if page.nav().scrolled() {
            CellStyle::with(MATRIX_GREEN, bg)
        } else {
            CellStyle::with(MATRIX_GREEN.scale(0.35), bg).dim()
        };
        if viewport.height > 1 {
            fb.fill_rect(0, 1, viewport.width, 1, '─', rule);
        }
    }

    fn draw_sections(&self, page: &Page, viewport: Viewport, bg: Rgb, fb: &mut FrameBuffer) {
        let content_rows = viewport.height.saturating_sub(NAV_BAR_ROWS);
        if content_rows == 0 {
            return;
        }
        let scroll = page.scroll_y();
        let shake = page.egg().shake_offset();
        let margin = (self.content_margin as i32 + shake as i32).max(0) as u16;

        for (i, band) in page.layout().bands().iter().enumerate() {
            let progress = page.reveal().progress(i);
            if progress <= 0.0 {
                continue;
            }
            let rise = page.reveal().rise_rows(i);
            let fading = progress < 1.0;

            for local in 0..band.height {
                let doc_row = band.top + local;
                // Rising sections draw one row higher while they fade in.
                let Some(rel) = (doc_row.saturating_sub(rise)).checked_sub(scroll) else {
                    continue;
                };
                if rel >= content_rows {
                    continue;
                }
                let y = NAV_BAR_ROWS + rel;
                self.draw_section_row(page, i, band.kind, local, margin, y, fading, bg, fb, viewport);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_section_row(
        &self,
        page: &Page,
        section_index: usize,
        kind: SectionKind,
        local: u16,
        x: u16,
        y: u16,
        fading: bool,
        bg: Rgb,
        fb: &mut FrameBuffer,
        viewport: Viewport,
    ) {
        let text_style = if fading {
            CellStyle::with(TEXT.scale(0.5), bg).dim()
        } else {
            CellStyle::with(TEXT, bg)
        };

        match local {
            0 => self.draw_title(page, section_index, kind, x, y, fading, bg, fb),
            1 => {}
            local => {
                let body_row = (local - 2) as usize;
                match kind {
                    SectionKind::Home => {
                        self.draw_console_row(page, body_row, x, y, bg, fb, viewport)
                    }
                    SectionKind::About => {
                        if let Some(line) = content::ABOUT_LINES.get(body_row) {
                            fb.put_str(x, y, line, text_style);
                        }
                    }
                    SectionKind::Skills => {
                        self.draw_skill_row(page, body_row, x, y, bg, fb, viewport)
                    }
                    SectionKind::Projects => {
                        let card = body_row / 2;
                        if let Some(&(name, blurb)) = content::PROJECTS.get(card) {
                            if body_row % 2 == 0 {
                                fb.put_str(x, y, "▸ ", CellStyle::with(MATRIX_GREEN, bg));
                                fb.put_str(
                                    x + 2,
                                    y,
                                    name,
                                    CellStyle::with(TEXT, bg).bold(),
                                );
                            } else {
                                fb.put_str(x + 2, y, blurb, text_style.dim());
                            }
                        }
                    }
                    SectionKind::Contact => {
                        if let Some(line) = content::CONTACT_LINES.get(body_row) {
                            fb.put_str(x, y, line, text_style);
                        }
                    }
                }
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_title(
        &self,
        page: &Page,
        section_index: usize,
        kind: SectionKind,
        x: u16,
        y: u16,
        fading: bool,
        bg: Rgb,
        fb: &mut FrameBuffer,
    ) {
        let glitched = page.glitch().is_glitched(section_index);
        let marker_style = CellStyle::with(MATRIX_GREEN, bg).bold();
        fb.put_str(x, y, "▌ ", marker_style);

        let title = kind.title();
        if glitched {
            let seed = page.glitch().scramble_seed(section_index);
            let mut cx = x + 2;
            for (pos, _) in title.chars().enumerate() {
                let ch = scramble_char(seed, pos);
                fb.put_char(cx, y, ch, CellStyle::with(ACCENT_RED, bg).bold());
                cx += 1;
            }
        } else {
            let style = if fading {
                CellStyle::with(MATRIX_GREEN.scale(0.5), bg).dim()
            } else {
                CellStyle::with(MATRIX_GREEN, bg).bold()
            };
            fb.put_str(x + 2, y, title, style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_console_row(
        &self,
        page: &Page,
        body_row: usize,
        x: u16,
        y: u16,
        bg: Rgb,
        fb: &mut FrameBuffer,
        viewport: Viewport,
    ) {
        let lines = page.console().lines();
        let box_w = viewport
            .width
            .saturating_sub(x + self.content_margin)
            .min(60);
        if box_w < 4 {
            return;
        }
        let box_h = lines.len() as u16 + 2;
        let border = CellStyle::with(MATRIX_GREEN.scale(0.6), bg);

        // body_row 0 is the box top, rows 1..=lines are content, last is the
        // box bottom.
        if body_row == 0 {
            draw_box_edge(fb, x, y, box_w, BoxEdge::Top, border);
            return;
        }
        if body_row as u16 + 1 == box_h {
            draw_box_edge(fb, x, y, box_w, BoxEdge::Bottom, border);
            return;
        }
        if body_row as u16 >= box_h {
            return;
        }

        let line_idx = body_row - 1;
        // Solid interior so the rain does not bleed through the window.
        fb.fill_rect(x + 1, y, box_w - 2, 1, ' ', CellStyle::with(TEXT, bg));
        draw_box_edge(fb, x, y, box_w, BoxEdge::Sides, border);
        let Some(line) = lines.get(line_idx) else {
            return;
        };

        let is_command = line.visible().starts_with('$');
        let style = if is_command {
            CellStyle::with(MATRIX_GREEN, bg)
        } else {
            CellStyle::with(TEXT, bg)
        };
        let text_x = x + 2;
        fb.put_str(text_x, y, line.visible(), style);

        // Block cursor sits at the end of the last line that has begun.
        let cursor_here = lines
            .iter()
            .rposition(|l| l.started())
            .is_some_and(|last| last == line_idx);
        if cursor_here && page.console().cursor_visible() {
            let cx = text_x + line.visible().chars().count() as u16;
            if cx + 1 < x + box_w {
                fb.put_char(cx, y, '█', CellStyle::with(MATRIX_GREEN, bg));
            }
        }
    }

    fn draw_skill_row(
        &self,
        page: &Page,
        body_row: usize,
        x: u16,
        y: u16,
        bg: Rgb,
        fb: &mut FrameBuffer,
        viewport: Viewport,
    ) {
        let skills = page.skills();
        if body_row >= skills.len() {
            return;
        }
        let label_w = 20u16;
        let bar_w = viewport
            .width
            .saturating_sub(x + label_w + 8)
            .min(30);
        if bar_w == 0 {
            return;
        }

        fb.put_str(x, y, skills.label(body_row), CellStyle::with(TEXT, bg));

        let fill = skills.fill(body_row);
        let filled = ((fill / 100.0) * bar_w as f32).round() as u16;
        let bar_x = x + label_w;
        for dx in 0..bar_w {
            let (ch, style) = if dx < filled {
                ('█', CellStyle::with(MATRIX_GREEN, bg))
            } else {
                ('░', CellStyle::with(MATRIX_GREEN.scale(0.25), bg).dim())
            };
            fb.put_char(bar_x + dx, y, ch, style);
        }
        fb.put_u32(
            bar_x + bar_w + 1,
            y,
            fill.round() as u32,
            CellStyle::with(TEXT, bg),
        );
        fb.put_char(
            bar_x + bar_w + 1 + digits(fill.round() as u32),
            y,
            '%',
            CellStyle::with(TEXT, bg).dim(),
        );
    }

    fn draw_egg_overlay(&self, page: &Page, viewport: Viewport, fb: &mut FrameBuffer) {
        const LINES: [&str; 3] = [
            "SEQUENCE ACCEPTED",
            "welcome to the hidden layer of the deck",
            "guest@neon-deck:~$ sudo access_granted",
        ];
        let box_w = (LINES.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16 + 6)
            .min(viewport.width);
        let box_h = (LINES.len() as u16 + 4).min(viewport.height);
        if box_w < 4 || box_h < 4 {
            return;
        }
        let x0 = (viewport.width - box_w) / 2;
        let y0 = (viewport.height - box_h) / 2;

        let fading = page.egg().overlay_fading();
        let frame_color = if fading {
            MATRIX_GREEN.scale(0.4)
        } else {
            MATRIX_GREEN
        };
        let border = CellStyle::with(frame_color, Rgb::new(0, 0, 0)).bold();
        let text = if fading {
            CellStyle::with(TEXT.scale(0.5), Rgb::new(0, 0, 0)).dim()
        } else {
            CellStyle::with(TEXT, Rgb::new(0, 0, 0))
        };

        fb.fill_rect(x0, y0, box_w, box_h, ' ', CellStyle::with(TEXT, Rgb::new(0, 0, 0)));
        draw_border(fb, x0, y0, box_w, box_h, border);

        for (i, line) in LINES.iter().enumerate() {
            let lx = x0 + (box_w - (line.chars().count() as u16).min(box_w)) / 2;
            let ly = y0 + 2 + i as u16;
            let style = if i == 0 { border } else { text };
            if ly + 1 < y0 + box_h {
                fb.put_str(lx, ly, line, style);
            }
        }
    }
}

fn digits(mut n: u32) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

/// Deterministic scramble glyph for a glitched title position.
fn scramble_char(seed: u32, pos: usize) -> char {
    let charset: &str = RAIN_CHARSET;
    let count = charset.chars().count() as u32;
    let idx = seed.wrapping_add(pos as u32 * 31) % count;
    charset.chars().nth(idx as usize).unwrap_or('#')
}

enum BoxEdge {
    Top,
    Bottom,
    Sides,
}

fn draw_box_edge(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, edge: BoxEdge, style: CellStyle) {
    if w < 2 {
        return;
    }
    match edge {
        BoxEdge::Top => {
            fb.put_char(x, y, '┌', style);
            for dx in 1..w - 1 {
                fb.put_char(x + dx, y, '─', style);
            }
            fb.put_char(x + w - 1, y, '┐', style);
        }
        BoxEdge::Bottom => {
            fb.put_char(x, y, '└', style);
            for dx in 1..w - 1 {
                fb.put_char(x + dx, y, '─', style);
            }
            fb.put_char(x + w - 1, y, '┘', style);
        }
        BoxEdge::Sides => {
            fb.put_char(x, y, '│', style);
            fb.put_char(x + w - 1, y, '│', style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
