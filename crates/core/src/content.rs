//! Static page copy: section bodies, the console script, skill labels.
//!
//! Pure data. Heights and text live here so the layout and the effects can be
//! built without touching the view.

use tui_cyberfolio_types::SectionKind;

/// Console intro script, typed line by line in the home section.
pub const CONSOLE_SCRIPT: [&str; 6] = [
    "$ whoami",
    "guest@neon-deck :: systems tinkerer",
    "$ cat motto.txt",
    "ship small, ship sharp",
    "$ ./portfolio --interactive",
    "[ok] all effects online",
];

/// Skill bar labels, in display order; fill targets come from the types table.
pub const SKILL_LABELS: [&str; 8] = [
    "rust",
    "systems design",
    "network protocols",
    "terminal ui",
    "linux internals",
    "reverse engineering",
    "embedded",
    "distributed systems",
];

/// Project cards: name and one-line blurb.
pub const PROJECTS: [(&str, &str); 4] = [
    ("packet-loom", "wire-format fuzzer with replayable corpora"),
    ("ghostcache", "tiered read-through cache daemon"),
    ("relay-forge", "hot-reloading reverse proxy"),
    ("glyphd", "terminal font atlas inspector"),
];

/// Contact lines.
pub const CONTACT_LINES: [&str; 3] = [
    "mail    guest@neon-deck.example",
    "matrix  @guest:neon-deck.example",
    "source  https://example.com/neon-deck",
];

/// About section body.
pub const ABOUT_LINES: [&str; 4] = [
    "Low-level tinkerer with a soft spot for terminals.",
    "I build small sharp tools and keep them fast.",
    "Daylight: protocol plumbing. Midnight: demo effects.",
    "This page is one of the latter.",
];

/// Body height in rows reserved for a section's content, excluding its
/// heading rows.
pub fn body_rows(kind: SectionKind) -> u16 {
    match kind {
        // Console window frame plus script lines.
        SectionKind::Home => CONSOLE_SCRIPT.len() as u16 + 4,
        SectionKind::About => ABOUT_LINES.len() as u16 + 2,
        SectionKind::Skills => SKILL_LABELS.len() as u16 + 2,
        // Two rows per card: name and blurb.
        SectionKind::Projects => PROJECTS.len() as u16 * 2 + 2,
        SectionKind::Contact => CONTACT_LINES.len() as u16 + 2,
    }
}

/// Total height of a section band: heading, body, trailing gap.
pub fn section_rows(kind: SectionKind) -> u16 {
    // 2 heading rows + body + 2 gap rows.
    4 + body_rows(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_section_has_positive_height() {
        for kind in SectionKind::ALL {
            assert!(section_rows(kind) > body_rows(kind));
            assert!(body_rows(kind) > 0);
        }
    }

    #[test]
    fn test_console_script_fits_home_body() {
        assert!(body_rows(SectionKind::Home) as usize >= CONSOLE_SCRIPT.len());
    }
}
