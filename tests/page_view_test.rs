use tui_cyberfolio::engine::{EffectId, Page};
use tui_cyberfolio::term::{FrameBuffer, PageView, Viewport};
use tui_cyberfolio::types::{KONAMI_CODE, PageAction, SectionKind, TICK_MS};

fn frame_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

fn settled_page(w: u16, h: u16) -> Page {
    let mut page = Page::new(77, w, h);
    for _ in 0..60 {
        page.tick(TICK_MS);
    }
    page
}

#[test]
fn nav_bar_shows_all_titles_with_one_active() {
    let page = settled_page(110, 32);
    let fb = PageView::default().render(&page, Viewport::new(110, 32));

    let top = fb.row_text(0);
    for kind in SectionKind::ALL {
        assert!(top.contains(kind.title()));
    }
    assert_eq!(page.nav().active(), Some(0));
}

#[test]
fn console_text_grows_as_the_script_types() {
    let mut page = Page::new(77, 110, 32);
    let view = PageView::default();

    // Before the first line's delay nothing is typed.
    page.tick(TICK_MS);
    let early = frame_text(&view.render(&page, Viewport::new(110, 32)));
    assert!(!early.contains("$ whoami"));

    // Run well past every line delay plus typing time.
    for _ in 0..1500 {
        page.tick(TICK_MS);
    }
    let late = frame_text(&view.render(&page, Viewport::new(110, 32)));
    assert!(late.contains("$ whoami"));
    assert!(page.console().finished());
}

#[test]
fn egg_overlay_renders_and_disappears() {
    let mut page = settled_page(110, 32);
    for code in KONAMI_CODE {
        page.observe_key(code);
    }
    let view = PageView::default();
    let during = frame_text(&view.render(&page, Viewport::new(110, 32)));
    assert!(during.contains("SEQUENCE ACCEPTED"));

    // Run the overlay out.
    for _ in 0..250 {
        page.tick(TICK_MS);
    }
    let after = frame_text(&view.render(&page, Viewport::new(110, 32)));
    assert!(!after.contains("SEQUENCE ACCEPTED"));
}

#[test]
fn skill_bars_render_once_section_is_reached() {
    let mut page = settled_page(110, 26);
    page.apply_action(PageAction::NextSection);
    page.apply_action(PageAction::NextSection);
    for _ in 0..200 {
        page.tick(TICK_MS);
    }

    let text = frame_text(&PageView::default().render(&page, Viewport::new(110, 26)));
    assert!(text.contains("rust"));
    assert!(text.contains('%'));
    assert!(page.skills().settled());
}

#[test]
fn rain_layer_is_parked_when_disabled() {
    let mut page = Page::new(77, 110, 32);
    page.registry_mut().set_enabled(EffectId::MatrixRain, false);
    for _ in 0..60 {
        page.tick(TICK_MS);
    }
    // Rendering still succeeds with the backdrop layer missing.
    let fb = PageView::default().render(&page, Viewport::new(110, 32));
    assert_eq!(fb.width(), 110);
}

#[test]
fn render_into_reuses_buffer_across_resizes() {
    let page = settled_page(110, 32);
    let view = PageView::default();
    let mut fb = FrameBuffer::new(1, 1);

    view.render_into(&page, Viewport::new(110, 32), &mut fb);
    assert_eq!((fb.width(), fb.height()), (110, 32));

    view.render_into(&page, Viewport::new(60, 20), &mut fb);
    assert_eq!((fb.width(), fb.height()), (60, 20));
}
