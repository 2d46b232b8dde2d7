//! Fixture pages shared by the unit tests.

use crate::dom::{Element, Page};
use crate::types::{Rect, Viewport};

/// Route `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Carousel items on the fixture page (both copies).
pub const ITEM_COUNT: usize = 12;

/// Width of each carousel item. Item 2's center sits on the viewport
/// center, so the first frame starts a zoom.
pub const ITEM_WIDTH: f64 = 240.0;

/// Top of the call-to-action wrapper, below the 800-unit fold.
pub const CTA_TOP: f64 = 1000.0;

/// Full picker page: carousel, call-to-action, template cards and popup.
///
/// Viewport is 1200x800. Cards carry `data-template-id` "1" to "6" with
/// preview images at `/static/img/template{id}.png`.
pub fn picker_page() -> Page {
    let mut page = Page::new(Viewport::new(1200.0, 800.0));
    let body = page.append(None, Element::new("body").with_size(1200.0, 3000.0));

    // Carousel
    let container = page.append(
        Some(body),
        Element::new("div")
            .with_class("slideshow-container")
            .with_rect(Rect::new(0.0, 100.0, 1200.0, 320.0)),
    );
    let track = page.append(
        Some(container),
        Element::new("div").with_class("slideshow-track"),
    );
    for i in 0..ITEM_COUNT {
        let item = page.append(
            Some(track),
            Element::new("div")
                .with_class("template")
                .with_size(ITEM_WIDTH, 280.0),
        );
        page.append(
            Some(item),
            Element::new("img")
                .with_attr("src", format!("/static/img/template{}.png", i % 6 + 1))
                .with_size(ITEM_WIDTH, 280.0),
        );
    }

    // Call to action
    page.append(
        Some(body),
        Element::new("div")
            .with_class("button-wrapper")
            .with_rect(Rect::new(450.0, CTA_TOP, 300.0, 60.0)),
    );

    // Template cards
    let grid = page.append(
        Some(body),
        Element::new("div")
            .with_class("template-grid")
            .with_rect(Rect::new(0.0, 1200.0, 1200.0, 700.0)),
    );
    for id in 1..=6 {
        let column = (id - 1) % 3;
        let row = (id - 1) / 3;
        let card = page.append(
            Some(grid),
            Element::new("div").with_class("template-box").with_rect(Rect::new(
                column as f64 * 400.0,
                row as f64 * 350.0,
                360.0,
                330.0,
            )),
        );
        page.append(
            Some(card),
            Element::new("img")
                .with_attr("src", format!("/static/img/template{id}.png"))
                .with_size(360.0, 260.0),
        );
        page.append(
            Some(card),
            Element::new("button")
                .with_class("select-btn")
                .with_attr("data-template-id", id.to_string())
                .with_text("Select")
                .with_rect(Rect::new(130.0, 280.0, 100.0, 40.0)),
        );
    }

    // Popup
    let modal = page.append(
        Some(body),
        Element::new("div")
            .with_id("template-popup")
            .with_class("popup")
            .with_rect(Rect::new(0.0, 0.0, 1200.0, 800.0)),
    );
    let content = page.append(
        Some(modal),
        Element::new("div")
            .with_class("popup-content")
            .with_rect(Rect::new(300.0, 100.0, 600.0, 600.0)),
    );
    page.append(
        Some(content),
        Element::new("img")
            .with_id("popup-image")
            .with_rect(Rect::new(20.0, 20.0, 260.0, 360.0)),
    );
    page.append(
        Some(content),
        Element::new("h2")
            .with_id("popup-title")
            .with_rect(Rect::new(300.0, 20.0, 280.0, 40.0)),
    );
    page.append(
        Some(content),
        Element::new("ul")
            .with_id("popup-fields")
            .with_rect(Rect::new(300.0, 80.0, 280.0, 300.0)),
    );
    page.append(
        Some(content),
        Element::new("button")
            .with_class("final-select-btn")
            .with_text("Use this template")
            .with_rect(Rect::new(200.0, 520.0, 200.0, 50.0)),
    );

    page
}
