use std::rc::Rc;

use tracing::debug;

use crate::{
    context::Ctx,
    limit::{debounced, throttled},
    page::{EventKind, Page, Target},
};

pub const SCROLLED_AFTER: f64 = 50.0;
pub const BACK_TO_TOP_AFTER: f64 = 400.0;
pub const SECTION_LOOKAHEAD: f64 = 100.0;

// header shrink
pub fn navbar<P: Page>(ctx: &Rc<Ctx<P>>) {
    let Some(header) = ctx.page.select("header.site-header") else {
        return;
    };

    let c = Rc::clone(ctx);
    // a single debounced handler; the older 200ms throttled duplicate is not registered, so the
    // header settles once scrolling pauses
    ctx.on(
        Target::Window,
        EventKind::Scroll,
        debounced(ctx, 100, move || {
            c.page
                .toggle_class(&header, "scrolled", Some(c.page.scroll_y() > SCROLLED_AFTER));
        }),
    );
}

pub fn menu_toggle<P: Page>(ctx: &Rc<Ctx<P>>) {
    let (Some(toggle), Some(links)) = (ctx.page.by_id("menu-toggle"), ctx.page.select(".nav-links"))
    else {
        return;
    };

    let c = Rc::clone(ctx);
    let button = toggle.clone();
    ctx.on(Target::Element(&toggle), EventKind::Click, move |_| {
        c.page.toggle_class(&links, "open", None);
        c.page.toggle_class(&button, "active", None);
    });
}

// in-page anchors scroll smoothly, leaving room for the fixed header
pub fn smooth_anchors<P: Page>(ctx: &Rc<Ctx<P>>) {
    for anchor in ctx.page.select_all("a[href^=\"#\"]") {
        let Some(href) = ctx.page.attr(&anchor, "href") else {
            continue;
        };

        let c = Rc::clone(ctx);
        ctx.on(Target::Element(&anchor), EventKind::Click, move |event| {
            event.prevent_default();

            // a bare "#" is not a valid selector, the lookup just comes back empty
            if let Some(target) = c.page.select(&href) {
                c.page
                    .scroll_to(c.page.offset_top(&target) - c.config.anchor_offset);
            }
        });
    }
}

// index of the last section whose top the reader has scrolled past
pub fn active_section(offsets: &[f64], scroll_y: f64) -> Option<usize> {
    if offsets.is_empty() {
        return None;
    }

    let index = offsets
        .iter()
        .rposition(|top| scroll_y + SECTION_LOOKAHEAD >= *top)
        .unwrap_or(0);

    Some(index)
}

pub fn active_link<P: Page>(ctx: &Rc<Ctx<P>>) {
    let sections = ctx.page.select_all("section");
    if sections.is_empty() {
        return;
    }

    let c = Rc::clone(ctx);
    ctx.on(Target::Window, EventKind::Scroll, move |_| {
        let offsets: Vec<f64> = sections.iter().map(|s| c.page.offset_top(s)).collect();
        let Some(index) = active_section(&offsets, c.page.scroll_y()) else {
            return;
        };

        let links = c.page.select_all(".nav-links a");
        for link in &links {
            c.page.remove_class(link, "active");
        }
        if let Some(link) = links.get(index) {
            c.page.add_class(link, "active");
        }
    });
}

pub fn back_to_top<P: Page>(ctx: &Rc<Ctx<P>>) {
    let Some(button) = ctx.page.create("button", "back-to-top") else {
        return;
    };
    ctx.page.set_text(&button, "⬆");
    ctx.page.append(&ctx.page.body(), &button);

    let c = Rc::clone(ctx);
    let shown = button.clone();
    ctx.on(
        Target::Window,
        EventKind::Scroll,
        throttled(ctx, 150, move || {
            c.page
                .toggle_class(&shown, "show", Some(c.page.scroll_y() > BACK_TO_TOP_AFTER));
        }),
    );

    let c = Rc::clone(ctx);
    ctx.on(Target::Element(&button), EventKind::Click, move |_| {
        debug!("scrolling back to top");
        c.page.scroll_to(0.0);
    });
}
