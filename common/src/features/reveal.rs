use std::rc::Rc;

use crate::{
    context::Ctx,
    limit::{debounced, throttled},
    page::{EventKind, Page, Target},
};

pub const DEFAULT_PARALLAX_SPEED: f64 = 0.3;

#[derive(Clone, Copy, Debug)]
enum Limiter {
    Throttle(u32),
    Debounce(u32),
}

// runs `check` on load and then on every rate-limited scroll
fn on_load_and_scroll<P, F>(ctx: &Rc<Ctx<P>>, limiter: Limiter, check: F)
where
    P: Page,
    F: Fn() + 'static,
{
    let check = Rc::new(check);

    let on_load = Rc::clone(&check);
    ctx.on(Target::Window, EventKind::Load, move |_| on_load());

    match limiter {
        Limiter::Throttle(wait) => {
            ctx.on(Target::Window, EventKind::Scroll, throttled(ctx, wait, move || check()));
        }
        Limiter::Debounce(delay) => {
            ctx.on(Target::Window, EventKind::Scroll, debounced(ctx, delay, move || check()));
        }
    }
}

// [data-animate] elements fade in once they come into view
pub fn fade_in<P: Page>(ctx: &Rc<Ctx<P>>) {
    let elements = ctx.page.select_all("[data-animate]");
    if elements.is_empty() {
        return;
    }

    let c = Rc::clone(ctx);
    on_load_and_scroll(ctx, Limiter::Throttle(200), move || {
        for el in &elements {
            if c.in_view(el) {
                c.page.add_class(el, "visible");
            }
        }
    });
}

// the cards of a .stagger group are revealed one after another, the visibility check for each
// card happens when its delay runs out rather than when the scroll arrived
pub fn stagger<P: Page>(ctx: &Rc<Ctx<P>>) {
    if ctx.page.select(".stagger").is_none() {
        return;
    }

    let c = Rc::clone(ctx);
    on_load_and_scroll(ctx, Limiter::Throttle(200), move || {
        for group in c.page.select_all(".stagger") {
            for (index, card) in c.page.select_within(&group, ".card").into_iter().enumerate() {
                let delay = u32::try_from(index)
                    .unwrap_or(u32::MAX)
                    .saturating_mul(c.config.stagger_step_ms);

                let inner = Rc::clone(&c);
                c.tasks.after(delay, move || {
                    if inner.in_view(&card) {
                        inner.page.add_class(&card, "visible");
                    }
                });
            }
        }
    });
}

pub fn scroll_reveal<P: Page>(ctx: &Rc<Ctx<P>>) {
    let elements = ctx.page.select_all(".scroll-reveal");
    if elements.is_empty() {
        return;
    }

    let c = Rc::clone(ctx);
    on_load_and_scroll(ctx, Limiter::Debounce(100), move || {
        for el in &elements {
            if c.in_view(el) {
                c.page.add_class(el, "revealed");
            }
        }
    });
}

// .observe elements are marked as soon as any part of them overlaps the viewport
pub fn observe<P: Page>(ctx: &Rc<Ctx<P>>) {
    let elements = ctx.page.select_all(".observe");
    if elements.is_empty() {
        return;
    }

    let c = Rc::clone(ctx);
    on_load_and_scroll(ctx, Limiter::Throttle(200), move || {
        for el in &elements {
            if c.intersects(el) {
                c.page.add_class(el, "in-view");
            }
        }
    });
}

pub fn progress_bars<P: Page>(ctx: &Rc<Ctx<P>>) {
    let bars = ctx.page.select_all(".progress-bar");
    if bars.is_empty() {
        return;
    }

    let c = Rc::clone(ctx);
    ctx.on(
        Target::Window,
        EventKind::Scroll,
        debounced(ctx, 100, move || {
            let height = c.page.viewport().height;
            for bar in &bars {
                if c.page.rect(bar).top >= height {
                    continue;
                }
                if let Some(value) = c.page.attr(bar, "data-value") {
                    c.page.set_style(bar, "width", &format!("{}%", value.trim()));
                }
            }
        }),
    );
}

pub fn parallax_speed(attr: Option<&str>) -> f64 {
    attr.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|speed| speed.is_finite())
        .unwrap_or(DEFAULT_PARALLAX_SPEED)
}

pub fn parallax<P: Page>(ctx: &Rc<Ctx<P>>) {
    if ctx.page.select(".parallax").is_none() {
        return;
    }

    let c = Rc::clone(ctx);
    ctx.on(
        Target::Window,
        EventKind::Scroll,
        throttled(ctx, 10, move || {
            let scrolled = c.page.scroll_y();
            for el in c.page.select_all(".parallax") {
                let speed = parallax_speed(c.page.attr(&el, "data-speed").as_deref());
                c.page
                    .set_style(&el, "transform", &format!("translateY({}px)", scrolled * speed));
            }
        }),
    );
}
