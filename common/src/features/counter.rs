use std::rc::Rc;

use tracing::debug;

use crate::{
    context::Ctx,
    limit::debounced,
    page::{EventKind, Page, Target},
};

// one tick of the counter animation
//
// the value moves by target/steps rounded up and is clamped so the display never overshoots
pub fn next_count(current: f64, target: f64, steps: f64) -> f64 {
    let step = target / steps;
    if current >= target || !(step > 0.0) {
        return target;
    }

    (current + step).ceil().min(target).max(current.ceil())
}

// whole numbers print without a fractional part
pub fn format_count(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn tick<P: Page>(ctx: Rc<Ctx<P>>, counter: P::Element, target: f64) {
    let current = parse_number(&ctx.page.text(&counter)).unwrap_or(0.0);
    let next = next_count(current, target, ctx.config.counter_steps);
    ctx.page.set_text(&counter, &format_count(next));

    if next < target {
        let again = Rc::clone(&ctx);
        ctx.tasks
            .after(ctx.config.counter_tick_ms, move || tick(again, counter, target));
    }
}

pub fn counters<P: Page>(ctx: &Rc<Ctx<P>>) {
    let counters = ctx.page.select_all(".counter");
    if counters.is_empty() {
        return;
    }

    let c = Rc::clone(ctx);
    ctx.on(
        Target::Window,
        EventKind::Scroll,
        debounced(ctx, 100, move || {
            for counter in &counters {
                let Some(target) = c.page.attr(counter, "data-target").as_deref().and_then(parse_number)
                else {
                    continue;
                };

                if c.in_view(counter) {
                    debug!(goal = target, "starting counter animation");
                    tick(Rc::clone(&c), counter.clone(), target);
                }
            }
        }),
    );
}
