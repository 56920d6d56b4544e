use std::{cell::Cell, rc::Rc};

use crate::{context::Ctx, page::Page};

// each slider rotates on its own interval, one active image at a time
pub fn sliders<P: Page>(ctx: &Rc<Ctx<P>>) {
    for slider in ctx.page.select_all(".slider") {
        let slides = ctx.page.select_within(&slider, "img");
        if slides.is_empty() {
            continue;
        }

        let c = Rc::clone(ctx);
        let index = Cell::new(0usize);
        ctx.tasks.every(ctx.config.slide_period_ms, move || {
            for slide in &slides {
                c.page.remove_class(slide, "active");
            }

            let current = index.get() % slides.len();
            c.page.add_class(&slides[current], "active");
            index.set((current + 1) % slides.len());
        });
    }
}
