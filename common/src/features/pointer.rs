use std::rc::Rc;

use crate::{
    context::Ctx,
    page::{EventKind, Page, Target},
};

pub const RIPPLE_MS: u32 = 600;

// follower dot that tracks the mouse and grows over links and buttons
pub fn cursor<P: Page>(ctx: &Rc<Ctx<P>>) {
    let Some(cursor) = ctx.page.create("div", "interactive-cursor") else {
        return;
    };
    ctx.page.append(&ctx.page.body(), &cursor);

    let c = Rc::clone(ctx);
    let follower = cursor.clone();
    ctx.on(Target::Document, EventKind::MouseMove, move |event| {
        c.page.set_style(&follower, "left", &format!("{}px", event.client_x));
        c.page.set_style(&follower, "top", &format!("{}px", event.client_y));
    });

    for el in ctx.page.select_all("a, button") {
        let c = Rc::clone(ctx);
        let follower = cursor.clone();
        ctx.on(Target::Element(&el), EventKind::MouseEnter, move |_| {
            c.page.add_class(&follower, "hover");
        });

        let c = Rc::clone(ctx);
        let follower = cursor.clone();
        ctx.on(Target::Element(&el), EventKind::MouseLeave, move |_| {
            c.page.remove_class(&follower, "hover");
        });
    }
}

pub fn ripples<P: Page>(ctx: &Rc<Ctx<P>>) {
    for button in ctx.page.select_all("button, .btn") {
        let c = Rc::clone(ctx);
        let host = button.clone();
        ctx.on(Target::Element(&button), EventKind::Click, move |event| {
            let Some(ripple) = c.page.create("span", "ripple") else {
                return;
            };
            c.page.set_style(&ripple, "left", &format!("{}px", event.offset_x));
            c.page.set_style(&ripple, "top", &format!("{}px", event.offset_y));
            c.page.append(&host, &ripple);

            let inner = Rc::clone(&c);
            c.tasks.after(RIPPLE_MS, move || inner.page.detach(&ripple));
        });
    }
}

pub fn skill_badges<P: Page>(ctx: &Rc<Ctx<P>>) {
    for badge in ctx.page.select_all(".skill-badge") {
        let c = Rc::clone(ctx);
        let target = badge.clone();
        ctx.on(Target::Element(&badge), EventKind::MouseEnter, move |_| {
            let color = format!("hsl({}, 70%, 60%)", c.random_hue());
            c.page.set_style(&target, "background", &color);
        });

        let c = Rc::clone(ctx);
        let target = badge.clone();
        ctx.on(Target::Element(&badge), EventKind::MouseLeave, move |_| {
            c.page.set_style(&target, "background", "var(--glass)");
        });
    }
}

pub fn color_button<P: Page>(ctx: &Rc<Ctx<P>>) {
    let Some(button) = ctx.page.by_id("color-btn") else {
        return;
    };

    let c = Rc::clone(ctx);
    ctx.on(Target::Element(&button), EventKind::Click, move |_| {
        let gradient = format!(
            "linear-gradient(180deg, hsl({}, 40%, 15%), hsl({}, 40%, 10%) 120%)",
            c.random_hue(),
            c.random_hue()
        );
        c.page.set_style(&c.page.body(), "background", &gradient);
    });
}
