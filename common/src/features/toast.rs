use std::rc::Rc;

use tracing::debug;

use crate::{context::Ctx, page::Page};

// delay before the show class lands, so the css transition has a starting state
const SHOW_AFTER_MS: u32 = 10;
// time allowed for the hide transition before the node goes away
const REMOVE_AFTER_MS: u32 = 300;

pub fn show_toast<P: Page>(ctx: &Rc<Ctx<P>>, message: &str) {
    let Some(toast) = ctx.page.create("div", "toast") else {
        return;
    };
    debug!(text = message, "showing toast");

    ctx.page.set_text(&toast, message);
    ctx.page.append(&ctx.page.body(), &toast);

    let c = Rc::clone(ctx);
    let shown = toast.clone();
    ctx.tasks
        .after(SHOW_AFTER_MS, move || c.page.add_class(&shown, "show"));

    let c = Rc::clone(ctx);
    ctx.tasks.after(ctx.config.toast_duration_ms, move || {
        c.page.remove_class(&toast, "show");

        let inner = Rc::clone(&c);
        c.tasks
            .after(REMOVE_AFTER_MS, move || inner.page.detach(&toast));
    });
}

pub fn welcome_toast<P: Page>(ctx: &Rc<Ctx<P>>) {
    let Some(message) = ctx.config.welcome_toast.clone() else {
        return;
    };

    let c = Rc::clone(ctx);
    ctx.tasks
        .after(ctx.config.welcome_delay_ms, move || show_toast(&c, &message));
}
