use std::rc::Rc;

use tracing::debug;

use crate::{
    context::Ctx,
    page::{EventKind, Page, Target},
};

// a single shared overlay backs every modal, clicking it closes whatever is open
pub fn modals<P: Page>(ctx: &Rc<Ctx<P>>) {
    let Some(overlay) = ctx.page.create("div", "overlay") else {
        return;
    };
    ctx.page.append(&ctx.page.body(), &overlay);

    for trigger in ctx.page.select_all("[data-modal]") {
        let Some(modal_id) = ctx.page.attr(&trigger, "data-modal") else {
            continue;
        };

        let c = Rc::clone(ctx);
        let shade = overlay.clone();
        ctx.on(Target::Element(&trigger), EventKind::Click, move |_| {
            if let Some(modal) = c.page.by_id(&modal_id) {
                debug!(modal = %modal_id, "opening modal");
                c.page.add_class(&modal, "show");
                c.page.add_class(&shade, "show");
            }
        });
    }

    let c = Rc::clone(ctx);
    let shade = overlay.clone();
    ctx.on(Target::Element(&overlay), EventKind::Click, move |_| {
        for modal in c.page.select_all(".modal") {
            c.page.remove_class(&modal, "show");
        }
        c.page.remove_class(&shade, "show");
    });
}

pub fn tooltips<P: Page>(ctx: &Rc<Ctx<P>>) {
    for item in ctx.page.select_all("[data-tooltip]") {
        let Some(text) = ctx.page.attr(&item, "data-tooltip") else {
            continue;
        };
        let Some(tooltip) = ctx.page.create("span", "tooltip") else {
            continue;
        };

        ctx.page.set_text(&tooltip, &text);
        ctx.page.append(&item, &tooltip);
    }
}
