use std::rc::Rc;

use crate::{
    context::Ctx,
    page::{EventKind, Page, Target},
};

pub fn tabs<P: Page>(ctx: &Rc<Ctx<P>>) {
    let buttons = Rc::new(ctx.page.select_all("[data-tab]"));
    if buttons.is_empty() {
        return;
    }
    let panels = Rc::new(ctx.page.select_all(".tab-panel"));

    for button in buttons.iter() {
        let Some(panel_id) = ctx.page.attr(button, "data-tab") else {
            continue;
        };

        let c = Rc::clone(ctx);
        let (all_buttons, all_panels) = (Rc::clone(&buttons), Rc::clone(&panels));
        let clicked = button.clone();
        ctx.on(Target::Element(button), EventKind::Click, move |_| {
            for b in all_buttons.iter() {
                c.page.remove_class(b, "active");
            }
            for p in all_panels.iter() {
                c.page.remove_class(p, "active");
            }

            c.page.add_class(&clicked, "active");
            if let Some(panel) = c.page.by_id(&panel_id) {
                c.page.add_class(&panel, "active");
            }
        });
    }
}
