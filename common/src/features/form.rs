use std::rc::Rc;

use tracing::debug;

use crate::{
    context::Ctx,
    page::{EventKind, Page, Target},
};

pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const MISSING_MESSAGE: &str = "Please fill in all fields.";

const INVALID_BORDER: &str = "red";
const VALID_BORDER: &str = "var(--accent)";

// a field passes when anything other than whitespace was typed into it
pub fn field_ok(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn contact_form<P: Page>(ctx: &Rc<Ctx<P>>) {
    let Some(form) = ctx.page.select(".contact-form") else {
        return;
    };

    let c = Rc::clone(ctx);
    let target = form.clone();
    ctx.on(Target::Element(&form), EventKind::Submit, move |event| {
        event.prevent_default();

        let mut valid = true;
        for field in c.page.select_within(&target, "input, textarea") {
            if field_ok(&c.page.field_value(&field)) {
                c.page.set_style(&field, "border-color", VALID_BORDER);
            } else {
                c.page.set_style(&field, "border-color", INVALID_BORDER);
                valid = false;
            }
        }

        debug!(valid, "contact form submitted");

        if valid {
            c.page.alert(SENT_MESSAGE);
            c.page.reset_form(&target);
        } else {
            c.page.alert(MISSING_MESSAGE);
        }
    });
}
