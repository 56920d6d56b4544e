use std::rc::Rc;

use crate::{context::Ctx, page::Page};

// typewriter effect, one character per tick starting right away
pub fn typing<P: Page>(ctx: &Rc<Ctx<P>>) {
    let Some(el) = ctx.page.select(".typing") else {
        return;
    };

    let text = ctx
        .page
        .attr(&el, "data-text")
        .unwrap_or_else(|| ctx.config.typing_text.clone());

    type_next(Rc::clone(ctx), el, text.chars().collect(), 0);
}

fn type_next<P: Page>(ctx: Rc<Ctx<P>>, el: P::Element, chars: Vec<char>, index: usize) {
    let Some(c) = chars.get(index) else {
        return;
    };

    let mut typed = ctx.page.text(&el);
    typed.push(*c);
    ctx.page.set_text(&el, &typed);

    let again = Rc::clone(&ctx);
    ctx.tasks.after(ctx.config.typing_delay_ms, move || {
        type_next(again, el, chars, index + 1)
    });
}

pub fn quotes<P: Page>(ctx: &Rc<Ctx<P>>) {
    let Some(quote_box) = ctx.page.select(".quote-box") else {
        return;
    };
    if ctx.config.quotes.is_empty() {
        return;
    }

    let show = {
        let c = Rc::clone(ctx);
        move || {
            if let Some(index) = c.random_index(c.config.quotes.len()) {
                c.page.set_text(&quote_box, &c.config.quotes[index]);
            }
        }
    };

    show();
    ctx.tasks.every(ctx.config.quote_period_ms, show);
}

pub fn year<P: Page>(ctx: &Rc<Ctx<P>>, year: i32) {
    if let Some(el) = ctx.page.select(".year") {
        ctx.page.set_text(&el, &year.to_string());
    }
}
