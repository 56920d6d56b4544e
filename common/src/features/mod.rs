use std::rc::Rc;

use tracing::{Level, info, instrument};

use crate::{context::Ctx, page::Page};

pub mod counter;
pub mod form;
pub mod modal;
pub mod nav;
pub mod particles;
pub mod pointer;
pub mod reveal;
pub mod slider;
pub mod tabs;
pub mod text;
pub mod theme;
pub mod toast;

pub use toast::show_toast;

// wires every feature to the page
//
// the order matters in one place: ripples and the cursor hover pick up every button present
// when they run, so the back-to-top button has to exist by then
#[instrument(level=Level::DEBUG, skip_all)]
pub fn install<P: Page>(ctx: &Rc<Ctx<P>>, year: i32) {
    nav::navbar(ctx);
    nav::menu_toggle(ctx);
    nav::smooth_anchors(ctx);
    nav::active_link(ctx);
    nav::back_to_top(ctx);

    reveal::fade_in(ctx);
    reveal::stagger(ctx);
    reveal::scroll_reveal(ctx);
    reveal::observe(ctx);
    reveal::progress_bars(ctx);
    reveal::parallax(ctx);
    counter::counters(ctx);

    theme::theme_toggle(ctx);
    form::contact_form(ctx);

    text::typing(ctx);
    text::quotes(ctx);
    text::year(ctx, year);

    pointer::skill_badges(ctx);
    pointer::color_button(ctx);
    pointer::cursor(ctx);
    pointer::ripples(ctx);

    modal::modals(ctx);
    modal::tooltips(ctx);
    particles::particles(ctx);
    slider::sliders(ctx);
    toast::welcome_toast(ctx);
    tabs::tabs(ctx);

    info!(pending = ctx.tasks.pending(), "page enhancements installed");
}
