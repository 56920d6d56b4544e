use std::{cell::RefCell, rc::Rc};

use tracing::{Level, error, info, instrument};

use common::{Ctx, Page, config::read_config, features};

mod canvas;
mod dom;
mod site;
mod timers;

use dom::WebPage;
use site::{current_year, storage::LocalPrefs, style::INJECTED_STYLES};
use timers::WebTimers;

thread_local! {
    // the listeners and timers hold the context, but something has to own it for the
    // lifetime of the document
    static APP: RefCell<Option<Rc<Ctx<WebPage>>>> = const { RefCell::new(None) };
}

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");

    if let Err(err) = boot() {
        error!("failed to enhance page: {err:#}");
    }
}

fn seed() -> u64 {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(_) => js_sys::Date::now().to_bits(),
    }
}

#[instrument(level=Level::DEBUG)]
fn boot() -> anyhow::Result<()> {
    let page = WebPage::new()?;
    page.inject_style(INJECTED_STYLES)?;

    let inline = page.by_id("site-config").map(|el| page.text(&el));
    let config = read_config(inline.as_deref());

    let ctx = Ctx::new(
        page,
        Rc::new(WebTimers::new()),
        Box::new(LocalPrefs),
        config,
        seed(),
    );

    features::install(&ctx, current_year());
    info!("portfolio enhancements running");

    APP.with(|app| *app.borrow_mut() = Some(ctx));
    Ok(())
}
