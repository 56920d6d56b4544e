use std::{cell::RefCell, rc::Rc};

use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{
    config::SiteConfig,
    page::{EventKind, Page, PageEvent, Target},
    tasks::{Tasks, Timers},
    view,
};

// key/value preference storage, the browser backend is local storage
pub trait Preferences {
    fn load(&self, key: &str) -> Option<String>;

    fn store(&self, key: &str, value: &str);
}

// application context
//
// this is everything that used to be ambient global state (document, window, timers, storage)
// gathered into one object that each feature initializer receives explicitly
pub struct Ctx<P: Page> {
    pub page: P,
    pub tasks: Tasks,
    pub config: SiteConfig,
    prefs: Box<dyn Preferences>,
    rng: RefCell<SmallRng>,
}

impl<P: Page> Ctx<P> {
    pub fn new(
        page: P,
        timers: Rc<dyn Timers>,
        prefs: Box<dyn Preferences>,
        config: SiteConfig,
        seed: u64,
    ) -> Rc<Self> {
        Rc::new(Ctx {
            page,
            tasks: Tasks::new(timers),
            config,
            prefs,
            rng: RefCell::new(SmallRng::seed_from_u64(seed)),
        })
    }

    pub fn prefs(&self) -> &dyn Preferences {
        self.prefs.as_ref()
    }

    pub fn random_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }

        Some(self.rng.borrow_mut().random_range(0..len))
    }

    pub fn with_rng<T>(&self, f: impl FnOnce(&mut SmallRng) -> T) -> T {
        f(&mut self.rng.borrow_mut())
    }

    // integer hue in [0, 360)
    pub fn random_hue(&self) -> u32 {
        self.rng.borrow_mut().random_range(0..360)
    }

    pub fn on<F>(&self, target: Target<'_, P::Element>, kind: EventKind, handler: F)
    where
        F: FnMut(&PageEvent) + 'static,
    {
        self.page.listen(target, kind, Box::new(handler));
    }

    pub fn in_view(&self, el: &P::Element) -> bool {
        view::in_view(self.page.rect(el).top, self.page.viewport().height)
    }

    pub fn intersects(&self, el: &P::Element) -> bool {
        view::intersects(&self.page.rect(el), &self.page.viewport())
    }

    // stops every timer and drops every listener; the listeners hold the context, so this is
    // what breaks the cycle
    pub fn teardown(&self) {
        self.tasks.cancel_all();
        self.page.release_listeners();
    }
}
