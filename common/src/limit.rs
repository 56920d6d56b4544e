use std::{cell::Cell, rc::Rc};

use crate::{
    context::Ctx,
    page::{Page, PageEvent},
    tasks::TaskId,
};

// leading-edge rate limiter
//
// the window starts at construction, so a call arriving within `wait` of creation is dropped
#[derive(Debug)]
pub struct Throttle {
    wait: f64,
    last: Cell<f64>,
}

impl Throttle {
    pub fn new(wait_ms: u32, now: f64) -> Self {
        Throttle {
            wait: f64::from(wait_ms),
            last: Cell::new(now),
        }
    }

    pub fn admit(&self, now: f64) -> bool {
        if self.last.get() + self.wait < now {
            self.last.set(now);
            true
        } else {
            false
        }
    }
}

// trailing-edge limiter, every call pushes the invocation `delay` further out
#[derive(Debug)]
pub struct Debounce {
    delay: u32,
    pending: Cell<Option<TaskId>>,
}

impl Debounce {
    pub fn new(delay_ms: u32) -> Self {
        Debounce {
            delay: delay_ms,
            pending: Cell::new(None),
        }
    }

    pub fn call<P: Page>(self: &Rc<Self>, ctx: &Rc<Ctx<P>>, f: Rc<dyn Fn()>) {
        if let Some(id) = self.pending.take() {
            ctx.tasks.cancel(id);
        }

        let this = Rc::clone(self);
        let id = ctx.tasks.after(self.delay, move || {
            this.pending.set(None);
            f();
        });

        self.pending.set(Some(id));
    }
}

pub fn throttled<P, F>(ctx: &Rc<Ctx<P>>, wait_ms: u32, f: F) -> impl FnMut(&PageEvent) + 'static
where
    P: Page,
    F: Fn() + 'static,
{
    let throttle = Throttle::new(wait_ms, ctx.tasks.now());
    let ctx = Rc::clone(ctx);

    move |_| {
        if throttle.admit(ctx.tasks.now()) {
            f();
        }
    }
}

pub fn debounced<P, F>(ctx: &Rc<Ctx<P>>, delay_ms: u32, f: F) -> impl FnMut(&PageEvent) + 'static
where
    P: Page,
    F: Fn() + 'static,
{
    let debounce = Rc::new(Debounce::new(delay_ms));
    let f: Rc<dyn Fn()> = Rc::new(f);
    let ctx = Rc::clone(ctx);

    move |_| debounce.call(&ctx, Rc::clone(&f))
}
