use std::{
    cell::RefCell,
    collections::HashMap,
    rc::{Rc, Weak},
};

use gloo_render::{AnimationFrame, request_animation_frame};
use gloo_timers::callback::{Interval, Timeout};

use common::{TaskId, Timers};

// gloo handles cancel their timer when dropped, so owning the handle is owning the task
enum Pending {
    Timeout(Timeout),
    Interval(Interval),
    Frame(AnimationFrame),
}

#[derive(Default)]
struct TimerState {
    live: RefCell<HashMap<TaskId, Pending>>,
    // handles whose callback already ran; they are dropped on the next scheduling call rather
    // than from inside their own callback
    spent: RefCell<Vec<Pending>>,
}

impl TimerState {
    fn retire(&self, id: TaskId) {
        if let Some(handle) = self.live.borrow_mut().remove(&id) {
            self.spent.borrow_mut().push(handle);
        }
    }

    fn insert(&self, id: TaskId, handle: Pending) {
        self.spent.borrow_mut().clear();
        self.live.borrow_mut().insert(id, handle);
    }
}

#[derive(Default)]
pub struct WebTimers {
    state: Rc<TimerState>,
}

impl WebTimers {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&self) -> Weak<TimerState> {
        Rc::downgrade(&self.state)
    }
}

impl Timers for WebTimers {
    fn now(&self) -> f64 {
        js_sys::Date::now()
    }

    fn timeout(&self, id: TaskId, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let state = self.handle();
        let timeout = Timeout::new(delay_ms, move || {
            task();
            if let Some(state) = state.upgrade() {
                state.retire(id);
            }
        });

        self.state.insert(id, Pending::Timeout(timeout));
    }

    fn interval(&self, id: TaskId, period_ms: u32, mut task: Box<dyn FnMut()>) {
        let interval = Interval::new(period_ms, move || task());
        self.state.insert(id, Pending::Interval(interval));
    }

    fn frame(&self, id: TaskId, task: Box<dyn FnOnce(f64)>) {
        let state = self.handle();
        let frame = request_animation_frame(move |timestamp| {
            task(timestamp);
            if let Some(state) = state.upgrade() {
                state.retire(id);
            }
        });

        self.state.insert(id, Pending::Frame(frame));
    }

    fn cancel(&self, id: TaskId) {
        let handle = self.state.live.borrow_mut().remove(&id);
        drop(handle);
    }
}
