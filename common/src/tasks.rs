use std::{
    cell::{Cell, RefCell},
    collections::HashSet,
    fmt,
    rc::Rc,
};

use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task-{}", self.0)
    }
}

// scheduling backend
//
// ids are chosen by the caller (see Tasks) so that a backend never has to hand anything back;
// cancel must tolerate ids that already fired or were never scheduled
pub trait Timers {
    fn now(&self) -> f64;

    fn timeout(&self, id: TaskId, delay_ms: u32, task: Box<dyn FnOnce()>);

    fn interval(&self, id: TaskId, period_ms: u32, task: Box<dyn FnMut()>);

    fn frame(&self, id: TaskId, task: Box<dyn FnOnce(f64)>);

    fn cancel(&self, id: TaskId);
}

// registry of outstanding work
//
// every timer, interval and animation frame a feature starts goes through here, so tearing the
// page down (or finishing a test) can stop everything that is still pending
pub struct Tasks {
    timers: Rc<dyn Timers>,
    next: Cell<u64>,
    live: Rc<RefCell<HashSet<TaskId>>>,
}

impl Tasks {
    pub fn new(timers: Rc<dyn Timers>) -> Self {
        Tasks {
            timers,
            next: Cell::new(0),
            live: Rc::new(RefCell::new(HashSet::new())),
        }
    }

    pub fn now(&self) -> f64 {
        self.timers.now()
    }

    fn register(&self) -> TaskId {
        let id = TaskId(self.next.get());
        self.next.set(id.0 + 1);
        self.live.borrow_mut().insert(id);
        id
    }

    pub fn after<F: FnOnce() + 'static>(&self, delay_ms: u32, task: F) -> TaskId {
        let id = self.register();
        let live = Rc::clone(&self.live);

        self.timers.timeout(
            id,
            delay_ms,
            Box::new(move || {
                live.borrow_mut().remove(&id);
                task();
            }),
        );

        id
    }

    pub fn every<F: FnMut() + 'static>(&self, period_ms: u32, task: F) -> TaskId {
        let id = self.register();
        self.timers.interval(id, period_ms, Box::new(task));
        id
    }

    pub fn next_frame<F: FnOnce(f64) + 'static>(&self, task: F) -> TaskId {
        let id = self.register();
        let live = Rc::clone(&self.live);

        self.timers.frame(
            id,
            Box::new(move |timestamp| {
                live.borrow_mut().remove(&id);
                task(timestamp);
            }),
        );

        id
    }

    pub fn cancel(&self, id: TaskId) {
        if self.live.borrow_mut().remove(&id) {
            self.timers.cancel(id);
        }
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.live.borrow().contains(&id)
    }

    pub fn pending(&self) -> usize {
        self.live.borrow().len()
    }

    pub fn cancel_all(&self) {
        let ids: Vec<TaskId> = self.live.borrow_mut().drain().collect();

        debug!(count = ids.len(), "cancelling outstanding tasks");

        for id in ids {
            self.timers.cancel(id);
        }
    }
}
