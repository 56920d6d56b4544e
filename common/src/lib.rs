pub mod config;
pub mod context;
pub mod features;
pub mod limit;
pub mod page;
pub mod tasks;
pub mod view;

#[cfg(test)]
pub mod testing;

pub use context::{Ctx, Preferences};
pub use page::{EventKind, Handler, Page, PageEvent, Rect, Surface, Target, Viewport};
pub use tasks::{TaskId, Tasks, Timers};
