use crate::page::{Rect, Viewport};

// fraction of the viewport height that the top edge of an element has to clear
pub const IN_VIEW_RATIO: f64 = 0.9;

pub fn in_view(top: f64, viewport_height: f64) -> bool {
    top <= viewport_height * IN_VIEW_RATIO
}

// any overlap between the element box and the viewport counts
pub fn intersects(rect: &Rect, viewport: &Viewport) -> bool {
    rect.top < viewport.height && rect.bottom > 0.0 && rect.left < viewport.width && rect.right > 0.0
}
