use std::f64::consts::TAU;

use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use common::Surface;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        Some(CanvasSurface { canvas, context })
    }
}

impl Surface for CanvasSurface {
    fn resize(&self, width: f64, height: f64) {
        // canvas dimensions are whole pixels
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }

    fn clear(&self) {
        self.context.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    fn dot(&self, x: f64, y: f64, radius: f64, color: &str) {
        self.context.begin_path();
        if let Err(err) = self.context.arc(x, y, radius.max(0.0), 0.0, TAU) {
            debug!("canvas arc failed: {err:?}");
            return;
        }
        self.context.set_fill_style_str(color);
        self.context.fill();
    }
}
