use crate::constants::{HANDLE_COLOR, HANDLE_RADIUS_PX, ROPE_COLOR, ROPE_WIDTH_PX};
use crate::core::FrameOutput;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D drawing surface bound to the full-viewport canvas.
pub struct Surface {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
}

impl Surface {
    /// `None` until the canvas exists and hands out a 2D context.
    pub fn acquire(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }

    pub fn draw(&self, frame: &FrameOutput) {
        let ctx = &self.ctx;
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        ctx.clear_rect(0.0, 0.0, w, h);

        let (cx, cy) = (frame.center.x as f64, frame.center.y as f64);
        let (ex, ey) = (frame.rope_end.x as f64, frame.rope_end.y as f64);

        ctx.begin_path();
        ctx.set_stroke_style_str(ROPE_COLOR);
        ctx.set_line_width(ROPE_WIDTH_PX);
        ctx.move_to(cx, cy);
        ctx.line_to(ex, ey);
        ctx.stroke();

        ctx.begin_path();
        ctx.set_fill_style_str(HANDLE_COLOR);
        if ctx.arc(ex, ey, HANDLE_RADIUS_PX, 0.0, TAU).is_ok() {
            ctx.fill();
        }
    }
}
