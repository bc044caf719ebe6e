use crate::audio::WebSynth;
use crate::constants::{CANVAS_ID, HOVER_TRANSITION_CSS, WINDOW_ID};
use crate::core::{RetryDecision, RetryState, RopeToy, SizingMode};
use crate::dom;
use crate::events;
use crate::render::Surface;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedToy = Rc<RefCell<RopeToy<WebSynth>>>;

/// Per-frame state owned by the animation loop.
pub struct FrameContext {
    pub toy: SharedToy,
    pub retry: RetryState,
    surface: Option<Surface>,
    host: Option<web::HtmlElement>,
    wait_frames: u32,
    missing_since: Option<Instant>,
}

/// Whether the loop should request another frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Continue {
    Yes,
    No,
}

impl FrameContext {
    pub fn new(toy: SharedToy) -> Self {
        let policy = toy.borrow().config.retry;
        Self {
            toy,
            retry: RetryState::new(policy),
            surface: None,
            host: None,
            wait_frames: 0,
            missing_since: None,
        }
    }

    pub fn frame(&mut self) -> Continue {
        if self.wait_frames > 0 {
            self.wait_frames -= 1;
            return Continue::Yes;
        }
        if !self.ensure_surface() {
            let since = *self.missing_since.get_or_insert_with(Instant::now);
            return match self.retry.on_missing_surface() {
                RetryDecision::Reschedule { wait_frames } => {
                    self.wait_frames = wait_frames;
                    Continue::Yes
                }
                RetryDecision::GiveUp => {
                    log::warn!(
                        "[frame] no surface after {} frames ({:.0} ms), giving up",
                        self.retry.consecutive_skips(),
                        since.elapsed().as_secs_f64() * 1000.0
                    );
                    Continue::No
                }
            };
        }
        let skipped = self.retry.on_surface_ready();
        if let Some(since) = self.missing_since.take() {
            log::info!(
                "[frame] surface ready after {} skipped frames ({:.0} ms)",
                skipped,
                since.elapsed().as_secs_f64() * 1000.0
            );
        }

        let out = self.toy.borrow_mut().tick();
        if let Some(surface) = &self.surface {
            surface.draw(&out);
        }
        if let Some(host) = &self.host {
            dom::set_box_size(host, out.box_size);
        }
        Continue::Yes
    }

    /// Look up the canvas and the reference window element until both exist.
    fn ensure_surface(&mut self) -> bool {
        if self.surface.is_some() && self.host.is_some() {
            return true;
        }
        let Some(canvas) = dom::element_by_id::<web::HtmlCanvasElement>(CANVAS_ID) else {
            return false;
        };
        let Some(host) = dom::element_by_id::<web::HtmlElement>(WINDOW_ID) else {
            return false;
        };
        let Some(surface) = Surface::acquire(&canvas) else {
            return false;
        };
        dom::sync_canvas_to_viewport(&canvas);
        let hover = {
            let mut toy = self.toy.borrow_mut();
            // First layout fact: hang the rope from the real center.
            toy.reset_layout(dom::element_center(&host));
            toy.config.visual.sizing == SizingMode::Hover
        };
        // Only reached once per host, so the listeners are attached once.
        if hover {
            dom::set_transition(&host, HOVER_TRANSITION_CSS);
            events::wire_hover_handlers(&self.toy, &host);
        }
        self.surface = Some(surface);
        self.host = Some(host);
        true
    }
}

/// Handle to the running `requestAnimationFrame` loop.
#[derive(Default)]
pub struct FrameLoop {
    raf_id: Cell<Option<i32>>,
    cancelled: Cell<bool>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameLoop {
    fn request(&self) {
        if self.cancelled.get() {
            return;
        }
        let Some(w) = web::window() else { return };
        if let Some(cb) = self.tick.borrow().as_ref() {
            self.raf_id
                .set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        }
    }

    /// Stop scheduling frames. Safe to call more than once.
    pub fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
        log::info!("[frame] loop cancelled");
    }
}

pub fn start_loop(mut frame_ctx: FrameContext) -> Rc<FrameLoop> {
    let handle = Rc::new(FrameLoop::default());
    // The closure is stored inside the handle; it only holds it weakly.
    let weak = Rc::downgrade(&handle);
    let cb = Closure::wrap(Box::new(move || {
        let Some(handle) = weak.upgrade() else { return };
        handle.raf_id.set(None);
        if handle.cancelled.get() {
            return;
        }
        match frame_ctx.frame() {
            Continue::Yes => handle.request(),
            Continue::No => handle.cancelled.set(true),
        }
    }) as Box<dyn FnMut()>);
    *handle.tick.borrow_mut() = Some(cb);
    handle.request();
    handle
}
