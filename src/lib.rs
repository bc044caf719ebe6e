//! Rope synth: drag a rope end tethered to a circular window and hear it.
//!
//! `core` holds the target-independent kinematics and synth mapping; the rest
//! is the wasm32 shell that feeds it browser events and WebAudio nodes.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
mod web_app {
    use crate::core::{RopeToy, SizingMode, ToyConfig};
    use crate::{constants::WINDOW_ID, dom, events, frame};
    use glam::Vec2;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys as web;

    struct App {
        toy: frame::SharedToy,
        frame_loop: Rc<frame::FrameLoop>,
    }

    thread_local! {
        static APP: RefCell<Option<App>> = const { RefCell::new(None) };
    }

    /// Host markup may opt into the hover-sized window with
    /// `data-sizing="hover"` on the window element.
    fn config_from_dom() -> ToyConfig {
        let mut config = ToyConfig::default();
        let hover = dom::element_by_id::<web::Element>(WINDOW_ID)
            .and_then(|el| el.get_attribute("data-sizing"))
            .is_some_and(|v| v.eq_ignore_ascii_case("hover"));
        if hover {
            config.visual.sizing = SizingMode::Hover;
        }
        config
    }

    fn initial_center() -> Vec2 {
        dom::element_by_id::<web::Element>(WINDOW_ID)
            .map(|el| dom::element_center(&el))
            .unwrap_or(Vec2::ZERO)
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("rope-synth starting");

        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
        Ok(())
    }

    fn init() -> anyhow::Result<()> {
        if APP.with(|a| a.borrow().is_some()) {
            anyhow::bail!("already started");
        }
        let config = config_from_dom();
        let toy: frame::SharedToy =
            Rc::new(RefCell::new(RopeToy::new(initial_center(), config)));

        events::wire_input_handlers(&toy);
        events::wire_layout_handlers(&toy);
        // Hover listeners are attached by the frame loop once #rope-window exists.
        events::wire_teardown(teardown);

        // Audio is not touched here; the first grab builds it.
        let frame_loop = frame::start_loop(frame::FrameContext::new(toy.clone()));
        APP.with(|a| *a.borrow_mut() = Some(App { toy, frame_loop }));
        Ok(())
    }

    /// Stop the frame loop and release audio. Repeated calls do nothing.
    #[wasm_bindgen]
    pub fn teardown() {
        let Some(app) = APP.with(|a| a.borrow_mut().take()) else {
            return;
        };
        app.frame_loop.cancel();
        app.toy.borrow_mut().teardown();
        log::info!("rope-synth stopped");
    }
}
