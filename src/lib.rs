//! Pointer and scroll reactive starfield background.
//!
//! The pure parts (field generation, per-frame motion, camera, viewport
//! handling) build on every target; the browser front-end (DOM mount, input
//! listeners, WebGPU renderer, `requestAnimationFrame` loop) is wasm32 only.

pub mod camera;
pub mod config;
pub mod constants;
pub mod field;
pub mod motion;
pub mod viewport;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use web_entry::*;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::config::StarfieldConfig;
    use crate::motion::InputState;
    use crate::{dom, events, frame};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    thread_local! {
        static ACTIVE: RefCell<Option<Starfield>> = const { RefCell::new(None) };
    }

    struct Parts {
        container: web::HtmlElement,
        listeners: Vec<events::EventListener>,
        frame_ctx: Rc<RefCell<frame::FrameContext>>,
        frame_loop: Option<frame::FrameLoop>,
    }

    /// Handle to a mounted starfield. `destroy` stops the loop, detaches the
    /// listeners and removes the container.
    #[wasm_bindgen]
    #[derive(Clone)]
    pub struct Starfield {
        parts: Rc<RefCell<Option<Parts>>>,
        destroyed: Rc<Cell<bool>>,
        particle_count: usize,
    }

    #[wasm_bindgen]
    impl Starfield {
        #[wasm_bindgen(getter)]
        pub fn particle_count(&self) -> usize {
            self.particle_count
        }

        pub fn destroy(&self) {
            if self.destroyed.replace(true) {
                return;
            }
            if let Some(parts) = self.parts.borrow_mut().take() {
                if let Some(l) = &parts.frame_loop {
                    l.stop();
                }
                drop(parts.listeners);
                parts.frame_ctx.borrow_mut().gpu = None;
                parts.container.remove();
            }
            log::info!("starfield destroyed");
        }
    }

    fn mount(config: StarfieldConfig) -> anyhow::Result<Starfield> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let dom::Mounted { container, canvas } = dom::mount_container(&document)?;
        let (width, height) = dom::viewport_size(&window);

        let field = config.build_field();
        let particle_count = field.len();
        log::info!(
            "[mount] {} particles, viewport {}x{}",
            field.len(),
            width,
            height
        );

        let input = Rc::new(RefCell::new(InputState {
            scroll_y: window.scroll_y().unwrap_or(0.0) as f32,
            ..InputState::default()
        }));
        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
            input.clone(),
            width,
            height,
        )));
        let listeners =
            events::wire_input_handlers(&window, &document, input, frame_ctx.clone())?;

        let parts = Rc::new(RefCell::new(Some(Parts {
            container,
            listeners,
            frame_ctx: frame_ctx.clone(),
            frame_loop: None,
        })));
        let destroyed = Rc::new(Cell::new(false));

        let parts_init = parts.clone();
        let destroyed_init = destroyed.clone();
        spawn_local(async move {
            let gpu = frame::init_gpu(&canvas, &field, width, height, &config).await;
            if destroyed_init.get() {
                return;
            }
            let Some(gpu) = gpu else {
                return;
            };
            {
                let mut ctx = frame_ctx.borrow_mut();
                ctx.gpu = Some(gpu);
                // Catch up with any resize that happened during init
                let (w, h) = dom::viewport_size(&window);
                ctx.resize(w, h);
            }
            if let Some(p) = parts_init.borrow_mut().as_mut() {
                p.frame_loop = Some(frame::start_loop(frame_ctx));
            }
        });

        Ok(Starfield {
            parts,
            destroyed,
            particle_count,
        })
    }

    fn replace_active(next: Option<Starfield>) {
        ACTIVE.with(|a| {
            let prev = a.borrow_mut().take();
            if let Some(prev) = prev {
                prev.destroy();
            }
            *a.borrow_mut() = next;
        });
    }

    /// Mount a starfield, replacing the active one. Omitted arguments fall
    /// back to the defaults.
    #[wasm_bindgen]
    pub fn mount_starfield(
        particle_count: Option<u32>,
        seed: Option<u64>,
    ) -> Result<Starfield, JsValue> {
        let mut config = StarfieldConfig::default();
        if let Some(n) = particle_count {
            config = config.with_particle_count(n as usize);
        }
        if let Some(s) = seed {
            config = config.with_seed(s);
        }
        replace_active(None);
        let sf = mount(config).map_err(|e| JsValue::from_str(&format!("{:?}", e)))?;
        replace_active(Some(sf.clone()));
        Ok(sf)
    }

    #[wasm_bindgen]
    pub fn unmount_starfield() {
        replace_active(None);
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("starfield starting");

        match mount(StarfieldConfig::default()) {
            Ok(sf) => replace_active(Some(sf)),
            Err(e) => log::error!("init error: {:?}", e),
        }
        Ok(())
    }
}
