use crate::camera::Camera;
use crate::config::StarfieldConfig;
use crate::field::ParticleField;
use crate::motion::{InputState, MotionState};
use crate::render;
use crate::viewport::ViewportTracker;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub input: Rc<RefCell<InputState>>,
    pub motion: MotionState,
    pub camera: Camera,
    pub viewport: ViewportTracker,
    pub gpu: Option<render::GpuState>,
}

impl FrameContext {
    pub fn new(input: Rc<RefCell<InputState>>, width: u32, height: u32) -> Self {
        Self {
            input,
            motion: MotionState::default(),
            camera: Camera::for_viewport(width, height),
            viewport: ViewportTracker::new(width),
            gpu: None,
        }
    }

    pub fn frame(&mut self) {
        let input = *self.input.borrow();
        self.motion.step(&input);
        self.camera.position.y = self.motion.camera_y;

        let Some(g) = &mut self.gpu else {
            return;
        };
        match g.render(&self.camera, self.motion.rotation) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
            Err(wgpu::SurfaceError::Timeout) => log::warn!("surface timeout; skipping frame"),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport
            .handle_resize(width, height, &mut self.camera, self.gpu.as_mut());
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    field: &ParticleField,
    width: u32,
    height: u32,
    config: &StarfieldConfig,
) -> Option<render::GpuState> {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    match render::GpuState::new(canvas, field, width, height, config.pixel_ratio(dpr)).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::warn!("WebGPU unavailable, starfield disabled: {:?}", e);
            None
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running `requestAnimationFrame` loop. [`FrameLoop::stop`] cancels the
/// pending frame and releases the self-scheduling closure.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickClosure,
}

impl FrameLoop {
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure -> tick Rc cycle
        _ = self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &TickClosure, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let running = Rc::new(Cell::new(true));
    let pending = Rc::new(Cell::new(None::<i32>));
    let tick: TickClosure = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let pending_tick = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &pending_tick);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &pending);

    FrameLoop {
        running,
        pending,
        tick,
    }
}
