use crate::dom;
use crate::frame::FrameContext;
use crate::motion::InputState;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener; detaches itself when dropped.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let f: &js_sys::Function = self.closure.as_ref().unchecked_ref();
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, f);
    }
}

/// Wire pointer, scroll, and resize input. Dropping the returned listeners
/// detaches them.
pub fn wire_input_handlers(
    window: &web::Window,
    document: &web::Document,
    input: Rc<RefCell<InputState>>,
    frame_ctx: Rc<RefCell<FrameContext>>,
) -> anyhow::Result<Vec<EventListener>> {
    Ok(vec![
        wire_mousemove(window, document, input.clone())?,
        wire_scroll(window, input)?,
        wire_resize(window, frame_ctx)?,
    ])
}

fn wire_mousemove(
    window: &web::Window,
    document: &web::Document,
    input: Rc<RefCell<InputState>>,
) -> anyhow::Result<EventListener> {
    let wnd = window.clone();
    EventListener::new(document, "mousemove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (w, h) = dom::viewport_size(&wnd);
        input.borrow_mut().set_pointer(
            ev.client_x() as f32,
            ev.client_y() as f32,
            w as f32,
            h as f32,
        );
    })
}

fn wire_scroll(
    window: &web::Window,
    input: Rc<RefCell<InputState>>,
) -> anyhow::Result<EventListener> {
    let wnd = window.clone();
    EventListener::new(window, "scroll", move |_ev: web::Event| {
        let y = wnd.scroll_y().unwrap_or(0.0);
        input.borrow_mut().set_scroll(y as f32);
    })
}

fn wire_resize(
    window: &web::Window,
    frame_ctx: Rc<RefCell<FrameContext>>,
) -> anyhow::Result<EventListener> {
    let wnd = window.clone();
    EventListener::new(window, "resize", move |_ev: web::Event| {
        let (w, h) = dom::viewport_size(&wnd);
        frame_ctx.borrow_mut().resize(w, h);
    })
}
