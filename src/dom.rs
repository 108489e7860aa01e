use crate::constants::{CONTAINER_ID, CONTAINER_STYLE};
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Container and canvas created by [`mount_container`].
pub struct Mounted {
    pub container: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
}

/// Remove any previous container, then prepend a fresh one holding a canvas
/// to `<body>`. Calling this repeatedly leaves exactly one container.
pub fn mount_container(document: &web::Document) -> anyhow::Result<Mounted> {
    if remove_container(document) {
        log::info!("[dom] removed stale #{}", CONTAINER_ID);
    }
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;

    let container: web::HtmlElement = document
        .create_element("div")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;
    container.set_id(CONTAINER_ID);
    container
        .set_attribute("style", CONTAINER_STYLE)
        .map_err(|e| anyhow!("{:?}", e))?;

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;
    container
        .append_child(&canvas)
        .map_err(|e| anyhow!("{:?}", e))?;
    body.prepend_with_node_1(&container)
        .map_err(|e| anyhow!("{:?}", e))?;

    Ok(Mounted { container, canvas })
}

/// Returns `true` if a container was present.
pub fn remove_container(document: &web::Document) -> bool {
    match document.get_element_by_id(CONTAINER_ID) {
        Some(el) => {
            el.remove();
            true
        }
        None => false,
    }
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (u32, u32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w.max(0.0) as u32, h.max(0.0) as u32)
}
