// Browser tests for the DOM mount contract.
// Run with `wasm-pack test --headless --firefox` (or --chrome).

#![cfg(target_arch = "wasm32")]

use starfield::constants::CONTAINER_ID;
use starfield::dom;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn container_count(document: &web_sys::Document) -> u32 {
    document
        .query_selector_all(&format!("#{}", CONTAINER_ID))
        .map(|l| l.length())
        .unwrap_or(0)
}

#[wasm_bindgen_test]
fn mounting_twice_leaves_one_container() {
    let document = dom::window_document().expect("document");
    let first = dom::mount_container(&document).expect("first mount");
    let second = dom::mount_container(&document).expect("second mount");

    assert_eq!(container_count(&document), 1);
    assert!(!first.container.is_connected());
    assert!(second.container.is_connected());
    assert_eq!(second.container.id(), CONTAINER_ID);

    let body = document.body().expect("body");
    let first_child = body.first_element_child().expect("child");
    assert_eq!(first_child.id(), CONTAINER_ID);
    assert!(second.canvas.parent_element().is_some());

    assert!(dom::remove_container(&document));
    assert_eq!(container_count(&document), 0);
}

#[wasm_bindgen_test]
fn remounting_the_starfield_replaces_the_previous_one() {
    let document = dom::window_document().expect("document");
    let a = starfield::mount_starfield(Some(32), Some(1)).expect("mount a");
    let b = starfield::mount_starfield(Some(64), Some(2)).expect("mount b");

    assert_eq!(container_count(&document), 1);
    assert_eq!(a.particle_count(), 32);
    assert_eq!(b.particle_count(), 64);

    starfield::unmount_starfield();
    assert_eq!(container_count(&document), 0);
}
