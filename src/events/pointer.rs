use crate::constants::DRAG_END_EVENTS;
use crate::host::HostNotifier;
use crate::surface::DomSurface;
use glam::DVec2;
use region_core::{HandleType, RegionEditor, UvUpdate};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Updates are buffered in the editor and handed to the host only after the
/// borrow is released, so a host that answers synchronously can call back in.
pub type SharedEditor = Rc<RefCell<RegionEditor<DomSurface, Vec<UvUpdate>>>>;

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub editor: SharedEditor,
    pub host: HostNotifier,
}

pub fn wire_input_handlers(w: InputWiring) {
    for kind in HandleType::ALL {
        wire_pointerdown(&w, kind);
    }
    wire_pointermove(&w);
    wire_pointerup(&w);
}

fn wire_pointerdown(w: &InputWiring, kind: HandleType) {
    let w_down = w.clone();
    let target = w.editor.borrow().surface().handle_element(kind).clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w_down.editor.borrow_mut().press_handle(kind);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w_move = w.clone();
    let svg_area = w.editor.borrow().surface().svg_area().clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let client = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
        let pending = {
            let mut editor = w_move.editor.borrow_mut();
            if editor.pointer_move(client).is_none() {
                return;
            }
            std::mem::take(editor.sink_mut())
        };
        w_move.host.deliver(pending);
    }) as Box<dyn FnMut(_)>);
    _ = svg_area.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Release is observed on the whole document: a drag must end even when the
// pointer leaves the surface before the button comes up, or when the browser
// cancels the pointer.
fn wire_pointerup(w: &InputWiring) {
    let w_up = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some(kind) = w_up.editor.borrow_mut().pointer_release() {
            log::info!("[drag] released {:?} on {}", kind, ev.type_());
        }
    }) as Box<dyn FnMut(_)>);
    for event in DRAG_END_EVENTS {
        _ = w
            .document
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
