use crate::frame::Runtime;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer move/down feed the tracker; window blur deactivates it.
pub fn wire_pointer(runtime: &Rc<RefCell<Runtime>>) {
    if !runtime.borrow().app.pointer().enabled() {
        log::info!("[pointer] parallax disabled (coarse pointer, touch or reduced motion)");
        return;
    }
    let Some(window) = web::window() else {
        return;
    };

    for event in ["pointermove", "pointerdown"] {
        let rt = runtime.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            rt.borrow_mut().app.pointer_moved(client);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    let rt = runtime.clone();
    let blur = Closure::wrap(Box::new(move || {
        rt.borrow_mut().app.pointer_left();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref());
    blur.forget();
}
