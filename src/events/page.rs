use crate::dom;
use crate::frame::Runtime;
use crate::ui;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pause the loop while the tab is hidden, resume when it comes back.
/// `<body>` carries `page-hidden` for as long as the tab is hidden.
pub fn wire_visibility(document: &web::Document, runtime: &Rc<RefCell<Runtime>>) {
    let rt = runtime.clone();
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let hidden = doc.hidden();
        log::debug!("[page] hidden={}", hidden);
        ui::set_page_hidden(&doc, hidden);
        rt.borrow_mut().visibility_changed(hidden);
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Keep the particle surface matched to the viewport.
pub fn wire_resize(runtime: &Rc<RefCell<Runtime>>) {
    let Some(window) = web::window() else {
        return;
    };
    let rt = runtime.clone();
    let closure = Closure::wrap(Box::new(move || {
        rt.borrow_mut()
            .app
            .resize(dom::viewport(), dom::device_pixel_ratio());
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
