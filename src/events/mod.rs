mod page;
mod pointer;

pub use page::{wire_resize, wire_visibility};
pub use pointer::wire_pointer;

use crate::dom;
use crate::frame::Runtime;
use crate::ui;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Quiet and theme buttons. Preference subscribers update the page, so the
/// handlers only mutate state.
pub fn wire_toggles(document: &web::Document, runtime: &Rc<RefCell<Runtime>>) {
    let rt = runtime.clone();
    if !dom::add_click_listener(document, ui::QUIET_TOGGLE_ID, move || {
        let quiet = rt.borrow_mut().app.toggle_quiet();
        log::info!("[toggle] quiet={}", quiet);
    }) {
        log::warn!("[toggle] #{} missing", ui::QUIET_TOGGLE_ID);
    }

    let rt = runtime.clone();
    if !dom::add_click_listener(document, ui::THEME_TOGGLE_ID, move || {
        let theme = rt.borrow_mut().app.toggle_theme();
        log::info!("[toggle] theme={}", theme.as_str());
    }) {
        log::warn!("[toggle] #{} missing", ui::THEME_TOGGLE_ID);
    }
}
