use crate::core::Environment;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> bool {
    let Some(el) = document.get_element_by_id(element_id) else {
        return false;
    };
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
    true
}

pub fn media_matches(query: &str) -> bool {
    web::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    root.query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

pub fn query_all_in_document(document: &web::Document, selector: &str) -> Vec<web::Element> {
    document
        .query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

fn elements(list: web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Viewport size in CSS pixels, never zero.
pub fn viewport() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ONE;
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    Vec2::new(width.max(1.0) as f32, height.max(1.0) as f32)
}

pub fn device_pixel_ratio() -> f32 {
    web::window()
        .map(|w| w.device_pixel_ratio() as f32)
        .unwrap_or(1.0)
}

pub fn read_environment() -> Environment {
    let touch = web::window()
        .map(|w| w.navigator().max_touch_points() > 0)
        .unwrap_or(false);
    Environment {
        reduced_motion: media_matches("(prefers-reduced-motion: reduce)"),
        coarse_pointer: media_matches("(pointer: coarse)"),
        touch,
        viewport: viewport(),
        device_pixel_ratio: device_pixel_ratio(),
    }
}
