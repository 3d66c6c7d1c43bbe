use crate::core::Rect;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All `HtmlElement`s matching `selector`; an invalid selector yields none.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::debug!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn query_one(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn text_of(el: &web::Element) -> String {
    el.text_content().unwrap_or_default()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn client_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

#[inline]
pub fn client_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Attach a mouse listener that lives as long as the page.
pub fn on_mouse(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::MouseEvent)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Attach a window `scroll` listener that lives as long as the page.
pub fn on_scroll(handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Run `f` once after `delay_ms`. The closure frees itself after firing.
pub fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::once_into_js(f);
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.unchecked_ref(),
        delay_ms.min(i32::MAX as u32) as i32,
    ) {
        log::warn!("[dom] setTimeout failed: {:?}", e);
    }
}

/// Remove `el` from the page after `delay_ms`.
pub fn remove_after(el: web::Element, delay_ms: u32) {
    set_timeout(delay_ms, move || el.remove());
}
