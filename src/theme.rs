use crate::core::store::{load_theme, toggle_theme, LIGHT};
use crate::core::KvStore;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub const THEME_ATTR: &str = "data-theme";
pub const TOGGLE_ID: &str = "darkModeToggle";

/// Apply the stored theme to `<html>` and wire `#darkModeToggle` if present.
pub fn wire_dark_mode(document: &web::Document, store: Rc<RefCell<Box<dyn KvStore>>>) {
    let Some(root) = document.document_element() else {
        return;
    };
    let saved = load_theme(&**store.borrow());
    _ = root.set_attribute(THEME_ATTR, &saved);
    log::info!("[theme] applied {}", saved);

    dom::add_click_listener(document, TOGGLE_ID, move || {
        let current = root
            .get_attribute(THEME_ATTR)
            .unwrap_or_else(|| LIGHT.to_string());
        let next = toggle_theme(&mut **store.borrow_mut(), &current);
        _ = root.set_attribute(THEME_ATTR, next);
        log::debug!("[theme] {} -> {}", current, next);
    });
}
