use crate::core::config::{parse_leading_int, ConfettiConfig};
use crate::core::store::{mark_celebrated, should_celebrate};
use crate::core::{roll_burst, KvStore};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub const COMPLETENESS_ID: &str = "completenessPercent";
pub const CONFETTI_CLASS: &str = "confetti";

/// Drop one burst of confetti over the page. Each piece removes itself.
pub fn run(document: &web::Document, cfg: &ConfettiConfig) {
    let Some(body) = document.body() else {
        return;
    };
    let pieces = roll_burst(&mut rand::thread_rng(), cfg);
    for piece in &pieces {
        let Ok(el) = document.create_element("div") else {
            continue;
        };
        el.set_class_name(CONFETTI_CLASS);
        _ = el.set_attribute("style", &piece.style());
        if body.append_child(&el).is_ok() {
            dom::remove_after(el, cfg.lifetime_ms);
        }
    }
    log::info!("[celebrate] {} pieces", pieces.len());
}

/// Celebrate a 100% complete profile once per store, after `delay_ms`.
pub fn check_profile_completion(
    document: &web::Document,
    store: Rc<RefCell<Box<dyn KvStore>>>,
    cfg: ConfettiConfig,
    delay_ms: u32,
) {
    let completeness = document
        .get_element_by_id(COMPLETENESS_ID)
        .and_then(|el| parse_leading_int(&dom::text_of(&el)))
        .unwrap_or(0);
    if !should_celebrate(&**store.borrow(), completeness) {
        return;
    }
    let doc = document.clone();
    dom::set_timeout(delay_ms, move || {
        run(&doc, &cfg);
        mark_celebrated(&mut **store.borrow_mut());
    });
}
