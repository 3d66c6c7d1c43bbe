use crate::animate;
use crate::constants::{COUNTER_CLASS, REVEALED_CLASS, REVEAL_SELECTOR, STATS_SELECTOR};
use crate::core::config::{CounterConfig, RevealConfig};
use crate::core::visibility::{reveal_action, stat_action};
use crate::core::{RevealAction, RevealRegistry};
use crate::dom;
use crate::ticker::Pace;
use std::cell::RefCell;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const ANIMATED_MARKER: &str = "data-animated";

/// Observe `targets` and call `on_fire` once per element on its first
/// visibility crossing. Each observer keeps its own registry and finds
/// entries by element identity. Returns the observer, or `None` when there is
/// nothing to watch or the browser lacks `IntersectionObserver`.
pub fn observe(
    targets: Vec<web::HtmlElement>,
    cfg: &RevealConfig,
    on_fire: impl Fn(&web::HtmlElement) + 'static,
) -> Option<web::IntersectionObserver> {
    if targets.is_empty() {
        return None;
    }
    let mut registry = RevealRegistry::new();
    for _ in &targets {
        registry.register();
    }
    let registry = RefCell::new(registry);
    let watched = targets.clone();

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let target_js: &JsValue = target.as_ref();
                let Some(id) = watched
                    .iter()
                    .position(|el| AsRef::<JsValue>::as_ref(el) == target_js)
                else {
                    continue;
                };
                if registry
                    .borrow_mut()
                    .on_visibility(id, entry.is_intersecting())
                {
                    observer.unobserve(&target);
                    on_fire(&watched[id]);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(cfg.threshold));
    init.set_root_margin(&cfg.root_margin);
    let observer =
        match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        {
            Ok(o) => o,
            Err(e) => {
                log::warn!("[reveal] IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };
    callback.forget();

    for el in &targets {
        observer.observe(el);
    }
    log::info!("[reveal] watching {} elements", targets.len());
    Some(observer)
}

/// Scroll-triggered entrance classes and `.counter` elements.
pub fn wire_scroll_reveal(
    document: &web::Document,
    cfg: &RevealConfig,
    counter: CounterConfig,
) -> Option<web::IntersectionObserver> {
    observe(dom::query_all(document, REVEAL_SELECTOR), cfg, move |el| {
        _ = el.class_list().add_1(REVEALED_CLASS);
        let action = reveal_action(
            el.class_list().contains(COUNTER_CLASS),
            el.get_attribute("data-target").as_deref(),
        );
        if let RevealAction::Count { target } = action {
            animate::run_counter(el.clone(), target, counter, Pace::Frame);
        }
    })
}

/// Dashboard `.stat-number` counters; the target is the element's own text
/// at the moment it first shows up.
pub fn wire_stat_counters(
    document: &web::Document,
    cfg: &RevealConfig,
    counter: CounterConfig,
) -> Option<web::IntersectionObserver> {
    observe(dom::query_all(document, STATS_SELECTOR), cfg, move |el| {
        let action = stat_action(el.has_attribute(ANIMATED_MARKER), &dom::text_of(el));
        if let Some(RevealAction::Count { target }) = action {
            _ = el.set_attribute(ANIMATED_MARKER, "true");
            animate::run_counter(el.clone(), target, counter, Pace::Interval(counter.tick_ms));
        }
    })
}
