//! Scroll, pointer and celebration effects for dashboard pages, compiled to
//! WebAssembly. Pure logic lives in [`core`] and builds on every target; the
//! browser wiring below is wasm-only.
pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
pub mod animate;
#[cfg(target_arch = "wasm32")]
mod backdrop;
#[cfg(target_arch = "wasm32")]
mod celebrate;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
pub mod events;
#[cfg(target_arch = "wasm32")]
mod page;
#[cfg(target_arch = "wasm32")]
pub mod reveal;
#[cfg(target_arch = "wasm32")]
pub mod storage;
#[cfg(target_arch = "wasm32")]
mod theme;
#[cfg(target_arch = "wasm32")]
pub mod ticker;

#[cfg(target_arch = "wasm32")]
pub use app::*;

#[cfg(target_arch = "wasm32")]
mod app {
    use crate::core::config::TypingConfig;
    use crate::core::{FxConfig, KvStore};
    use crate::ticker::Pace;
    use crate::{animate, backdrop, celebrate, dom, events, page, reveal, storage, theme};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys as web;

    const TYPING_EFFECT_SELECTOR: &str = ".typing-effect";
    const TYPING_TEXT_SELECTOR: &str = ".typing-text";

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("page-fx starting");

        let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
        if document.ready_state() == "loading" {
            let on_ready = Closure::once_into_js(run_init);
            document
                .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        } else {
            run_init();
        }
        Ok(())
    }

    fn run_init() {
        if let Err(e) = init(FxConfig::default()) {
            log::error!("init error: {:?}", e);
        }
    }

    fn init(cfg: FxConfig) -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let store: Rc<RefCell<Box<dyn KvStore>>> = Rc::new(RefCell::new(storage::open_store()));

        // Third-party libraries are optional; failures only disable them.
        match backdrop::init_particles() {
            Ok(ran) => log::debug!("[backdrop] particles={}", ran),
            Err(e) => log::warn!("[backdrop] particles failed: {:?}", e),
        }

        reveal::wire_scroll_reveal(&document, &cfg.reveal, cfg.counter);
        reveal::wire_stat_counters(&document, &cfg.stats, cfg.counter);
        wire_typing(&document, cfg.typing);

        let buttons = events::wire_magnetic_buttons(&document, cfg.magnetic);
        let cards = events::wire_magnetic_cards(&document, cfg.magnetic);
        log::info!("[pointer] magnetic buttons={} cards={}", buttons, cards);

        if let Err(e) = events::wire_progress_bar(&document) {
            log::warn!("[scroll] progress bar skipped: {:?}", e);
        }
        let layers = events::wire_parallax(&document, cfg.parallax);
        log::info!("[scroll] parallax layers={}", layers);

        match backdrop::init_scroll_reveal_lib() {
            Ok(ran) => log::debug!("[backdrop] aos={}", ran),
            Err(e) => log::warn!("[backdrop] AOS failed: {:?}", e),
        }

        let ripples =
            events::wire_ripples(&document, events::RIPPLE_BUTTON_SELECTOR, "ripple", cfg.ripple)
                + events::wire_ripples(
                    &document,
                    events::RIPPLE_SELECTOR,
                    "ripple-effect",
                    cfg.ripple,
                );
        log::info!("[pointer] ripple hosts={}", ripples);

        theme::wire_dark_mode(&document, store.clone());
        page::stagger_cards(&document);
        celebrate::check_profile_completion(
            &document,
            store,
            cfg.confetti,
            cfg.celebration_delay_ms,
        );

        log::info!("page-fx initialized");
        Ok(())
    }

    fn wire_typing(document: &web::Document, base: TypingConfig) {
        let effects = dom::query_all(document, TYPING_EFFECT_SELECTOR);
        for el in &effects {
            let cfg = base.with_attributes(
                el.get_attribute("data-speed").as_deref(),
                el.get_attribute("data-delay").as_deref(),
            );
            animate::run_typing(el.clone(), dom::text_of(el), cfg);
        }
        if let Some(el) = dom::query_one(document, TYPING_TEXT_SELECTOR) {
            let text = dom::text_of(&el);
            animate::run_typing(el, text, TypingConfig::headline());
        }
        log::info!("[typing] {} effects", effects.len());
    }

    // ---------------- Page-script exports ----------------

    #[wasm_bindgen]
    pub fn celebrate_with_confetti() {
        if let Some(document) = dom::window_document() {
            celebrate::run(&document, &FxConfig::default().confetti);
        }
    }

    #[wasm_bindgen]
    pub fn smooth_scroll_to(target_id: &str) -> bool {
        dom::window_document()
            .map(|d| page::smooth_scroll_to(&d, target_id))
            .unwrap_or(false)
    }

    /// Count `element` up to `target` over `duration_ms` (default 2000).
    #[wasm_bindgen]
    pub fn animate_counter(element: web::HtmlElement, target: u32, duration_ms: Option<u32>) {
        let mut cfg = FxConfig::default().counter;
        if let Some(d) = duration_ms.filter(|d| *d > 0) {
            cfg.duration_ms = d;
        }
        animate::run_counter(element, target as u64, cfg, Pace::Interval(cfg.tick_ms));
    }

    /// Type `text` into `element`, `speed_ms` per character (default 100), no caret.
    #[wasm_bindgen]
    pub fn type_writer(element: web::HtmlElement, text: String, speed_ms: Option<u32>) {
        let base = TypingConfig::default();
        let cfg = TypingConfig {
            speed_ms: speed_ms.filter(|s| *s > 0).unwrap_or(base.speed_ms),
            caret: false,
            ..base
        };
        animate::run_typing(element, text, cfg);
    }
}
