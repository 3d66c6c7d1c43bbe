use crate::constants::PROGRESS_CLASS;
use crate::core::config::{float_or, ParallaxConfig};
use crate::core::scroll::{parallax_offset, percent_css, progress_percent, translate_y_css};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const PARALLAX_SELECTOR: &str = ".parallax";

/// Translate each `.parallax` element by `scrollY × speed` on every scroll.
/// `data-speed` on an element overrides the shared speed and is read per event.
pub fn wire_parallax(document: &web::Document, cfg: ParallaxConfig) -> usize {
    let layers = dom::query_all(document, PARALLAX_SELECTOR);
    if layers.is_empty() {
        return 0;
    }
    let count = layers.len();
    dom::on_scroll(move || {
        let Some(window) = web::window() else {
            return;
        };
        let scrolled = window.page_y_offset().unwrap_or(0.0);
        apply_parallax(&layers, scrolled, cfg);
    });
    count
}

pub fn apply_parallax(layers: &[web::HtmlElement], scrolled: f64, cfg: ParallaxConfig) {
    for el in layers {
        let speed = float_or(el.get_attribute("data-speed").as_deref(), cfg.speed);
        dom::set_style(el, "transform", &translate_y_css(parallax_offset(scrolled, speed)));
    }
}

/// Keep a `.scroll-progress` bar's width at the scrolled fraction of the page,
/// creating the bar under `<body>` when the page lacks one.
pub fn wire_progress_bar(document: &web::Document) -> anyhow::Result<()> {
    let selector = format!(".{}", PROGRESS_CLASS);
    let bar = match dom::query_one(document, &selector) {
        Some(bar) => bar,
        None => {
            let body = document
                .body()
                .ok_or_else(|| anyhow::anyhow!("no body"))?;
            let bar = document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?
                .dyn_into::<web::HtmlElement>()
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            bar.set_class_name(PROGRESS_CLASS);
            body.append_child(&bar)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            bar
        }
    };

    let doc = document.clone();
    dom::on_scroll(move || {
        let Some(root) = doc.document_element() else {
            return;
        };
        let body_top = doc.body().map(|b| b.scroll_top()).unwrap_or(0);
        let scroll_top = if body_top != 0 {
            body_top
        } else {
            root.scroll_top()
        };
        let percent = progress_percent(
            scroll_top as f64,
            root.scroll_height() as f64,
            root.client_height() as f64,
        );
        dom::set_style(&bar, "width", &percent_css(percent));
    });
    Ok(())
}
