use crate::core::config::{MagneticConfig, RippleConfig};
use crate::core::pointer::{center_offset, magnetic_offset, px, ripple_box, translate_css};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const MAGNETIC_BUTTON_SELECTOR: &str = ".magnetic-btn";
pub const MAGNETIC_CARD_SELECTOR: &str = ".magnetic-card";
pub const RIPPLE_BUTTON_SELECTOR: &str = ".ripple-btn";
pub const RIPPLE_SELECTOR: &str = ".ripple";

/// Buttons drift toward the pointer by `offset / damping` and snap back on leave.
pub fn wire_magnetic_buttons(document: &web::Document, cfg: MagneticConfig) -> usize {
    let buttons = dom::query_all(document, MAGNETIC_BUTTON_SELECTOR);
    for el in &buttons {
        let el_move = el.clone();
        dom::on_mouse(el, "mousemove", move |ev| {
            let offset = magnetic_offset(
                dom::client_point(&ev),
                dom::client_rect(&el_move),
                cfg.damping,
            );
            dom::set_style(&el_move, "transform", &translate_css(offset));
        });
        let el_leave = el.clone();
        dom::on_mouse(el, "mouseleave", move |_| {
            dom::set_style(&el_leave, "transform", "translate(0, 0)");
        });
    }
    buttons.len()
}

/// Cards expose the scaled pointer offset as `--mouse-x` / `--mouse-y` for CSS to use.
pub fn wire_magnetic_cards(document: &web::Document, cfg: MagneticConfig) -> usize {
    let cards = dom::query_all(document, MAGNETIC_CARD_SELECTOR);
    for el in &cards {
        let el_move = el.clone();
        dom::on_mouse(el, "mousemove", move |ev| {
            let offset =
                center_offset(dom::client_point(&ev), dom::client_rect(&el_move)) * cfg.card_factor;
            dom::set_style(&el_move, "--mouse-x", &px(offset.x));
            dom::set_style(&el_move, "--mouse-y", &px(offset.y));
        });
        let el_leave = el.clone();
        dom::on_mouse(el, "mouseleave", move |_| {
            dom::set_style(&el_leave, "--mouse-x", "0px");
            dom::set_style(&el_leave, "--mouse-y", "0px");
        });
    }
    cards.len()
}

/// Every click on a matching element spawns its own `span.<ripple_class>`.
pub fn wire_ripples(
    document: &web::Document,
    selector: &str,
    ripple_class: &'static str,
    cfg: RippleConfig,
) -> usize {
    let hosts = dom::query_all(document, selector);
    for el in &hosts {
        let host = el.clone();
        let doc = document.clone();
        dom::on_mouse(el, "click", move |ev| {
            spawn_ripple(&doc, &host, &ev, ripple_class, cfg);
        });
    }
    hosts.len()
}

fn spawn_ripple(
    document: &web::Document,
    host: &web::HtmlElement,
    ev: &web::MouseEvent,
    ripple_class: &str,
    cfg: RippleConfig,
) {
    let Ok(span) = document.create_element("span") else {
        return;
    };
    let Ok(span) = span.dyn_into::<web::HtmlElement>() else {
        return;
    };
    let b = ripple_box(dom::client_point(ev), dom::client_rect(host));
    _ = span.class_list().add_1(ripple_class);
    dom::set_style(&span, "width", &px(b.size));
    dom::set_style(&span, "height", &px(b.size));
    dom::set_style(&span, "left", &px(b.left));
    dom::set_style(&span, "top", &px(b.top));
    if host.append_child(&span).is_ok() {
        dom::remove_after(span.into(), cfg.lifetime_ms);
    }
}
