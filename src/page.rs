use crate::constants::STAGGER_STEP_SEC;
use crate::dom;
use web_sys as web;

pub const PREMIUM_CARD_SELECTOR: &str = ".premium-card";
pub const STAT_CARD_SELECTOR: &str = ".stat-card";
pub const FADE_IN_CLASS: &str = "fade-in-up";

#[inline]
fn stagger_delay(index: usize) -> String {
    format!("{}s", index as f64 * STAGGER_STEP_SEC)
}

/// Offset each card's entrance animation by its position in the page.
pub fn stagger_cards(document: &web::Document) {
    for (i, card) in dom::query_all(document, PREMIUM_CARD_SELECTOR)
        .iter()
        .enumerate()
    {
        dom::set_style(card, "animation-delay", &stagger_delay(i));
        _ = card.class_list().add_1(FADE_IN_CLASS);
    }
    for (i, card) in dom::query_all(document, STAT_CARD_SELECTOR).iter().enumerate() {
        dom::set_style(card, "animation-delay", &stagger_delay(i));
    }
}

/// Smooth-scroll the element with `id` to the top of the viewport.
pub fn smooth_scroll_to(document: &web::Document, id: &str) -> bool {
    let Some(target) = document.get_element_by_id(id) else {
        return false;
    };
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(web::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}
