// Host-side tests for effect configuration defaults and attribute fallbacks.

use page_fx::core::config::{
    float_or, non_negative_int_or, positive_int_or, ScrollRevealLibConfig, TypingConfig,
};
use page_fx::core::FxConfig;

#[test]
fn defaults_match_documented_values() {
    let cfg = FxConfig::default();
    assert_eq!(cfg.reveal.threshold, 0.1);
    assert_eq!(cfg.reveal.root_margin, "0px 0px -100px 0px");
    assert_eq!(cfg.stats.threshold, 0.5);
    assert_eq!(cfg.counter.duration_ms, 2000);
    assert_eq!(cfg.counter.tick_ms, 16);
    assert_eq!(cfg.typing.speed_ms, 100);
    assert_eq!(cfg.typing.delay_ms, 0);
    assert!(cfg.typing.caret);
    assert_eq!(cfg.magnetic.damping, 20.0);
    assert_eq!(cfg.ripple.lifetime_ms, 600);
    assert_eq!(cfg.parallax.speed, 0.5);
    assert_eq!(cfg.confetti.count, 50);
    assert_eq!(cfg.confetti.palette.len(), 6);
    assert_eq!(cfg.celebration_delay_ms, 1000);
}

#[test]
fn headline_typing_is_fast_without_caret() {
    let t = TypingConfig::headline();
    assert_eq!(t.speed_ms, 80);
    assert!(!t.caret);
}

#[test]
fn typing_attributes_override_or_fall_back() {
    let base = TypingConfig::default();
    let t = base.with_attributes(Some("50"), Some("1200"));
    assert_eq!((t.speed_ms, t.delay_ms), (50, 1200));
    let t = base.with_attributes(Some("fast"), None);
    assert_eq!((t.speed_ms, t.delay_ms), (100, 0));
    let t = base.with_attributes(Some("0"), Some("-5"));
    assert_eq!((t.speed_ms, t.delay_ms), (100, 0));
}

#[test]
fn integer_fallbacks() {
    assert_eq!(positive_int_or(Some("30ms"), 100), 30);
    assert_eq!(positive_int_or(None, 100), 100);
    assert_eq!(non_negative_int_or(Some("1,250"), 0), 1);
    assert_eq!(non_negative_int_or(Some("n/a"), 0), 0);
    assert_eq!(non_negative_int_or(Some("-4"), 0), 0);
    assert_eq!(non_negative_int_or(Some(" 87 "), 0), 87);
}

#[test]
fn float_fallbacks() {
    assert_eq!(float_or(Some("0.2"), 0.5), 0.2);
    assert_eq!(float_or(Some("-1.5"), 0.5), -1.5);
    assert_eq!(float_or(Some("slow"), 0.5), 0.5);
    assert_eq!(float_or(Some("NaN"), 0.5), 0.5);
    assert_eq!(float_or(Some("inf"), 0.5), 0.5);
    assert_eq!(float_or(None, 0.5), 0.5);
}

#[test]
fn scroll_reveal_lib_options_serialize_flat() {
    let json = serde_json::to_value(ScrollRevealLibConfig::default()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"duration": 800, "easing": "ease-in-out", "once": true, "offset": 100})
    );
}
