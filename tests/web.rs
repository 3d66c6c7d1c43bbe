// Browser tests; run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use page_fx::animate::run_counter;
use page_fx::core::config::{CounterConfig, ParallaxConfig, RevealConfig};
use page_fx::core::KvStore;
use page_fx::events::apply_parallax;
use page_fx::reveal::{wire_scroll_reveal, wire_stat_counters};
use page_fx::storage::LocalStorageStore;
use page_fx::ticker::{Flow, Pace, Ticker};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web::Document {
    web::window().unwrap().document().unwrap()
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn detached(class: &str, text: &str) -> web::HtmlElement {
    let el: web::HtmlElement = document()
        .create_element("div")
        .unwrap()
        .dyn_into()
        .unwrap();
    el.set_class_name(class);
    el.set_text_content(Some(text));
    _ = el.style().set_property("height", "20px");
    el
}

// Inserted at the top of <body> so it sits inside the viewport.
fn attached(class: &str, text: &str) -> web::HtmlElement {
    let el = detached(class, text);
    let body = document().body().unwrap();
    body.insert_before(&el, body.first_child().as_ref()).unwrap();
    el
}

#[wasm_bindgen_test]
fn local_storage_round_trips_flags() {
    let mut store = LocalStorageStore::open().expect("localStorage");
    store.set("page-fx-test", "true");
    assert!(store.has("page-fx-test"));
    assert_eq!(store.get("page-fx-test").as_deref(), Some("true"));
}

#[wasm_bindgen_test]
async fn stopped_ticker_never_steps() {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    let ticker = Ticker::start(Pace::Interval(5), move || {
        c.set(c.get() + 1);
        Flow::Continue
    });
    ticker.stop();
    ticker.stop();
    assert!(!ticker.is_running());
    sleep(60).await;
    assert_eq!(count.get(), 0);
}

#[wasm_bindgen_test]
async fn ticker_step_is_not_called_after_flow_stop() {
    let count = Rc::new(Cell::new(0));
    let c = count.clone();
    let ticker = Ticker::start(Pace::Interval(5), move || {
        c.set(c.get() + 1);
        if c.get() >= 3 {
            Flow::Stop
        } else {
            Flow::Continue
        }
    });
    sleep(150).await;
    assert_eq!(count.get(), 3);
    assert!(!ticker.is_running());
}

#[wasm_bindgen_test]
fn counter_on_detached_element_writes_nothing() {
    let el = detached("counter", "42");
    let ticker = run_counter(el.clone(), 100, CounterConfig::default(), Pace::Frame);
    assert!(ticker.is_none());
    assert_eq!(el.text_content().as_deref(), Some("42"));
}

#[wasm_bindgen_test]
fn counter_with_zero_target_writes_zero_and_finishes() {
    let el = attached("counter", "9");
    let ticker = run_counter(el.clone(), 0, CounterConfig::default(), Pace::Frame);
    assert!(ticker.is_none());
    assert_eq!(el.text_content().as_deref(), Some("0"));
    el.remove();
}

#[wasm_bindgen_test]
async fn counter_stops_quietly_when_element_is_removed() {
    let el = attached("counter", "");
    let ticker = run_counter(
        el.clone(),
        2000,
        CounterConfig::default(),
        Pace::Interval(16),
    )
    .expect("still running after the first tick");
    assert_eq!(el.text_content().as_deref(), Some("16"));
    el.remove();
    sleep(100).await;
    assert_eq!(el.text_content().as_deref(), Some("16"));
    assert!(!ticker.is_running());
}

#[wasm_bindgen_test]
async fn element_watched_by_both_observers_fires_in_each() {
    let counter = attached("scroll-fade-up counter", "");
    _ = counter.set_attribute("data-target", "3");
    let shared = attached("scroll-fade-up stat-number", "7");
    let doc = document();
    wire_scroll_reveal(&doc, &RevealConfig::default(), CounterConfig::default());
    wire_stat_counters(&doc, &RevealConfig::stats(), CounterConfig::default());
    sleep(300).await;

    assert!(counter.class_list().contains("animated"));
    assert!(shared.class_list().contains("animated"));
    assert_eq!(shared.get_attribute("data-animated").as_deref(), Some("true"));
    assert!(counter.get_attribute("data-animated").is_none());
    // Watching leaves no bookkeeping attributes on the page.
    let expected = ["class", "style", "data-target", "data-animated"];
    for el in [&counter, &shared] {
        for name in el.get_attribute_names().iter() {
            let name = name.as_string().unwrap();
            assert!(expected.contains(&name.as_str()), "unexpected attribute {name}");
        }
    }
    counter.remove();
    shared.remove();
}

#[wasm_bindgen_test]
async fn stat_reads_text_and_marker_at_first_crossing() {
    let late_text = attached("stat-number", "");
    let late_marker = attached("stat-number", "9");
    wire_stat_counters(&document(), &RevealConfig::stats(), CounterConfig::default());
    // Observer callbacks are asynchronous; these land before the first crossing.
    late_text.set_text_content(Some("40"));
    _ = late_marker.set_attribute("data-animated", "true");
    sleep(500).await;

    let shown: u64 = late_text.text_content().unwrap().parse().unwrap();
    assert!(shown > 0 && shown <= 40, "shown={shown}");
    assert_eq!(late_marker.text_content().as_deref(), Some("9"));
    late_text.remove();
    late_marker.remove();
}

#[wasm_bindgen_test]
fn parallax_speed_is_read_on_each_scroll() {
    let layer = attached("parallax", "");
    let layers = vec![layer.clone()];
    let transform = |el: &web::HtmlElement| el.style().get_property_value("transform").unwrap();

    apply_parallax(&layers, 100.0, ParallaxConfig::default());
    assert_eq!(transform(&layer), "translateY(50px)");

    _ = layer.set_attribute("data-speed", "0.2");
    apply_parallax(&layers, 100.0, ParallaxConfig::default());
    assert_eq!(transform(&layer), "translateY(20px)");
    layer.remove();
}
