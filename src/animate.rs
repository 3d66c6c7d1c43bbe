use crate::constants::{CARET_ANIMATION, CARET_BORDER};
use crate::core::config::{CounterConfig, TypingConfig};
use crate::core::{CounterAnimation, TypingAnimation, TypingStep};
use crate::dom;
use crate::ticker::{Flow, Pace, Ticker};
use web_sys as web;

/// Count `el`'s text up to `target`.
///
/// The first value is written synchronously; the rest follow at `pace`. A
/// target element that leaves the page stops the run without further writes.
/// Returns `None` when the run already finished on the first step.
pub fn run_counter(
    el: web::HtmlElement,
    target: u64,
    cfg: CounterConfig,
    pace: Pace,
) -> Option<Ticker> {
    let mut anim = CounterAnimation::new(target, cfg.duration_ms, cfg.tick_ms);
    log::debug!(
        "[counter] target={} increment={:.3}",
        target,
        anim.increment()
    );
    let mut step = move || {
        if !el.is_connected() {
            return Flow::Stop;
        }
        match anim.step() {
            Some(tick) => {
                el.set_text_content(Some(&tick.value.to_string()));
                if tick.done {
                    Flow::Stop
                } else {
                    Flow::Continue
                }
            }
            None => Flow::Stop,
        }
    };
    (step() == Flow::Continue).then(|| Ticker::start(pace, step))
}

/// Type `text` into `el` one character per `cfg.speed_ms`.
pub fn run_typing(el: web::HtmlElement, text: String, cfg: TypingConfig) {
    el.set_text_content(Some(""));
    if cfg.caret {
        dom::set_style(&el, "border-right", CARET_BORDER);
        dom::set_style(&el, "animation", CARET_ANIMATION);
    }

    dom::set_timeout(cfg.delay_ms, move || {
        let mut anim = TypingAnimation::new(&text);
        let mut step = move || {
            if !el.is_connected() {
                return Flow::Stop;
            }
            match anim.step() {
                TypingStep::Typed(_) => {
                    el.set_text_content(Some(anim.shown()));
                    Flow::Continue
                }
                TypingStep::Finished => {
                    if cfg.caret {
                        let el = el.clone();
                        dom::set_timeout(cfg.caret_hide_delay_ms, move || {
                            dom::set_style(&el, "border-right", "none");
                        });
                    }
                    Flow::Stop
                }
            }
        };
        if step() == Flow::Continue {
            Ticker::start(Pace::Interval(cfg.speed_ms), step);
        }
    });
}
