use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// How a ticker schedules its steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pace {
    /// Once per display frame via `requestAnimationFrame`.
    Frame,
    /// Every `n` milliseconds via `setInterval`.
    Interval(u32),
}

/// Returned by a step to keep going or finish.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

struct Inner {
    pace: Pace,
    handle: Cell<Option<i32>>,
    stopped: Cell<bool>,
    closure: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Inner {
    fn schedule_frame(&self) {
        let Some(window) = web::window() else {
            return;
        };
        if let Some(cb) = self.closure.borrow().as_ref() {
            match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => self.handle.set(Some(id)),
                Err(e) => log::warn!("[ticker] requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    fn cancel(&self) {
        if self.stopped.replace(true) {
            return;
        }
        if let (Some(window), Some(id)) = (web::window(), self.handle.take()) {
            match self.pace {
                Pace::Frame => {
                    _ = window.cancel_animation_frame(id);
                }
                Pace::Interval(_) => window.clear_interval_with_handle(id),
            }
        }
        // The closure may be the caller; release it on a later turn.
        if let Some(closure) = self.closure.borrow_mut().take() {
            crate::dom::set_timeout(0, move || drop(closure));
        }
    }
}

/// Owned repeating step driver.
///
/// The step keeps the ticker alive until it returns [`Flow::Stop`] or
/// [`Ticker::stop`] is called, so dropping a `Ticker` handle does not cancel
/// the run.
#[derive(Clone)]
pub struct Ticker {
    inner: Rc<Inner>,
}

impl Ticker {
    pub fn start(pace: Pace, mut step: impl FnMut() -> Flow + 'static) -> Ticker {
        let inner = Rc::new(Inner {
            pace,
            handle: Cell::new(None),
            stopped: Cell::new(false),
            closure: RefCell::new(None),
        });

        let inner_tick = inner.clone();
        let closure = Closure::wrap(Box::new(move || {
            if inner_tick.stopped.get() {
                return;
            }
            match step() {
                Flow::Continue => {
                    if inner_tick.pace == Pace::Frame {
                        inner_tick.schedule_frame();
                    }
                }
                Flow::Stop => inner_tick.cancel(),
            }
        }) as Box<dyn FnMut()>);
        *inner.closure.borrow_mut() = Some(closure);

        match pace {
            Pace::Frame => inner.schedule_frame(),
            Pace::Interval(ms) => {
                let id = web::window().and_then(|w| {
                    let cb = inner.closure.borrow();
                    let cb = cb.as_ref()?;
                    w.set_interval_with_callback_and_timeout_and_arguments_0(
                        cb.as_ref().unchecked_ref(),
                        ms.max(1).min(i32::MAX as u32) as i32,
                    )
                    .map_err(|e| log::warn!("[ticker] setInterval failed: {:?}", e))
                    .ok()
                });
                inner.handle.set(id);
            }
        }

        Ticker { inner }
    }

    pub fn stop(&self) {
        self.inner.cancel();
    }

    pub fn is_running(&self) -> bool {
        !self.inner.stopped.get()
    }
}
