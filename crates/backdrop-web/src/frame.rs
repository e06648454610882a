//! Cancellable repeating requestAnimationFrame task.
//!
//! The browser gives us one callback per display refresh; the loop
//! reschedules itself after each frame until cancelled. Cancellation is
//! idempotent and effective even if it lands before the first frame fires.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameLoop {
    inner: Rc<Inner>,
}

struct Inner {
    raf_id: Cell<i32>,
    cancelled: Cell<bool>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameLoop {
    /// Starts the loop; `on_frame` runs once per animation frame starting
    /// with the next one.
    pub fn start(mut on_frame: impl FnMut() + 'static) -> Self {
        let inner = Rc::new(Inner {
            raf_id: Cell::new(0),
            cancelled: Cell::new(false),
            tick: RefCell::new(None),
        });

        // The closure only holds a weak handle, so the loop's memory is
        // reclaimed once the owning FrameLoop goes away.
        let weak: Weak<Inner> = Rc::downgrade(&inner);
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if inner.cancelled.get() {
                return;
            }
            on_frame();
            if !inner.cancelled.get() {
                Inner::schedule(&inner);
            }
        }) as Box<dyn FnMut()>));

        Inner::schedule(&inner);
        Self { inner }
    }

    /// Stops the loop: the pending callback is cancelled and the tick
    /// closure released. Safe to call any number of times.
    pub fn cancel(&self) {
        if self.inner.cancelled.replace(true) {
            return;
        }
        if let Some(w) = web::window() {
            let _ = w.cancel_animation_frame(self.inner.raf_id.get());
        }
        drop(self.inner.tick.borrow_mut().take());
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl Inner {
    fn schedule(inner: &Rc<Inner>) {
        let Some(window) = web::window() else {
            return;
        };
        let tick = inner.tick.borrow();
        if let Some(cb) = tick.as_ref() {
            if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                inner.raf_id.set(id);
            }
        }
    }
}
