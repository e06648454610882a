//! Owned DOM event subscriptions.
//!
//! The closure stays owned here instead of being forgotten, and dropping the
//! listener removes it from its target; a renderer that unmounts leaves no
//! handlers behind.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Listener {
    target: web::EventTarget,
    event_type: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn add<T>(
        target: &T,
        event_type: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self
    where
        T: AsRef<web::EventTarget>,
    {
        let target = target.as_ref().clone();
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let _ = target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref());
        Self {
            target,
            event_type,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.closure.as_ref().unchecked_ref());
    }
}

/// Events arrive as plain `Event`; pointer handlers narrow them as needed.
#[inline]
pub fn as_mouse(ev: &web::Event) -> Option<web::MouseEvent> {
    ev.dyn_ref::<web::MouseEvent>().cloned()
}
