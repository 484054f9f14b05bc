use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

/// One-way flag: once a section has been seen it stays revealed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Feeds one intersection report; true only on the report that reveals.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(self) -> bool {
        self.revealed
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Watches `node` against the viewport and flips to true the first time it
/// scrolls into view.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state(|| false);

    {
        let setter = revealed.setter();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let watch = node.cast::<Element>().and_then(|element| observe_once(&element, setter));
                move || {
                    if let Some((observer, _callback)) = watch {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *revealed
}

fn observe_once(element: &Element, revealed: UseStateSetter<bool>) -> Option<(IntersectionObserver, ObserverCallback)> {
    let latch = Rc::new(Cell::new(RevealLatch::default()));
    let fallback = revealed.clone();

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            if latch.get().is_revealed() {
                break;
            }
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let mut state = latch.get();
            if state.observe(entry.is_intersecting()) {
                latch.set(state);
                revealed.set(true);
                observer.unobserve(&entry.target());
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(_) => {
            warn!("IntersectionObserver unavailable, revealing section immediately");
            fallback.set(true);
            return None;
        }
    };
    observer.observe(element);
    Some((observer, callback))
}
