//! One-shot reveal-on-scroll transitions.
//!
//! Elements tagged `data-reveal` get the `revealed` class the first time they
//! enter the viewport, then stop being observed. Absent elements mean nothing
//! to do.

use wasm_bindgen::prelude::*;
use web_sys::{
	Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

/// Fraction of an element that must be visible before it reveals.
const REVEAL_THRESHOLD: f64 = 0.12;

/// Observe every `[data-reveal]` element in the document.
pub fn observe(document: &Document) -> Option<()> {
	let list = document.query_selector_all("[data-reveal]").ok()?;
	if list.length() == 0 {
		return None;
	}

	let cb: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)> =
		Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if !entry.is_intersecting() {
					continue;
				}
				let target = entry.target();
				let _ = target.class_list().add_1("revealed");
				observer.unobserve(&target);
			}
		});

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));
	let observer =
		IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options).ok()?;
	cb.forget();

	for i in 0..list.length() {
		if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
			observer.observe(&el);
		}
	}
	Some(())
}
