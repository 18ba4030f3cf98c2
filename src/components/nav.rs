//! Scroll-driven navigation behavior for the static page chrome.
//!
//! Wires four independent behaviors onto existing markup: a `scrolled` class
//! on the nav bar, active-link highlighting driven by an
//! `IntersectionObserver` over the page sections, the burger/mobile menu
//! toggle, and smooth scrolling for in-page anchors. Each behavior silently
//! skips when its elements are absent; listeners live for the page session.

use wasm_bindgen::prelude::*;
use web_sys::{
	Document, Element, Event, IntersectionObserver, IntersectionObserverEntry,
	IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

/// Scroll offset (px) past which the nav bar gets the `scrolled` class.
const SCROLLED_AT: f64 = 60.0;

/// Observer root margin tuned so a section counts as active while it occupies
/// the upper-middle band of the viewport.
const SECTION_ROOT_MARGIN: &str = "-30% 0px -55% 0px";

/// Attach all navigation behaviors to the document.
pub fn wire(document: &Document) {
	let _ = wire_scroll_state(document);
	let _ = wire_active_sections(document);
	let _ = wire_burger(document);
	wire_smooth_scroll(document);
}

fn elements(document: &Document, selector: &str) -> Vec<Element> {
	let Ok(list) = document.query_selector_all(selector) else {
		return Vec::new();
	};
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

/// Toggle `scrolled` on the nav bar as the window scrolls past the fold.
fn wire_scroll_state(document: &Document) -> Option<()> {
	let nav = document.get_element_by_id("glassNav")?;
	let window = web_sys::window()?;

	let cb: Closure<dyn FnMut()> = Closure::new(move || {
		let scrolled = web_sys::window()
			.and_then(|w| w.scroll_y().ok())
			.is_some_and(|y| y > SCROLLED_AT);
		let _ = nav.class_list().toggle_with_force("scrolled", scrolled);
	});
	let _ = window.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
	cb.forget();
	Some(())
}

/// Highlight the nav link whose section currently intersects the viewport.
fn wire_active_sections(document: &Document) -> Option<()> {
	let sections = elements(document, "section[id]");
	let anchors = elements(document, ".glass-nav__links a, .mobile-menu a");
	if sections.is_empty() || anchors.is_empty() {
		return None;
	}

	let cb: Closure<dyn FnMut(js_sys::Array)> = Closure::new(move |entries: js_sys::Array| {
		for entry in entries.iter() {
			let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
				continue;
			};
			if !entry.is_intersecting() {
				continue;
			}
			let Some(id) = entry.target().get_attribute("id") else {
				continue;
			};
			for a in &anchors {
				let active = a.get_attribute("data-section").as_deref() == Some(id.as_str());
				let _ = a.class_list().toggle_with_force("active", active);
			}
		}
	});

	let options = IntersectionObserverInit::new();
	options.set_root_margin(SECTION_ROOT_MARGIN);
	let observer =
		IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options).ok()?;
	cb.forget();

	for section in &sections {
		observer.observe(section);
	}
	Some(())
}

/// Burger button toggles the mobile menu and locks body scroll while open.
fn wire_burger(document: &Document) -> Option<()> {
	let burger = document.get_element_by_id("burger")?;
	let menu = document.get_element_by_id("mobileMenu")?;

	let (doc, burger_cb, menu_cb) = (document.clone(), burger.clone(), menu.clone());
	let toggle: Closure<dyn FnMut()> = Closure::new(move || {
		let _ = burger_cb.class_list().toggle("open");
		let _ = menu_cb.class_list().toggle("open");
		if let Some(body) = doc.body() {
			if menu_cb.class_list().contains("open") {
				let _ = body.style().set_property("overflow", "hidden");
			} else {
				let _ = body.style().remove_property("overflow");
			}
		}
	});
	let _ = burger.add_event_listener_with_callback("click", toggle.as_ref().unchecked_ref());
	toggle.forget();

	// Menu links close the menu again.
	for link in elements(document, "#mobileMenu a") {
		let (doc, burger_cb, menu_cb) = (document.clone(), burger.clone(), menu.clone());
		let close: Closure<dyn FnMut()> = Closure::new(move || {
			let _ = burger_cb.class_list().remove_1("open");
			let _ = menu_cb.class_list().remove_1("open");
			if let Some(body) = doc.body() {
				let _ = body.style().remove_property("overflow");
			}
		});
		let _ = link.add_event_listener_with_callback("click", close.as_ref().unchecked_ref());
		close.forget();
	}
	Some(())
}

/// Intercept in-page anchor clicks for smooth scrolling with hash updates.
fn wire_smooth_scroll(document: &Document) {
	for link in elements(document, "a[href^=\"#\"]") {
		let doc = document.clone();
		let link_cb = link.clone();
		let cb: Closure<dyn FnMut(Event)> = Closure::new(move |ev: Event| {
			let Some(href) = link_cb.get_attribute("href") else {
				return;
			};
			if href.len() <= 1 {
				return;
			}
			ev.prevent_default();
			let Ok(Some(target)) = doc.query_selector(&href) else {
				return;
			};
			let options = ScrollIntoViewOptions::new();
			options.set_behavior(ScrollBehavior::Smooth);
			options.set_block(ScrollLogicalPosition::Start);
			target.scroll_into_view_with_scroll_into_view_options(&options);
			if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
				let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&href));
			}
		});
		let _ = link.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
		cb.forget();
	}
}
