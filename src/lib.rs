//! portfolio-fx: client-side effects for a personal portfolio site.
//!
//! This crate provides the WASM-based page behavior: an animated particle
//! constellation backdrop on a canvas, rotating typewriter text, scroll-driven
//! navigation highlighting, and reveal-on-scroll transitions.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::constellation::{ConstellationCanvas, ConstellationStyle, Field, Particle};
pub use components::morph::{MorphState, MorphText};
pub use components::{nav, reveal};

use components::morph::MorphConfig;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-fx: logging initialized");
}

/// Built-in typewriter phrases, used when the page supplies none.
fn default_phrases() -> Vec<String> {
	[
		"PhD Student @ ÉTS Montreal",
		"AI for Software Engineering",
		"Agentic AI Researcher",
		"LLM Specialist",
		"Data Scientist",
		"Prompt Engineer",
		"University Lecturer",
		"Open Source Contributor",
	]
	.into_iter()
	.map(String::from)
	.collect()
}

/// Load typewriter phrases from a script element with id="morph-phrases".
/// Expected format: JSON with { phrases: [...] }
fn load_phrases() -> Option<Vec<String>> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("morph-phrases")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<MorphConfig>(&json_text) {
		Ok(config) if !config.phrases.is_empty() => {
			info!("portfolio-fx: loaded {} phrases", config.phrases.len());
			Some(config.phrases)
		}
		Ok(_) => {
			warn!("portfolio-fx: phrase list is empty, using defaults");
			None
		}
		Err(e) => {
			warn!("portfolio-fx: failed to parse phrases: {}", e);
			None
		}
	}
}

/// Main application component.
///
/// Mounts the constellation backdrop and the typewriter hero text, then wires
/// navigation and reveal behavior onto the surrounding static markup. Every
/// piece skips silently when its page elements are missing.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let phrases = load_phrases().unwrap_or_else(default_phrases);

	Effect::new(move |_| {
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			return;
		};
		nav::wire(&document);
		let _ = reveal::observe(&document);
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="constellation-backdrop">
			<ConstellationCanvas fullscreen=true />
		</div>
		<div class="hero-overlay">
			<MorphText phrases=phrases />
		</div>
	}
}
