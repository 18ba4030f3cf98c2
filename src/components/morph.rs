//! Rotating typewriter text.
//!
//! A pure state machine types each phrase out character by character, holds
//! it, deletes it, and moves on to the next phrase in the list. The leptos
//! component drives the machine with self-re-arming timeouts and writes each
//! frame into a text signal.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Delay before the first character is typed.
const START_DELAY_MS: u32 = 600;
/// Delay between typed characters.
const TYPE_MS: u32 = 90;
/// Delay between deleted characters.
const DELETE_MS: u32 = 40;
/// Hold time once a phrase is fully typed.
const HOLD_MS: u32 = 2200;
/// Pause between deleting one phrase and typing the next.
const GAP_MS: u32 = 400;

/// Page-supplied typewriter configuration, embedded as JSON in the document.
#[derive(Clone, Debug, Deserialize)]
pub struct MorphConfig {
	pub phrases: Vec<String>,
}

/// One step of the typewriter: the text to display and how long to wait
/// before the next step.
#[derive(Clone, Debug, PartialEq)]
pub struct MorphFrame {
	pub text: String,
	pub delay_ms: u32,
}

/// Typewriter state machine over a fixed phrase list.
pub struct MorphState {
	phrases: Vec<String>,
	phrase: usize,
	chars: usize,
	deleting: bool,
}

impl MorphState {
	/// Build a machine over the given phrases. Empty phrases are dropped;
	/// returns `None` if nothing remains to type.
	pub fn new(phrases: Vec<String>) -> Option<Self> {
		let phrases: Vec<String> = phrases.into_iter().filter(|p| !p.is_empty()).collect();
		if phrases.is_empty() {
			return None;
		}
		Some(Self {
			phrases,
			phrase: 0,
			chars: 0,
			deleting: false,
		})
	}

	/// Advance one step and return the text to show plus the delay until the
	/// next step. Slicing is by char count, not bytes; phrases may contain
	/// non-ASCII.
	pub fn tick(&mut self) -> MorphFrame {
		let current = &self.phrases[self.phrase];
		let len = current.chars().count();

		let mut delay_ms = if self.deleting {
			self.chars -= 1;
			DELETE_MS
		} else {
			self.chars += 1;
			TYPE_MS
		};
		let text: String = current.chars().take(self.chars).collect();

		if !self.deleting && self.chars == len {
			delay_ms = HOLD_MS;
			self.deleting = true;
		} else if self.deleting && self.chars == 0 {
			self.deleting = false;
			self.phrase = (self.phrase + 1) % self.phrases.len();
			delay_ms = GAP_MS;
		}

		MorphFrame { text, delay_ms }
	}
}

/// Renders rotating typewriter text into a span.
///
/// With an empty phrase list the span stays empty and no timers are started.
#[component]
pub fn MorphText(#[prop(into)] phrases: Vec<String>) -> impl IntoView {
	let (text, set_text) = signal(String::new());
	let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let tick_init = tick.clone();

	Effect::new(move |_| {
		let Some(state) = MorphState::new(phrases.clone()) else {
			return;
		};
		let state = Rc::new(RefCell::new(state));

		let tick_inner = tick_init.clone();
		*tick_init.borrow_mut() = Some(Closure::new(move || {
			let frame = state.borrow_mut().tick();
			set_text.set(frame.text);
			if let Some(ref cb) = *tick_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.set_timeout_with_callback_and_timeout_and_arguments_0(
						cb.as_ref().unchecked_ref(),
						frame.delay_ms as i32,
					);
			}
		}));
		if let Some(ref cb) = *tick_init.borrow() {
			let _ = web_sys::window()
				.unwrap()
				.set_timeout_with_callback_and_timeout_and_arguments_0(
					cb.as_ref().unchecked_ref(),
					START_DELAY_MS as i32,
				);
		}
	});

	view! { <span class="morph-text">{move || text.get()}</span> }
}
