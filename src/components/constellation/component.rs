//! Leptos component wrapping the constellation canvas.
//!
//! The component creates an HTML canvas element, builds the particle field
//! once on mount, and wires resize and pointer-move listeners. An animation
//! loop runs via `requestAnimationFrame`, stepping the field and redrawing
//! each frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::field::Field;
use super::render;
use super::theme::ConstellationStyle;

/// Bundles the particle field with the style it was built from.
struct FieldContext {
	field: Field,
	style: ConstellationStyle,
}

/// Renders an animated particle constellation on a canvas element.
///
/// The component sizes itself to its parent container by default; set
/// `fullscreen = true` to fill the viewport and resize automatically with the
/// window. Explicit `width`/`height` override automatic sizing. If the canvas
/// cannot be mounted the effect is silently skipped.
#[component]
pub fn ConstellationCanvas(
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(default = ConstellationStyle::nebula())] style: ConstellationStyle,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let pointer_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init, pointer_cb_init) = (
		context.clone(),
		animate.clone(),
		resize_cb.clone(),
		pointer_cb.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = if fullscreen {
			(
				window.inner_width().unwrap().as_f64().unwrap(),
				window.inner_height().unwrap().as_f64().unwrap(),
			)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		*context_init.borrow_mut() = Some(FieldContext {
			field: Field::new(&style, w, h),
			style: style.clone(),
		});

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let win: Window = web_sys::window().unwrap();
				let (nw, nh) = (
					win.inner_width().unwrap().as_f64().unwrap(),
					win.inner_height().unwrap().as_f64().unwrap(),
				);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.field.on_resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		// Pointer tracking listens on the document: the canvas sits behind
		// the page content, so it never receives pointer events itself.
		let (context_pointer, canvas_pointer) = (context_init.clone(), canvas.clone());
		*pointer_cb_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			let rect = canvas_pointer.get_bounding_client_rect();
			let (x, y) = (
				ev.client_x() as f64 - rect.left(),
				ev.client_y() as f64 - rect.top(),
			);
			if let Some(ref mut c) = *context_pointer.borrow_mut() {
				c.field.on_pointer_move(x, y);
			}
		}));
		if let Some(document) = window.document() {
			if let Some(ref cb) = *pointer_cb_init.borrow() {
				let _ = document
					.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.field.step();
				render::draw(&c.field, &ctx, &c.style);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="constellation-canvas"
			style="display: block;"
		/>
	}
}
