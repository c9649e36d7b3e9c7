use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::components::pointer::use_pointer;

use super::config::SceneConfig;
use super::driver::{Animator, FrameLoop};
use super::render;

/// Fixed backing-store scale for inset canvases.
const INSET_SCALE: f64 = 2.0;

/// Seed a scene from the wall clock; tests seed explicitly instead.
fn clock_seed() -> u64 {
	js_sys::Date::now() as u64
}

/// A canvas bound to one procedural scene.
///
/// Fullscreen instances track the window; `inset` instances track their
/// parent element's box at [`INSET_SCALE`]. The scene starts on mount, is
/// rebuilt on every resize, and is disposed on unmount with its pending
/// frame callback cancelled.
#[component]
pub fn SceneCanvas(
	config: SceneConfig,
	#[prop(default = false)] inset: bool,
	#[prop(default = "backdrop-canvas")] class: &'static str,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animator: Rc<RefCell<Animator>> = Rc::new(RefCell::new(Animator::new(config)));
	let frame_loop: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let pointer = use_pointer();

	let (animator_init, loop_init, resize_cb_init) =
		(animator.clone(), frame_loop.clone(), resize_cb.clone());

	Effect::new(move |_| {
		if loop_init.borrow().is_some() {
			return;
		}
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = surface_size(&canvas, &window, inset);
		size_canvas(&canvas, w, h, inset);
		let Some(ctx) = context_2d(&canvas, inset) else {
			// Recoverable environment condition; never start ticking.
			warn!("2d context unavailable, canvas stays blank");
			return;
		};
		animator_init.borrow_mut().start(w, h, clock_seed());
		debug!("scene started at {w:.0}x{h:.0}");

		// Resize rebuilds the scene wholesale; old entities are not kept.
		let (animator_resize, canvas_resize, ctx_resize) =
			(animator_init.clone(), canvas.clone(), ctx.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(window) = web_sys::window() else {
				return;
			};
			let (nw, nh) = surface_size(&canvas_resize, &window, inset);
			size_canvas(&canvas_resize, nw, nh, inset);
			if inset {
				// resizing the canvas resets its transform
				let _ = ctx_resize.scale(INSET_SCALE, INSET_SCALE);
			}
			animator_resize.borrow_mut().resize(nw, nh, clock_seed());
			debug!("scene rebuilt at {nw:.0}x{nh:.0}");
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let animator_tick = animator_init.clone();
		*loop_init.borrow_mut() = FrameLoop::start(move || {
			let position = pointer.and_then(|p| p.position.get_untracked());
			let mut animator = animator_tick.borrow_mut();
			if animator.advance(position) {
				if let Some(scene) = animator.scene() {
					render::render(scene, &ctx);
				}
			}
		});
	});

	let (animator_cleanup, loop_cleanup, resize_cleanup) = (animator, frame_loop, resize_cb);
	on_cleanup(move || {
		// Cancel first so no tick can run against the disposed scene.
		if let Some(frame_loop) = loop_cleanup.borrow_mut().take() {
			frame_loop.cancel();
		}
		animator_cleanup.borrow_mut().dispose();
		if let Some(window) = web_sys::window() {
			if let Some(cb) = resize_cleanup.borrow_mut().take() {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
	});

	view! { <canvas node_ref=canvas_ref class=class /> }
}

fn surface_size(canvas: &HtmlCanvasElement, window: &Window, inset: bool) -> (f64, f64) {
	if inset {
		canvas
			.parent_element()
			.map(|parent| (parent.client_width() as f64, parent.client_height() as f64))
			.unwrap_or((0.0, 0.0))
	} else {
		let read = |value: Result<JsValue, JsValue>| {
			value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
		};
		(read(window.inner_width()), read(window.inner_height()))
	}
}

fn size_canvas(canvas: &HtmlCanvasElement, w: f64, h: f64, inset: bool) {
	let scale = if inset { INSET_SCALE } else { 1.0 };
	canvas.set_width((w * scale) as u32);
	canvas.set_height((h * scale) as u32);
}

fn context_2d(canvas: &HtmlCanvasElement, inset: bool) -> Option<CanvasRenderingContext2d> {
	let ctx = canvas.get_context("2d").ok().flatten()?;
	let ctx: CanvasRenderingContext2d = ctx.dyn_into().ok()?;
	if inset {
		let _ = ctx.scale(INSET_SCALE, INSET_SCALE);
	}
	Some(ctx)
}
