use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

use super::animator::scene::Point;

/// Pointer state shared by every scene and the cursor overlay.
///
/// Installed once at the app root; consumers sample it read-only. This is
/// the only cross-instance input in the whole decorative layer.
#[derive(Clone, Copy)]
pub struct PointerState {
	/// Last known window-space position; `None` until the pointer first moves.
	pub position: RwSignal<Option<Point>>,
	/// Whether a button is currently held.
	pub pressed: RwSignal<bool>,
}

/// Install the window listeners and provide [`PointerState`] as context.
///
/// The listeners live for the lifetime of the app, so their closures are
/// intentionally leaked with `forget`.
pub fn provide_pointer() {
	let state = PointerState {
		position: RwSignal::new(None),
		pressed: RwSignal::new(false),
	};
	provide_context(state);

	let Some(window) = web_sys::window() else {
		return;
	};

	let move_cb: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |ev: MouseEvent| {
		state.position.set(Some(Point {
			x: ev.client_x() as f64,
			y: ev.client_y() as f64,
		}));
	});
	let down_cb: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |_: MouseEvent| {
		state.pressed.set(true);
	});
	let up_cb: Closure<dyn FnMut(MouseEvent)> = Closure::new(move |_: MouseEvent| {
		state.pressed.set(false);
	});

	let _ = window.add_event_listener_with_callback("mousemove", move_cb.as_ref().unchecked_ref());
	let _ = window.add_event_listener_with_callback("mousedown", down_cb.as_ref().unchecked_ref());
	let _ = window.add_event_listener_with_callback("mouseup", up_cb.as_ref().unchecked_ref());
	move_cb.forget();
	down_cb.forget();
	up_cb.forget();
}

/// The shared pointer state, when a [`provide_pointer`] root exists.
pub fn use_pointer() -> Option<PointerState> {
	use_context::<PointerState>()
}
