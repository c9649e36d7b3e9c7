//! Thin bar along the top edge tracking how far the page is scrolled.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// Scrolled share of the document in 0..1; zero when nothing can scroll.
fn scrolled_fraction(window: &web_sys::Window) -> f64 {
	let Some(root) = window.document().and_then(|doc| doc.document_element()) else {
		return 0.0;
	};
	let max = (root.scroll_height() - root.client_height()) as f64;
	if max <= 0.0 {
		0.0
	} else {
		(root.scroll_top() as f64 / max).clamp(0.0, 1.0)
	}
}

#[component]
pub fn ScrollProgress() -> impl IntoView {
	let progress = RwSignal::new(0.0f64);
	let scroll_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let cb_init = scroll_cb.clone();
	Effect::new(move |_| {
		if cb_init.borrow().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		progress.set(scrolled_fraction(&window));
		*cb_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(window) = web_sys::window() {
				progress.set(scrolled_fraction(&window));
			}
		}));
		if let Some(ref cb) = *cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
		}
	});

	let cb_cleanup = scroll_cb;
	on_cleanup(move || {
		if let Some(window) = web_sys::window() {
			if let Some(cb) = cb_cleanup.borrow_mut().take() {
				let _ =
					window.remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
			}
		}
	});

	view! {
		<div
			class="scroll-progress"
			style=move || format!("transform: scaleX({});", progress.get())
		></div>
	}
}
