//! Ring-and-dot cursor overlay. The dot snaps to the shared pointer state;
//! the ring eases toward it on its own frame loop.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use super::animator::driver::FrameLoop;
use super::animator::scene::Point;
use super::pointer::use_pointer;

/// Fraction of the remaining distance the ring closes each frame.
const EASE: f64 = 0.2;
const RING_SIZE: f64 = 32.0;
const DOT_SIZE: f64 = 8.0;

/// Hidden until the pointer first moves; the ring shrinks while pressed.
#[component]
pub fn CustomCursor() -> impl IntoView {
	let pointer = use_pointer();
	let ring = RwSignal::new(None::<Point>);
	let frame_loop: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));

	let loop_init = frame_loop.clone();
	Effect::new(move |_| {
		if loop_init.borrow().is_some() {
			return;
		}
		*loop_init.borrow_mut() = FrameLoop::start(move || {
			let Some(target) = pointer.and_then(|state| state.position.get_untracked()) else {
				return;
			};
			let current = ring.get_untracked().unwrap_or(target);
			ring.set(Some(Point {
				x: current.x + (target.x - current.x) * EASE,
				y: current.y + (target.y - current.y) * EASE,
			}));
		});
	});

	let loop_cleanup = frame_loop;
	on_cleanup(move || {
		if let Some(frame_loop) = loop_cleanup.borrow_mut().take() {
			frame_loop.cancel();
		}
	});

	let ring_style = move || match ring.get() {
		Some(p) => {
			let pressed = pointer.map(|state| state.pressed.get()).unwrap_or(false);
			let scale = if pressed { 0.75 } else { 1.0 };
			format!(
				"transform: translate({}px, {}px) scale({scale});",
				p.x - RING_SIZE / 2.0,
				p.y - RING_SIZE / 2.0
			)
		}
		None => "opacity: 0;".to_string(),
	};
	let dot_style = move || match pointer.and_then(|state| state.position.get()) {
		Some(p) => format!(
			"transform: translate({}px, {}px);",
			p.x - DOT_SIZE / 2.0,
			p.y - DOT_SIZE / 2.0
		),
		None => "opacity: 0;".to_string(),
	};

	view! {
		<div class="cursor-ring" style=ring_style></div>
		<div class="cursor-dot" style=dot_style></div>
	}
}
