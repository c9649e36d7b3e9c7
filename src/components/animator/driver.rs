use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use super::config::SceneConfig;
use super::scene::{Point, Scene};

/// Lifecycle phase of an [`Animator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	Idle,
	Running,
	Disposed,
}

/// Owns one scene and its lifecycle. The embedding layer drives it once per
/// animation frame; once disposed it refuses all further work.
pub struct Animator {
	config: SceneConfig,
	scene: Option<Scene>,
	phase: Phase,
	frames: u64,
}

impl Animator {
	pub fn new(config: SceneConfig) -> Self {
		Self {
			config,
			scene: None,
			phase: Phase::Idle,
			frames: 0,
		}
	}

	/// Build the scene and begin accepting ticks. No-op unless idle.
	pub fn start(&mut self, width: f64, height: f64, seed: u64) {
		if self.phase != Phase::Idle {
			return;
		}
		self.scene = Some(Scene::generate(&self.config, width, height, seed));
		self.phase = Phase::Running;
	}

	/// Rebuild the scene for new surface dimensions. The old scene is
	/// discarded wholesale; entities are not migrated. No-op unless running.
	pub fn resize(&mut self, width: f64, height: f64, seed: u64) {
		if self.phase != Phase::Running {
			return;
		}
		self.scene = Some(Scene::generate(&self.config, width, height, seed));
	}

	/// Advance one tick. Returns whether a tick actually ran.
	pub fn advance(&mut self, pointer: Option<Point>) -> bool {
		if self.phase != Phase::Running {
			return false;
		}
		let Some(scene) = self.scene.as_mut() else {
			return false;
		};
		scene.tick(pointer);
		self.frames += 1;
		true
	}

	/// Drop the scene and refuse all further work. Terminal.
	pub fn dispose(&mut self) {
		self.phase = Phase::Disposed;
		self.scene = None;
	}

	pub fn scene(&self) -> Option<&Scene> {
		self.scene.as_ref()
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub fn frames(&self) -> u64 {
		self.frames
	}
}

/// A self-rescheduling `requestAnimationFrame` chain behind an owned handle.
///
/// [`cancel`](Self::cancel) takes the pending handle, cancels the scheduled
/// frame and drops the closure, so no further invocation can happen even
/// across rapid remounts. Must not be called from inside the tick itself.
pub struct FrameLoop {
	raf_id: Rc<Cell<Option<i32>>>,
	closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
	/// Begin ticking every animation frame. Returns `None` when there is no
	/// window to schedule on, in which case `tick` is never invoked.
	pub fn start(mut tick: impl FnMut() + 'static) -> Option<Self> {
		let window = web_sys::window()?;
		let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
		let closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

		let (raf_inner, closure_inner) = (raf_id.clone(), closure.clone());
		*closure.borrow_mut() = Some(Closure::new(move || {
			if raf_inner.get().is_none() {
				// cancelled between scheduling and delivery
				return;
			}
			tick();
			if let Some(ref cb) = *closure_inner.borrow() {
				if let Some(window) = web_sys::window() {
					match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
						Ok(id) => raf_inner.set(Some(id)),
						Err(_) => raf_inner.set(None),
					}
				}
			}
		}));

		let first = {
			let cb = closure.borrow();
			let cb = cb.as_ref()?;
			window
				.request_animation_frame(cb.as_ref().unchecked_ref())
				.ok()?
		};
		raf_id.set(Some(first));

		Some(Self { raf_id, closure })
	}

	/// Cancel the pending frame and drop the closure chain.
	pub fn cancel(&self) {
		if let Some(id) = self.raf_id.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
		self.closure.borrow_mut().take();
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.cancel();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn advance_requires_start() {
		let mut animator = Animator::new(SceneConfig::quantum_field());
		assert_eq!(animator.phase(), Phase::Idle);
		assert!(!animator.advance(None));
		assert_eq!(animator.frames(), 0);
		assert!(animator.scene().is_none());
	}

	#[test]
	fn start_builds_a_scene_and_ticks_run() {
		let mut animator = Animator::new(SceneConfig::quantum_field());
		animator.start(300.0, 200.0, 8);
		assert_eq!(animator.phase(), Phase::Running);
		assert!(animator.advance(None));
		assert!(animator.advance(Some(Point { x: 10.0, y: 10.0 })));
		assert_eq!(animator.frames(), 2);
	}

	#[test]
	fn disposed_animator_ignores_everything() {
		let mut animator = Animator::new(SceneConfig::quantum_field());
		animator.start(300.0, 200.0, 8);
		assert!(animator.advance(None));
		let frames = animator.frames();

		animator.dispose();
		assert_eq!(animator.phase(), Phase::Disposed);
		assert!(animator.scene().is_none());
		assert!(!animator.advance(None));
		assert_eq!(animator.frames(), frames);

		// disposal is terminal; restarting is refused
		animator.start(300.0, 200.0, 8);
		assert_eq!(animator.phase(), Phase::Disposed);
		assert!(!animator.advance(None));
	}

	#[test]
	fn resize_rebuilds_the_scene() {
		let mut animator = Animator::new(SceneConfig::quantum_field());
		animator.start(300.0, 200.0, 8);
		animator.resize(120.0, 80.0, 9);
		let scene = animator.scene().expect("scene after resize");
		assert_eq!(scene.width, 120.0);
		assert_eq!(scene.height, 80.0);
		for entity in &scene.entities {
			assert!((0.0..=120.0).contains(&entity.x));
			assert!((0.0..=80.0).contains(&entity.y));
		}
	}

	#[test]
	fn second_start_does_not_reset_a_running_animator() {
		let mut animator = Animator::new(SceneConfig::quantum_field());
		animator.start(300.0, 200.0, 8);
		assert!(animator.advance(None));
		animator.start(50.0, 50.0, 1);
		let scene = animator.scene().expect("scene");
		assert_eq!(scene.width, 300.0);
		assert_eq!(animator.frames(), 1);
	}
}
