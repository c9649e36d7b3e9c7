//! Inset radar chart of research momentum per topic and year, revealed
//! year by year on its own frame loop.

use std::cell::RefCell;
use std::f64::consts::{FRAC_PI_2, TAU};
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::animator::driver::FrameLoop;

/// Fixed backing-store scale; the chart is crisp on dense displays.
const SCALE: f64 = 2.0;
const RING_COUNT: usize = 5;
const BASE_HUE: f64 = 260.0;
/// Ticks for one year's polygon to finish its reveal.
const REVEAL_TICKS: f64 = 20.0;

/// Sampled topic intensities per year.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarData {
	pub categories: Vec<&'static str>,
	/// Year label plus one 0..100 value per category.
	pub series: Vec<(u16, Vec<f64>)>,
}

/// Point on axis `index` of `count` at `value` percent of `radius`.
fn axis_point(cx: f64, cy: f64, radius: f64, index: usize, count: usize, value: f64) -> (f64, f64) {
	let angle = index as f64 * TAU / count.max(1) as f64 - FRAC_PI_2;
	let r = radius * (value / 100.0);
	(cx + angle.cos() * r, cy + angle.sin() * r)
}

#[component]
pub fn ResearchRadar(data: RadarData) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let frame_loop: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));

	let loop_init = frame_loop.clone();
	Effect::new(move |_| {
		if loop_init.borrow().is_some() {
			return;
		}
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = canvas
			.parent_element()
			.map(|parent| (parent.client_width() as f64, parent.client_height() as f64))
			.unwrap_or((0.0, 0.0));
		canvas.set_width((w * SCALE) as u32);
		canvas.set_height((h * SCALE) as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("2d context unavailable, radar stays blank");
			return;
		};
		let _ = ctx.scale(SCALE, SCALE);

		let data = data.clone();
		let reveal_cap = data.series.len() as f64 * REVEAL_TICKS + 10.0;
		let mut time = 0.0f64;
		*loop_init.borrow_mut() = FrameLoop::start(move || {
			time = (time + 0.2).min(reveal_cap);
			draw(&ctx, w, h, &data, time);
		});
	});

	let loop_cleanup = frame_loop;
	on_cleanup(move || {
		if let Some(frame_loop) = loop_cleanup.borrow_mut().take() {
			frame_loop.cancel();
		}
	});

	view! {
		<div class="radar-frame">
			<canvas node_ref=canvas_ref class="radar-canvas" />
		</div>
	}
}

fn draw(ctx: &CanvasRenderingContext2d, w: f64, h: f64, data: &RadarData, time: f64) {
	ctx.clear_rect(0.0, 0.0, w, h);
	let count = data.categories.len();
	if count == 0 {
		return;
	}
	let (cx, cy) = (w / 2.0, h / 2.0);
	let radius = w.min(h) * 0.4;

	draw_rings(ctx, cx, cy, radius);
	draw_axes(ctx, cx, cy, radius, &data.categories);

	for (index, (year, values)) in data.series.iter().enumerate() {
		let progress = (time / REVEAL_TICKS - index as f64).clamp(0.0, 1.0);
		if progress <= 0.0 {
			continue;
		}
		let hue = (BASE_HUE + index as f64 * 15.0) % 360.0;

		ctx.begin_path();
		for (axis, value) in values.iter().enumerate() {
			let (x, y) = axis_point(cx, cy, radius, axis, count, value * progress);
			if axis == 0 {
				ctx.move_to(x, y);
			} else {
				ctx.line_to(x, y);
			}
		}
		ctx.close_path();

		if let Ok(gradient) = ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, radius) {
			let inner = gradient.add_color_stop(0.0, &hsla(hue, 0.1));
			let outer = gradient.add_color_stop(1.0, &hsla(hue, 0.5));
			if inner.is_ok() && outer.is_ok() {
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
				ctx.fill();
			}
		}
		ctx.set_stroke_style_str(&hsla(hue, 0.8));
		ctx.set_line_width(2.0);
		ctx.stroke();

		draw_vertices(ctx, cx, cy, radius, values, progress, count, hue, time);

		ctx.set_fill_style_str(&hsla(hue, 0.9));
		ctx.set_font("bold 12px sans-serif");
		ctx.set_text_align("center");
		let _ = ctx.fill_text(
			&year.to_string(),
			cx,
			cy - radius - 30.0 + index as f64 * 15.0,
		);
	}
}

fn draw_rings(ctx: &CanvasRenderingContext2d, cx: f64, cy: f64, radius: f64) {
	ctx.set_stroke_style_str("rgba(255, 255, 255, 0.1)");
	ctx.set_line_width(1.0);
	for ring in 1..=RING_COUNT {
		let r = radius * ring as f64 / RING_COUNT as f64;
		ctx.begin_path();
		let _ = ctx.arc(cx, cy, r, 0.0, TAU);
		ctx.stroke();

		ctx.set_fill_style_str("rgba(255, 255, 255, 0.5)");
		ctx.set_font("10px sans-serif");
		ctx.set_text_align("right");
		let _ = ctx.fill_text(&format!("{}", ring * 20), cx - r - 5.0, cy);
	}
}

fn draw_axes(
	ctx: &CanvasRenderingContext2d,
	cx: f64,
	cy: f64,
	radius: f64,
	categories: &[&'static str],
) {
	let count = categories.len();
	for (index, category) in categories.iter().enumerate() {
		let (x, y) = axis_point(cx, cy, radius, index, count, 100.0);
		ctx.set_stroke_style_str("rgba(255, 255, 255, 0.2)");
		ctx.begin_path();
		ctx.move_to(cx, cy);
		ctx.line_to(x, y);
		ctx.stroke();

		let (lx, ly) = axis_point(cx, cy, radius + 20.0, index, count, 100.0);
		ctx.set_fill_style_str("rgba(255, 255, 255, 0.7)");
		ctx.set_font("12px sans-serif");
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(category, lx, ly);
	}
}

#[allow(clippy::too_many_arguments)]
fn draw_vertices(
	ctx: &CanvasRenderingContext2d,
	cx: f64,
	cy: f64,
	radius: f64,
	values: &[f64],
	progress: f64,
	count: usize,
	hue: f64,
	time: f64,
) {
	for (axis, value) in values.iter().enumerate() {
		let (x, y) = axis_point(cx, cy, radius, axis, count, value * progress);

		if let Ok(glow) = ctx.create_radial_gradient(x, y, 0.0, x, y, 10.0) {
			let inner = glow.add_color_stop(0.0, &hsla(hue, 0.8));
			let outer = glow.add_color_stop(1.0, &hsla(hue, 0.0));
			if inner.is_ok() && outer.is_ok() {
				ctx.begin_path();
				let wobble = 5.0 + (time * 0.1 + axis as f64).sin() * 2.0;
				let _ = ctx.arc(x, y, wobble, 0.0, TAU);
				#[allow(deprecated)]
				ctx.set_fill_style(&glow);
				ctx.fill();
			}
		}

		ctx.begin_path();
		let _ = ctx.arc(x, y, 3.0, 0.0, TAU);
		ctx.set_fill_style_str(&format!("hsla({hue}, 70%, 90%, 0.9)"));
		ctx.fill();
	}
}

fn hsla(hue: f64, alpha: f64) -> String {
	format!("hsla({hue}, 70%, 60%, {alpha})")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_axis_points_straight_up() {
		let (x, y) = axis_point(50.0, 50.0, 40.0, 0, 6, 100.0);
		assert!((x - 50.0).abs() < 1e-9);
		assert!((y - 10.0).abs() < 1e-9);
	}

	#[test]
	fn zero_value_collapses_to_the_center() {
		let (x, y) = axis_point(50.0, 50.0, 40.0, 3, 6, 0.0);
		assert!((x - 50.0).abs() < 1e-9);
		assert!((y - 50.0).abs() < 1e-9);
	}

	#[test]
	fn axis_count_of_zero_does_not_divide_by_zero() {
		let (x, y) = axis_point(50.0, 50.0, 40.0, 0, 0, 100.0);
		assert!(x.is_finite());
		assert!(y.is_finite());
	}
}
