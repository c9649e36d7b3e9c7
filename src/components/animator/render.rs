use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::config::{Backdrop, Color, LinkStyle, MeshRules, ProximityRules, Shape};
use super::scene::{Entity, Scene};

/// Paint one frame. Draw order is fixed (backdrop, links, pulses, entities)
/// so pulses always sit under entity glows. Pure read of the scene.
pub fn render(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, scene.width, scene.height);
	draw_backdrop(scene, ctx);
	match scene.config().links {
		LinkStyle::None => {}
		LinkStyle::Mesh(rules) => {
			draw_mesh(scene, ctx, &rules);
			draw_pulses(scene, ctx, &rules);
		}
		LinkStyle::Proximity(rules) => draw_proximity(scene, ctx, &rules),
	}
	draw_entities(scene, ctx);
}

fn draw_backdrop(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	let Backdrop::DotGrid { spacing, dot_radius, color, alpha } = scene.config().backdrop else {
		return;
	};
	if spacing <= 0.0 {
		return;
	}
	ctx.set_fill_style_str(&color.css(alpha));
	let mut x = 0.0;
	while x < scene.width {
		let mut y = 0.0;
		while y < scene.height {
			ctx.begin_path();
			let _ = ctx.arc(x, y, dot_radius, 0.0, 2.0 * PI);
			ctx.fill();
			y += spacing;
		}
		x += spacing;
	}
}

fn draw_mesh(scene: &Scene, ctx: &CanvasRenderingContext2d, rules: &MeshRules) {
	ctx.set_line_width(1.0);
	for connection in &scene.connections {
		let (a, b) = (
			&scene.entities[connection.from],
			&scene.entities[connection.to],
		);
		ctx.set_stroke_style_str(&connection.color.css(rules.line_alpha));
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
}

fn draw_pulses(scene: &Scene, ctx: &CanvasRenderingContext2d, rules: &MeshRules) {
	for connection in &scene.connections {
		let pulse = connection.pulse;
		if !pulse.active {
			continue;
		}
		let (a, b) = (
			&scene.entities[connection.from],
			&scene.entities[connection.to],
		);
		let x = a.x + (b.x - a.x) * pulse.progress;
		let y = a.y + (b.y - a.y) * pulse.progress;

		ctx.begin_path();
		let _ = ctx.arc(x, y, rules.pulse_radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&connection.color.css(0.8));
		ctx.fill();

		glow(ctx, x, y, rules.pulse_radius * 2.0, &connection.color, 0.6);
	}
}

fn draw_proximity(scene: &Scene, ctx: &CanvasRenderingContext2d, rules: &ProximityRules) {
	if rules.reach <= 0.0 {
		return;
	}
	ctx.set_line_width(rules.line_width);
	let entities = &scene.entities;
	for i in 0..entities.len() {
		for j in (i + 1)..entities.len() {
			let (dx, dy) = (entities[i].x - entities[j].x, entities[i].y - entities[j].y);
			let distance = (dx * dx + dy * dy).sqrt();
			if distance >= rules.reach {
				continue;
			}
			let alpha = rules.line_alpha * (1.0 - distance / rules.reach);
			ctx.set_stroke_style_str(&entities[i].color.css(alpha));
			ctx.begin_path();
			ctx.move_to(entities[i].x, entities[i].y);
			ctx.line_to(entities[j].x, entities[j].y);
			ctx.stroke();
		}
	}
}

fn draw_entities(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	let glow_factor = scene.config().glow;
	for entity in &scene.entities {
		let alpha = entity.opacity * entity.life.map_or(1.0, |life| life.ratio());
		if glow_factor > 0.0 {
			glow(
				ctx,
				entity.x,
				entity.y,
				entity.radius * glow_factor,
				&entity.color,
				alpha * 0.35,
			);
		}
		draw_shape(ctx, entity, alpha);
	}
}

fn draw_shape(ctx: &CanvasRenderingContext2d, entity: &Entity, alpha: f64) {
	ctx.set_fill_style_str(&entity.color.css(alpha));
	ctx.save();
	let _ = ctx.translate(entity.x, entity.y);
	let _ = ctx.rotate(entity.rotation);
	let r = entity.radius;
	match entity.shape {
		Shape::Circle => {
			ctx.begin_path();
			let _ = ctx.arc(0.0, 0.0, r, 0.0, 2.0 * PI);
			ctx.fill();
		}
		Shape::Square => {
			ctx.fill_rect(-r, -r, r * 2.0, r * 2.0);
		}
		Shape::Triangle => {
			ctx.begin_path();
			ctx.move_to(0.0, -r);
			ctx.line_to(r, r);
			ctx.line_to(-r, r);
			ctx.close_path();
			ctx.fill();
		}
		Shape::Diamond => {
			ctx.begin_path();
			ctx.move_to(0.0, -r);
			ctx.line_to(r, 0.0);
			ctx.line_to(0.0, r);
			ctx.line_to(-r, 0.0);
			ctx.close_path();
			ctx.fill();
		}
	}
	ctx.restore();
}

/// Radial falloff from `alpha` at the center to transparent at `radius`.
fn glow(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64, color: &Color, alpha: f64) {
	let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, radius) else {
		return;
	};
	if gradient.add_color_stop(0.0, &color.css(alpha)).is_err() {
		return;
	}
	if gradient.add_color_stop(1.0, &color.css(0.0)).is_err() {
		return;
	}
	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
}
