use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::config::{Color, LinkStyle, MeshRules, PointerRules, SceneConfig, Shape};

/// Pointer position in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

/// Remaining/maximum ticks for expiring entities.
#[derive(Clone, Copy, Debug)]
pub struct Lifespan {
	pub remaining: u32,
	pub max: u32,
}

impl Lifespan {
	/// Share of life left in 0..1, used to fade entities out.
	pub fn ratio(&self) -> f64 {
		if self.max == 0 {
			0.0
		} else {
			self.remaining as f64 / self.max as f64
		}
	}
}

/// One animated point in a scene.
#[derive(Clone, Debug)]
pub struct Entity {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub color: Color,
	pub opacity: f64,
	pub shape: Shape,
	pub rotation: f64,
	pub spin: f64,
	pub life: Option<Lifespan>,
}

/// Traveling highlight along a connection.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pulse {
	pub progress: f64,
	pub speed: f64,
	pub active: bool,
}

/// Edge between two entities, fixed at generation; only the pulse mutates.
#[derive(Clone, Debug)]
pub struct Connection {
	pub from: usize,
	pub to: usize,
	pub color: Color,
	pub pulse: Pulse,
}

/// Full animation state owned by one driver instance.
pub struct Scene {
	pub entities: Vec<Entity>,
	pub connections: Vec<Connection>,
	pub width: f64,
	pub height: f64,
	config: SceneConfig,
	rng: SmallRng,
}

impl Scene {
	/// Build a scene for the given surface. A zero-area surface yields an
	/// empty scene. Identical config, dimensions and seed produce identical
	/// scenes.
	pub fn generate(config: &SceneConfig, width: f64, height: f64, seed: u64) -> Self {
		let mut rng = SmallRng::seed_from_u64(seed);
		let count = if width > 0.0 && height > 0.0 {
			config.entity_count
		} else {
			0
		};

		let mut entities = Vec::with_capacity(count);
		for _ in 0..count {
			entities.push(spawn(config, width, height, &mut rng));
		}

		let connections = match config.links {
			LinkStyle::Mesh(rules) => mesh_connections(&entities, width, &rules, config, &mut rng),
			_ => Vec::new(),
		};

		Self {
			entities,
			connections,
			width,
			height,
			config: config.clone(),
			rng,
		}
	}

	pub fn config(&self) -> &SceneConfig {
		&self.config
	}

	/// Advance one tick: pulse activation, motion with boundary reflection,
	/// pulse travel, lifecycle expiry, pointer repulsion.
	pub fn tick(&mut self, pointer: Option<Point>) {
		self.activate_pulse();
		self.integrate();
		self.advance_pulses();
		self.expire();
		if let (Some(rules), Some(pointer)) = (self.config.pointer, pointer) {
			self.repel(pointer, rules);
		}
	}

	/// With a small per-tick chance, pick one random entity and one of its
	/// outgoing connections and start its pulse if idle.
	fn activate_pulse(&mut self) {
		let LinkStyle::Mesh(rules) = self.config.links else {
			return;
		};
		if self.entities.is_empty() || self.connections.is_empty() {
			return;
		}
		if !self.rng.gen_bool(rules.activation_chance) {
			return;
		}

		let from = self.rng.gen_range(0..self.entities.len());
		let outgoing: Vec<usize> = self
			.connections
			.iter()
			.enumerate()
			.filter(|(_, connection)| connection.from == from)
			.map(|(index, _)| index)
			.collect();
		let Some(&pick) = outgoing.get(self.rng.gen_range(0..outgoing.len().max(1))) else {
			return;
		};

		let pulse = &mut self.connections[pick].pulse;
		if !pulse.active {
			pulse.active = true;
			pulse.progress = 0.0;
		}
	}

	fn integrate(&mut self) {
		let (width, height) = (self.width, self.height);
		if width <= 0.0 || height <= 0.0 {
			return;
		}
		for entity in &mut self.entities {
			entity.x += entity.vx;
			entity.y += entity.vy;
			entity.rotation += entity.spin;

			if entity.x < 0.0 {
				entity.x = -entity.x;
				entity.vx = -entity.vx;
			} else if entity.x > width {
				entity.x = 2.0 * width - entity.x;
				entity.vx = -entity.vx;
			}
			if entity.y < 0.0 {
				entity.y = -entity.y;
				entity.vy = -entity.vy;
			} else if entity.y > height {
				entity.y = 2.0 * height - entity.y;
				entity.vy = -entity.vy;
			}

			// Reflection can overshoot when a step exceeds the surface.
			entity.x = entity.x.clamp(0.0, width);
			entity.y = entity.y.clamp(0.0, height);
		}
	}

	fn advance_pulses(&mut self) {
		for connection in &mut self.connections {
			let pulse = &mut connection.pulse;
			if !pulse.active {
				continue;
			}
			pulse.progress += pulse.speed;
			if pulse.progress >= 1.0 {
				pulse.active = false;
				pulse.progress = 0.0;
			}
		}
	}

	fn expire(&mut self) {
		let Some(rules) = self.config.lifespan else {
			return;
		};
		let mut index = 0;
		let mut expired = 0;
		while index < self.entities.len() {
			let Some(life) = &mut self.entities[index].life else {
				index += 1;
				continue;
			};
			life.remaining = life.remaining.saturating_sub(1);
			if life.remaining > 0 {
				index += 1;
				continue;
			}
			self.entities.swap_remove(index);
			expired += 1;
		}
		// Replacements spawn after the scan so they age from the next tick.
		if rules.respawn && self.width > 0.0 && self.height > 0.0 {
			for _ in 0..expired {
				let replacement = spawn(&self.config, self.width, self.height, &mut self.rng);
				self.entities.push(replacement);
			}
		}
	}

	/// Push entities within reach away from the pointer, impulse growing as
	/// the distance shrinks, then clamp speed so the scene stays calm.
	fn repel(&mut self, pointer: Point, rules: PointerRules) {
		for entity in &mut self.entities {
			let (dx, dy) = (pointer.x - entity.x, pointer.y - entity.y);
			let distance = (dx * dx + dy * dy).sqrt();
			if distance >= rules.reach || distance <= f64::EPSILON {
				continue;
			}
			let force = (rules.reach - distance) / rules.strength;
			entity.vx -= dx / distance * force;
			entity.vy -= dy / distance * force;

			let speed = (entity.vx * entity.vx + entity.vy * entity.vy).sqrt();
			if speed > rules.max_speed {
				entity.vx = entity.vx / speed * rules.max_speed;
				entity.vy = entity.vy / speed * rules.max_speed;
			}
		}
	}
}

fn spawn(config: &SceneConfig, width: f64, height: f64, rng: &mut SmallRng) -> Entity {
	let drift = config.drift;
	let shape = if config.shapes.is_empty() {
		Shape::Circle
	} else {
		config.shapes[rng.gen_range(0..config.shapes.len())]
	};
	Entity {
		x: rng.gen_range(0.0..width),
		y: rng.gen_range(0.0..height),
		vx: if drift > 0.0 { rng.gen_range(-drift..drift) } else { 0.0 },
		vy: if drift > 0.0 { rng.gen_range(-drift..drift) } else { 0.0 },
		radius: config.radius.sample(rng),
		color: config.palette.sample(rng),
		opacity: config.opacity.sample(rng),
		shape,
		rotation: rng.gen_range(0.0..TAU),
		spin: config.spin.sample(rng),
		life: config.lifespan.map(|rules| {
			let max = (rules.ticks.sample(rng).round() as u32).max(1);
			Lifespan { remaining: max, max }
		}),
	}
}

/// Connect each entity to its nearest 2..=4 neighbors inside the reach
/// threshold, sorted ascending by distance.
fn mesh_connections(
	entities: &[Entity],
	width: f64,
	rules: &MeshRules,
	config: &SceneConfig,
	rng: &mut SmallRng,
) -> Vec<Connection> {
	let reach = width * rules.reach_fraction;
	let mut connections = Vec::new();

	for (i, entity) in entities.iter().enumerate() {
		let mut candidates: Vec<(usize, f64)> = entities
			.iter()
			.enumerate()
			.filter(|&(j, _)| j != i)
			.filter_map(|(j, other)| {
				let (dx, dy) = (entity.x - other.x, entity.y - other.y);
				let distance = (dx * dx + dy * dy).sqrt();
				(distance < reach).then_some((j, distance))
			})
			.collect();
		candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

		let link_count = (2 + rng.gen_range(0..3)).min(candidates.len());
		for &(j, _) in candidates.iter().take(link_count) {
			connections.push(Connection {
				from: i,
				to: j,
				color: config.palette.sample(rng),
				pulse: Pulse {
					progress: 0.0,
					speed: rules.pulse_speed.sample(rng),
					active: false,
				},
			});
		}
	}
	connections
}

#[cfg(test)]
mod tests {
	use super::*;

	fn mesh_config() -> SceneConfig {
		let mut config = SceneConfig::circuit();
		config.entity_count = 10;
		if let LinkStyle::Mesh(ref mut rules) = config.links {
			// every node is a candidate for every other
			rules.reach_fraction = 4.0;
		}
		config
	}

	#[test]
	fn mesh_links_are_distinct_and_in_range() {
		let scene = Scene::generate(&mesh_config(), 100.0, 100.0, 7);
		assert!(!scene.connections.is_empty());
		for connection in &scene.connections {
			assert_ne!(connection.from, connection.to);
			assert!(connection.from < scene.entities.len());
			assert!(connection.to < scene.entities.len());
			assert!(!connection.pulse.active);
		}
		for i in 0..scene.entities.len() {
			let outgoing = scene.connections.iter().filter(|c| c.from == i).count();
			assert!((2..=4).contains(&outgoing), "entity {i} has {outgoing} links");
		}
	}

	#[test]
	fn generation_is_deterministic_for_a_seed() {
		let a = Scene::generate(&mesh_config(), 320.0, 200.0, 99);
		let b = Scene::generate(&mesh_config(), 320.0, 200.0, 99);
		assert_eq!(a.entities.len(), b.entities.len());
		for (left, right) in a.entities.iter().zip(&b.entities) {
			assert_eq!(left.x, right.x);
			assert_eq!(left.y, right.y);
			assert_eq!(left.vx, right.vx);
			assert_eq!(left.vy, right.vy);
		}
		assert_eq!(a.connections.len(), b.connections.len());
	}

	#[test]
	fn entities_stay_in_bounds_without_connections() {
		let mut config = SceneConfig::digital_drift();
		config.drift = 3.0;
		let mut scene = Scene::generate(&config, 120.0, 90.0, 3);
		assert!(scene.connections.is_empty());
		for _ in 0..1000 {
			scene.tick(None);
			for entity in &scene.entities {
				assert!((0.0..=scene.width).contains(&entity.x));
				assert!((0.0..=scene.height).contains(&entity.y));
			}
		}
	}

	#[test]
	fn reflection_keeps_momentum() {
		let mut scene = Scene::generate(&SceneConfig::quantum_field(), 100.0, 100.0, 1);
		scene.entities[0].x = 1.0;
		scene.entities[0].y = 50.0;
		scene.entities[0].vx = -2.0;
		scene.entities[0].vy = 0.0;
		scene.tick(None);
		let entity = &scene.entities[0];
		assert_eq!(entity.x, 1.0);
		assert_eq!(entity.vx, 2.0);
	}

	#[test]
	fn active_pulse_completes_and_resets() {
		let mut scene = Scene::generate(&mesh_config(), 100.0, 100.0, 5);
		scene.connections[0].pulse.active = true;
		scene.connections[0].pulse.progress = 0.0;
		let mut deactivated = false;
		for _ in 0..2000 {
			scene.tick(None);
			let pulse = scene.connections[0].pulse;
			assert!(pulse.progress <= 1.0);
			if !pulse.active {
				deactivated = true;
				break;
			}
		}
		assert!(deactivated);
		assert_eq!(scene.connections[0].pulse.progress, 0.0);
	}

	#[test]
	fn pulses_stay_bounded_under_forced_activation() {
		let mut config = mesh_config();
		if let LinkStyle::Mesh(ref mut rules) = config.links {
			rules.activation_chance = 1.0;
		}
		let mut scene = Scene::generate(&config, 100.0, 100.0, 11);
		let mut saw_active = false;
		for _ in 0..5000 {
			scene.tick(None);
			for connection in &scene.connections {
				assert!((0.0..=1.0).contains(&connection.pulse.progress));
				saw_active |= connection.pulse.active;
			}
		}
		assert!(saw_active);
	}

	#[test]
	fn pointer_pushes_entities_away() {
		let mut config = SceneConfig::particle_web(4);
		config.drift = 0.0;
		let mut scene = Scene::generate(&config, 200.0, 200.0, 2);
		scene.entities[0].x = 100.0;
		scene.entities[0].y = 100.0;
		scene.entities[0].vx = 0.0;
		scene.entities[0].vy = 0.0;

		let pointer = Point { x: 90.0, y: 100.0 };
		scene.tick(Some(pointer));

		let entity = &scene.entities[0];
		let away = (entity.x - pointer.x) * entity.vx + (entity.y - pointer.y) * entity.vy;
		assert!(away > 0.0, "velocity should point away from the pointer");
	}

	#[test]
	fn repulsion_respects_the_speed_clamp() {
		let mut config = SceneConfig::particle_web(4);
		config.drift = 0.0;
		let max_speed = config.pointer.unwrap().max_speed;
		let mut scene = Scene::generate(&config, 200.0, 200.0, 2);
		scene.entities[0].x = 100.0;
		scene.entities[0].y = 100.0;
		scene.entities[0].vx = max_speed;
		scene.entities[0].vy = 0.0;

		scene.tick(Some(Point { x: 99.0, y: 100.0 }));

		let entity = &scene.entities[0];
		let speed = (entity.vx * entity.vx + entity.vy * entity.vy).sqrt();
		assert!(speed <= max_speed + 1e-9);
	}

	#[test]
	fn expired_entities_are_removed() {
		let mut config = SceneConfig::quantum_dust();
		config.entity_count = 6;
		config.pointer = None;
		if let Some(ref mut rules) = config.lifespan {
			rules.respawn = false;
		}
		let mut scene = Scene::generate(&config, 100.0, 100.0, 4);
		let before = scene.entities.len();
		for entity in &mut scene.entities {
			entity.life = Some(Lifespan { remaining: 1000, max: 1000 });
		}
		scene.entities[0].life = Some(Lifespan { remaining: 1, max: 300 });

		scene.tick(None);
		assert_eq!(scene.entities.len(), before - 1);
	}

	#[test]
	fn respawn_holds_population_steady() {
		let mut config = SceneConfig::quantum_dust();
		config.entity_count = 6;
		config.pointer = None;
		let mut scene = Scene::generate(&config, 100.0, 100.0, 4);
		let before = scene.entities.len();
		for entity in &mut scene.entities {
			entity.life = Some(Lifespan { remaining: 1000, max: 1000 });
		}
		scene.entities[0].life = Some(Lifespan { remaining: 1, max: 300 });

		scene.tick(None);
		assert_eq!(scene.entities.len(), before);
	}

	#[test]
	fn zero_area_surface_yields_an_empty_scene() {
		let mut scene = Scene::generate(&SceneConfig::circuit(), 0.0, 0.0, 1);
		assert!(scene.entities.is_empty());
		assert!(scene.connections.is_empty());
		for _ in 0..10 {
			scene.tick(Some(Point { x: 1.0, y: 1.0 }));
		}
	}
}
