use rand::Rng;
use rand::rngs::SmallRng;

/// Inclusive numeric range sampled uniformly per entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
	pub min: f64,
	pub max: f64,
}

impl Span {
	pub const fn of(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	pub const fn fixed(value: f64) -> Self {
		Self { min: value, max: value }
	}

	pub fn sample(&self, rng: &mut SmallRng) -> f64 {
		if self.max > self.min {
			rng.gen_range(self.min..self.max)
		} else {
			self.min
		}
	}
}

/// Solid paint in either of the color spaces the themes use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
	Rgb(u8, u8, u8),
	Hsl(u16, u8, u8),
}

impl Color {
	/// CSS color string at the given alpha.
	pub fn css(&self, alpha: f64) -> String {
		match *self {
			Color::Rgb(r, g, b) => format!("rgba({}, {}, {}, {})", r, g, b, alpha),
			Color::Hsl(h, s, l) => format!("hsla({}, {}%, {}%, {})", h, s, l, alpha),
		}
	}
}

/// How a theme picks entity and connection colors.
#[derive(Clone, Copy, Debug)]
pub enum Palette {
	/// Sample from a fixed list.
	Fixed(&'static [Color]),
	/// Sample a hue from a band at fixed saturation/lightness.
	HueBand { hue: Span, saturation: u8, lightness: u8 },
}

impl Palette {
	pub fn sample(&self, rng: &mut SmallRng) -> Color {
		match *self {
			Palette::Fixed(colors) => {
				if colors.is_empty() {
					Color::Rgb(255, 255, 255)
				} else {
					colors[rng.gen_range(0..colors.len())]
				}
			}
			Palette::HueBand { hue, saturation, lightness } => {
				Color::Hsl(hue.sample(rng) as u16, saturation, lightness)
			}
		}
	}
}

/// Shape tag for entity rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
	Circle,
	Square,
	Triangle,
	Diamond,
}

pub const ALL_SHAPES: &[Shape] = &[Shape::Circle, Shape::Square, Shape::Triangle, Shape::Diamond];

/// Fixed nearest-neighbor topology with traveling pulses.
#[derive(Clone, Copy, Debug)]
pub struct MeshRules {
	/// Neighbor candidates must be closer than this fraction of surface width.
	pub reach_fraction: f64,
	pub line_alpha: f64,
	pub pulse_speed: Span,
	pub pulse_radius: f64,
	/// Per-tick chance of activating one pulse somewhere in the scene.
	pub activation_chance: f64,
}

/// Render-time links between entity pairs under a distance threshold.
#[derive(Clone, Copy, Debug)]
pub struct ProximityRules {
	pub reach: f64,
	/// Alpha at distance zero; fades linearly to nothing at `reach`.
	pub line_alpha: f64,
	pub line_width: f64,
}

#[derive(Clone, Copy, Debug, Default)]
pub enum LinkStyle {
	#[default]
	None,
	Mesh(MeshRules),
	Proximity(ProximityRules),
}

/// Pointer repulsion for cursor-reactive themes.
#[derive(Clone, Copy, Debug)]
pub struct PointerRules {
	pub reach: f64,
	/// Impulse divisor; larger is gentler.
	pub strength: f64,
	pub max_speed: f64,
}

/// Entities expire after a sampled number of ticks.
///
/// Lifecycle themes must not use [`LinkStyle::Mesh`]: removal invalidates
/// the stored connection indices.
#[derive(Clone, Copy, Debug)]
pub struct LifeRules {
	pub ticks: Span,
	/// Spawn a replacement when an entity expires, holding population steady.
	pub respawn: bool,
}

/// Static layer painted before links and entities.
#[derive(Clone, Copy, Debug, Default)]
pub enum Backdrop {
	#[default]
	None,
	/// Evenly spaced dot lattice.
	DotGrid { spacing: f64, dot_radius: f64, color: Color, alpha: f64 },
}

/// Everything one animator instance needs to build and run a scene.
#[derive(Clone, Debug)]
pub struct SceneConfig {
	pub entity_count: usize,
	pub palette: Palette,
	pub radius: Span,
	/// Maximum initial velocity per axis; zero keeps entities in place.
	pub drift: f64,
	pub opacity: Span,
	pub shapes: &'static [Shape],
	pub spin: Span,
	/// Glow radius as a multiple of the entity radius; zero disables glows.
	pub glow: f64,
	pub links: LinkStyle,
	pub lifespan: Option<LifeRules>,
	pub pointer: Option<PointerRules>,
	pub backdrop: Backdrop,
}

impl SceneConfig {
	/// Teal circuit mesh with traveling pulses; nodes do not drift.
	pub fn circuit() -> Self {
		Self {
			entity_count: 50,
			palette: Palette::Fixed(&[Color::Rgb(20, 184, 166)]),
			radius: Span::fixed(2.0),
			drift: 0.0,
			opacity: Span::fixed(0.8),
			shapes: &[Shape::Circle],
			spin: Span::fixed(0.0),
			glow: 3.0,
			links: LinkStyle::Mesh(MeshRules {
				reach_fraction: 0.25,
				line_alpha: 0.15,
				pulse_speed: Span::of(0.002, 0.005),
				pulse_radius: 2.0,
				activation_chance: 0.05,
			}),
			lifespan: None,
			pointer: None,
			backdrop: Backdrop::None,
		}
	}

	/// Multicolor variant of [`circuit`](Self::circuit); the site-wide layer.
	pub fn pulse_network() -> Self {
		Self {
			entity_count: 40,
			palette: Palette::Fixed(&[
				Color::Rgb(16, 185, 129),
				Color::Rgb(245, 158, 11),
				Color::Rgb(236, 72, 153),
				Color::Rgb(59, 130, 246),
			]),
			radius: Span::fixed(2.0),
			drift: 0.0,
			opacity: Span::fixed(0.8),
			shapes: &[Shape::Circle],
			spin: Span::fixed(0.0),
			glow: 3.0,
			links: LinkStyle::Mesh(MeshRules {
				reach_fraction: 0.25,
				line_alpha: 0.15,
				pulse_speed: Span::of(0.002, 0.005),
				pulse_radius: 3.0,
				activation_chance: 0.05,
			}),
			lifespan: None,
			pointer: None,
			backdrop: Backdrop::None,
		}
	}

	/// Slow drifting glow dots joined by faint proximity lines.
	pub fn quantum_field() -> Self {
		Self {
			entity_count: 50,
			palette: Palette::Fixed(&[
				Color::Rgb(59, 130, 246),
				Color::Rgb(234, 179, 8),
				Color::Rgb(244, 114, 182),
			]),
			radius: Span::of(1.0, 3.0),
			drift: 0.15,
			opacity: Span::fixed(0.6),
			shapes: &[Shape::Circle],
			spin: Span::fixed(0.0),
			glow: 4.0,
			links: LinkStyle::Proximity(ProximityRules {
				reach: 150.0,
				line_alpha: 0.1,
				line_width: 0.5,
			}),
			lifespan: None,
			pointer: None,
			backdrop: Backdrop::None,
		}
	}

	/// Pointer-reactive purple web. The count belongs to the caller so it
	/// can scale with viewport width.
	pub fn particle_web(entity_count: usize) -> Self {
		Self {
			entity_count,
			palette: Palette::Fixed(&[
				Color::Rgb(138, 43, 226),
				Color::Rgb(75, 0, 130),
				Color::Rgb(147, 112, 219),
				Color::Rgb(186, 85, 211),
				Color::Rgb(218, 112, 214),
			]),
			radius: Span::of(0.5, 2.5),
			drift: 0.25,
			opacity: Span::of(0.1, 0.6),
			shapes: &[Shape::Circle],
			spin: Span::fixed(0.0),
			glow: 0.0,
			links: LinkStyle::Proximity(ProximityRules {
				reach: 150.0,
				line_alpha: 0.1,
				line_width: 0.5,
			}),
			lifespan: None,
			pointer: Some(PointerRules {
				reach: 150.0,
				strength: 1500.0,
				max_speed: 1.0,
			}),
			backdrop: Backdrop::None,
		}
	}

	/// Short-lived violet dust with respawn and pointer repulsion.
	pub fn quantum_dust() -> Self {
		Self {
			entity_count: 50,
			palette: Palette::HueBand {
				hue: Span::of(240.0, 300.0),
				saturation: 80,
				lightness: 60,
			},
			radius: Span::of(0.5, 2.5),
			drift: 0.25,
			opacity: Span::of(0.1, 0.6),
			shapes: &[Shape::Circle],
			spin: Span::fixed(0.0),
			glow: 0.0,
			links: LinkStyle::Proximity(ProximityRules {
				reach: 150.0,
				line_alpha: 0.15,
				line_width: 0.5,
			}),
			lifespan: Some(LifeRules {
				ticks: Span::of(200.0, 300.0),
				respawn: true,
			}),
			pointer: Some(PointerRules {
				reach: 150.0,
				strength: 1500.0,
				max_speed: 2.0,
			}),
			backdrop: Backdrop::None,
		}
	}

	/// Slowly tumbling geometric shapes in the teal band; no links.
	pub fn digital_drift() -> Self {
		Self {
			entity_count: 80,
			palette: Palette::HueBand {
				hue: Span::of(170.0, 200.0),
				saturation: 85,
				lightness: 60,
			},
			radius: Span::of(1.0, 4.0),
			drift: 0.25,
			opacity: Span::fixed(0.7),
			shapes: ALL_SHAPES,
			spin: Span::of(-0.01, 0.01),
			glow: 0.0,
			links: LinkStyle::None,
			lifespan: None,
			pointer: None,
			backdrop: Backdrop::None,
		}
	}

	/// Static dot lattice; no entities at all.
	pub fn dot_grid() -> Self {
		Self {
			entity_count: 0,
			palette: Palette::Fixed(&[Color::Rgb(59, 130, 246)]),
			radius: Span::fixed(1.0),
			drift: 0.0,
			opacity: Span::fixed(1.0),
			shapes: &[Shape::Circle],
			spin: Span::fixed(0.0),
			glow: 0.0,
			links: LinkStyle::None,
			lifespan: None,
			pointer: None,
			backdrop: Backdrop::DotGrid {
				spacing: 40.0,
				dot_radius: 1.0,
				color: Color::Rgb(59, 130, 246),
				alpha: 0.15,
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	#[test]
	fn fixed_span_always_returns_its_value() {
		let mut rng = SmallRng::seed_from_u64(1);
		let span = Span::fixed(2.5);
		for _ in 0..20 {
			assert_eq!(span.sample(&mut rng), 2.5);
		}
	}

	#[test]
	fn span_samples_stay_inside_the_range() {
		let mut rng = SmallRng::seed_from_u64(2);
		let span = Span::of(-0.5, 0.5);
		for _ in 0..100 {
			let value = span.sample(&mut rng);
			assert!((-0.5..0.5).contains(&value));
		}
	}

	#[test]
	fn hue_band_samples_stay_inside_the_band() {
		let mut rng = SmallRng::seed_from_u64(3);
		let palette = Palette::HueBand {
			hue: Span::of(170.0, 200.0),
			saturation: 85,
			lightness: 60,
		};
		for _ in 0..100 {
			match palette.sample(&mut rng) {
				Color::Hsl(h, s, l) => {
					assert!((170..200).contains(&h));
					assert_eq!(s, 85);
					assert_eq!(l, 60);
				}
				other => panic!("expected an hsl color, got {other:?}"),
			}
		}
	}

	#[test]
	fn css_strings_carry_the_alpha() {
		assert_eq!(Color::Rgb(20, 184, 166).css(0.15), "rgba(20, 184, 166, 0.15)");
		assert_eq!(Color::Hsl(180, 85, 60).css(1.0), "hsla(180, 85%, 60%, 1)");
	}
}
