//! Themed wrappers around [`SceneCanvas`]. Each is a preset of the same
//! engine; several are palette-only variants of one another and exist so the
//! page can swap looks without touching any animation code.

use leptos::prelude::*;

use super::animator::{SceneCanvas, SceneConfig};

/// Teal circuit mesh with traveling pulses.
#[component]
pub fn CircuitBackground() -> impl IntoView {
	view! { <SceneCanvas config=SceneConfig::circuit() /> }
}

/// Multicolor mesh; the default site-wide layer.
#[component]
pub fn PulseNetwork() -> impl IntoView {
	view! { <SceneCanvas config=SceneConfig::pulse_network() /> }
}

/// Slow drifting glow dots joined by faint proximity lines.
#[component]
pub fn QuantumField() -> impl IntoView {
	view! { <SceneCanvas config=SceneConfig::quantum_field() class="backdrop-canvas faint" /> }
}

/// Pointer-reactive purple web, scaled to the viewport width.
#[component]
pub fn ParticleWeb() -> impl IntoView {
	let count = web_sys::window()
		.and_then(|window| window.inner_width().ok())
		.and_then(|value| value.as_f64())
		.map(|width| ((width * 0.05) as usize).min(100))
		.unwrap_or(60);
	view! { <SceneCanvas config=SceneConfig::particle_web(count) class="backdrop-canvas faint" /> }
}

/// Short-lived violet dust that scatters away from the pointer.
#[component]
pub fn QuantumDust() -> impl IntoView {
	view! { <SceneCanvas config=SceneConfig::quantum_dust() /> }
}

/// Slowly tumbling geometric shapes.
#[component]
pub fn DigitalDrift() -> impl IntoView {
	view! { <SceneCanvas config=SceneConfig::digital_drift() class="backdrop-canvas faint" /> }
}

/// Static dot lattice, sized to its containing panel.
#[component]
pub fn DotGrid() -> impl IntoView {
	view! { <SceneCanvas config=SceneConfig::dot_grid() inset=true class="panel-canvas" /> }
}
