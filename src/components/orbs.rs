//! Blurred gradient blobs drifting slowly behind the page. Pure CSS
//! animation; the canvas engine is not involved.

use leptos::prelude::*;

struct Orb {
	size: f64,
	x: &'static str,
	y: &'static str,
	/// Seconds for one drift cycle.
	duration: f64,
	delay: f64,
	tint: &'static str,
}

const ORBS: &[Orb] = &[
	Orb { size: 100.0, x: "10%", y: "20%", duration: 20.0, delay: 0.0, tint: "rgba(16, 185, 129, 0.1)" },
	Orb { size: 150.0, x: "80%", y: "15%", duration: 25.0, delay: 5.0, tint: "rgba(245, 158, 11, 0.1)" },
	Orb { size: 80.0, x: "25%", y: "80%", duration: 22.0, delay: 2.0, tint: "rgba(236, 72, 153, 0.1)" },
	Orb { size: 120.0, x: "70%", y: "75%", duration: 18.0, delay: 8.0, tint: "rgba(59, 130, 246, 0.1)" },
	Orb { size: 60.0, x: "40%", y: "30%", duration: 15.0, delay: 12.0, tint: "rgba(139, 92, 246, 0.1)" },
	Orb { size: 90.0, x: "60%", y: "60%", duration: 30.0, delay: 7.0, tint: "rgba(16, 185, 129, 0.1)" },
];

#[component]
pub fn FloatingOrbs() -> impl IntoView {
	view! {
		<div class="orb-layer">
			{ORBS
				.iter()
				.map(|orb| {
					let style = format!(
						"width: {}px; height: {}px; left: {}; top: {}; background: {}; \
						animation-duration: {}s; animation-delay: {}s;",
						orb.size, orb.size, orb.x, orb.y, orb.tint, orb.duration, orb.delay,
					);
					view! { <div class="orb" style=style></div> }
				})
				.collect_view()}
		</div>
	}
}
