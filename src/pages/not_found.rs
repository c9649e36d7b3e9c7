use leptos::prelude::*;

use crate::components::backgrounds::{CircuitBackground, QuantumField};

/// 404 fallback for stray routes, with its own backdrop variant.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<CircuitBackground />
		<QuantumField />
		<main class="not-found">
			<h1>"404"</h1>
			<p>"This page drifted out of bounds."</p>
			<a href="/">"Back to the workshop"</a>
		</main>
	}
}
