use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::components::backgrounds::{DigitalDrift, DotGrid, ParticleWeb, PulseNetwork, QuantumDust};
use crate::components::countdown::CountdownTimer;
use crate::components::cursor::CustomCursor;
use crate::components::orbs::FloatingOrbs;
use crate::components::radar::ResearchRadar;
use crate::components::scroll::ScrollProgress;
use crate::components::sections::{ScheduleTabs, SpeakerCard, TopicCard};
use crate::content;

/// Default Home Page: layered animated backdrops behind the workshop copy.
#[component]
pub fn Home() -> impl IntoView {
	let countdown_target =
		js_sys::Date::new(&JsValue::from_str(content::WORKSHOP_START)).get_time();

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="page">
				<PulseNetwork />
				<QuantumDust />
				<ParticleWeb />
				<DigitalDrift />
				<FloatingOrbs />
				<ScrollProgress />
				<CustomCursor />

				<header class="site-header">
					<span class="brand">"QCW 2025"</span>
					<nav class="site-nav">
						<a href="#home">"Home"</a>
						<a href="#about">"About"</a>
						<a href="#topics">"Topics"</a>
						<a href="#speakers">"Speakers"</a>
						<a href="#schedule">"Schedule"</a>
						<a href="#registration">"Registration"</a>
					</nav>
				</header>

				<main>
					<section id="home" class="hero">
						<p class="eyebrow">
							{content::WORKSHOP_DATES} " · " {content::WORKSHOP_VENUE}
						</p>
						<h1 class="glow-heading">{content::WORKSHOP_TITLE}</h1>
						<p class="subtitle">{content::WORKSHOP_TAGLINE}</p>
						<CountdownTimer target_ms=countdown_target />
						<a class="cta" href="#registration">"Register now"</a>
					</section>

					<section id="about" class="panel">
						<h2>"About the Workshop"</h2>
						<p>
							"2025 has been declared the International Year of Quantum Science \
							and Technology. Over three days the workshop walks educators from \
							the fundamentals of quantum information through the current \
							research landscape to the paths the field is likely to take, \
							mixing lectures with hands-on lab sessions."
						</p>
					</section>

					<section id="topics" class="panel">
						<h2>"Workshop Topics"</h2>
						<div class="card-grid">
							{content::TOPICS
								.iter()
								.map(|topic| view! { <TopicCard topic=topic /> })
								.collect_view()}
						</div>
					</section>

					<section id="trends" class="panel">
						<h2>"Research Momentum"</h2>
						<ResearchRadar data=content::radar_data() />
					</section>

					<section id="speakers" class="panel">
						<h2>"Speakers"</h2>
						<div class="card-grid">
							{content::SPEAKERS
								.iter()
								.map(|speaker| view! { <SpeakerCard speaker=speaker /> })
								.collect_view()}
						</div>
					</section>

					<section id="schedule" class="panel">
						<h2>"Schedule"</h2>
						<ScheduleTabs />
					</section>

					<section id="registration" class="panel">
						<div class="panel-texture">
							<DotGrid />
						</div>
						<h2>"Registration"</h2>
						<p>
							"Participation is free for faculty of affiliated institutions; \
							seats are limited and allotted in order of registration."
						</p>
						<a class="cta" href=format!("mailto:{}", content::CONTACT_EMAIL)>
							"Write to register"
						</a>
					</section>
				</main>

				<footer class="site-footer">
					<p>{content::WORKSHOP_VENUE}</p>
					<p>
						<a href=format!("mailto:{}", content::CONTACT_EMAIL)>
							{content::CONTACT_EMAIL}
						</a>
					</p>
				</footer>
			</div>
		</ErrorBoundary>
	}
}
