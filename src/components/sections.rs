//! Small presentational pieces the page sections are built from.

use leptos::prelude::*;

use crate::content::{self, Session, Speaker, Topic};

#[component]
pub fn SpeakerCard(speaker: &'static Speaker) -> impl IntoView {
	view! {
		<article class="card speaker-card">
			<div class="avatar">
				{speaker.name.chars().next().map(String::from).unwrap_or_default()}
			</div>
			<h3>{speaker.name}</h3>
			<p class="card-role">{speaker.role}</p>
			<p class="card-org">{speaker.organization}</p>
		</article>
	}
}

#[component]
pub fn TopicCard(topic: &'static Topic) -> impl IntoView {
	view! {
		<article class="card topic-card">
			<h3>{topic.title}</h3>
			<p>{topic.blurb}</p>
		</article>
	}
}

#[component]
pub fn AgendaItem(session: &'static Session) -> impl IntoView {
	view! {
		<li class="agenda-item">
			<span class="agenda-time">{session.time}</span>
			<span class="agenda-title">{session.title}</span>
			{session
				.speaker
				.map(|speaker| view! { <span class="agenda-speaker">{speaker}</span> })}
		</li>
	}
}

/// Three-day agenda behind one tab strip; a single signal holds the day.
#[component]
pub fn ScheduleTabs() -> impl IntoView {
	let day = RwSignal::new(0usize);

	view! {
		<div class="tab-row">
			{content::SCHEDULE
				.iter()
				.enumerate()
				.map(|(index, plan)| {
					view! {
						<button
							class="tab"
							class:active=move || day.get() == index
							on:click=move |_| day.set(index)
						>
							{plan.label}
						</button>
					}
				})
				.collect_view()}
		</div>
		<ul class="agenda">
			{move || {
				let index = day.get().min(content::SCHEDULE.len() - 1);
				content::SCHEDULE[index]
					.sessions
					.iter()
					.map(|session| view! { <AgendaItem session=session /> })
					.collect_view()
			}}
		</ul>
	}
}
