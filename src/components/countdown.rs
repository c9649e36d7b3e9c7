//! Countdown to the workshop opening, refreshed once per second.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// Time left until a target instant, floored at zero once it has passed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct TimeLeft {
	days: i64,
	hours: i64,
	minutes: i64,
	seconds: i64,
}

fn time_left(target_ms: f64, now_ms: f64) -> TimeLeft {
	let total = ((target_ms - now_ms) / 1000.0).max(0.0) as i64;
	TimeLeft {
		days: total / 86_400,
		hours: total / 3_600 % 24,
		minutes: total / 60 % 60,
		seconds: total % 60,
	}
}

#[component]
pub fn CountdownTimer(
	/// Target instant as milliseconds since the epoch.
	target_ms: f64,
) -> impl IntoView {
	let left = RwSignal::new(TimeLeft::default());
	let interval: Rc<RefCell<Option<(i32, Closure<dyn FnMut()>)>>> = Rc::new(RefCell::new(None));

	let interval_init = interval.clone();
	Effect::new(move |_| {
		if interval_init.borrow().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		left.set(time_left(target_ms, js_sys::Date::now()));
		let cb: Closure<dyn FnMut()> = Closure::new(move || {
			left.set(time_left(target_ms, js_sys::Date::now()));
		});
		if let Ok(id) = window
			.set_interval_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 1000)
		{
			*interval_init.borrow_mut() = Some((id, cb));
		}
	});

	let interval_cleanup = interval;
	on_cleanup(move || {
		if let Some((id, _cb)) = interval_cleanup.borrow_mut().take() {
			if let Some(window) = web_sys::window() {
				window.clear_interval_with_handle(id);
			}
		}
	});

	let tile = |value: Signal<i64>, label: &'static str| {
		view! {
			<div class="countdown-tile">
				<span class="countdown-value">{move || format!("{:02}", value.get())}</span>
				<span class="countdown-label">{label}</span>
			</div>
		}
	};

	view! {
		<div class="countdown">
			{tile(Signal::derive(move || left.get().days), "Days")}
			{tile(Signal::derive(move || left.get().hours), "Hours")}
			{tile(Signal::derive(move || left.get().minutes), "Minutes")}
			{tile(Signal::derive(move || left.get().seconds), "Seconds")}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_a_duration_into_fields() {
		// 2 days, 3 hours, 4 minutes, 5 seconds
		let ms = ((2 * 86_400 + 3 * 3_600 + 4 * 60 + 5) * 1000) as f64;
		let left = time_left(ms, 0.0);
		assert_eq!(
			left,
			TimeLeft { days: 2, hours: 3, minutes: 4, seconds: 5 }
		);
	}

	#[test]
	fn a_past_target_reads_zero() {
		let left = time_left(0.0, 5_000.0);
		assert_eq!(left, TimeLeft::default());
	}
}
