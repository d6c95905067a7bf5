use gloo_timers::callback::Interval;
use shared_data::{countdown::pad, Countdown, TICK_PERIOD_MS};
use yew::prelude::*;

fn now_ms() -> i64 {
	// Date.now() is always a whole number of ms so this doesn't lose anything
	js_sys::Date::now() as i64
}

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
	pub countdown: Countdown
}

#[function_component(CountdownClock)]
pub fn countdown_clock(props: &CountdownProps) -> Html {
	let countdown = props.countdown;
	let remaining = use_state_eq(move || countdown.at(now_ms()));

	{
		let remaining = remaining.clone();
		// if the target ever changes, the old interval gets dropped (which cancels it) and a new
		// one gets started against the new target
		use_effect_with(countdown, move |countdown| {
			let countdown = *countdown;
			remaining.set(countdown.at(now_ms()));

			let interval = Interval::new(TICK_PERIOD_MS, move || remaining.set(countdown.at(now_ms())));

			move || drop(interval)
		});
	}

	html! {
		<div id="countdown" class="grid four-col">
			{
				remaining.units().into_iter().map(|(label, value)| html! {
					<div class="card countdown-unit">
						<div class="countdown-value">{ pad(value) }</div>
						<div class="countdown-label">{ label }</div>
					</div>
				}).collect::<Html>()
			}
		</div>
	}
}
