use gloo_console::log;
use gloo_net::http::Request;
use shared_data::{
	Attending,
	Field,
	Meal,
	Notice,
	RsvpFlow,
	RsvpPayload,
	RsvpTransport,
	TransportError,
	ValidationError,
	WeddingSite,
	RSVP_ENDPOINT,
};
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Sends rsvps to the real endpoint through `fetch`
pub struct GlooTransport;

impl RsvpTransport for GlooTransport {
	async fn post_rsvp(&self, payload: &RsvpPayload) -> Result<(), TransportError> {
		// `.json()` sets the content-type for us
		let request = Request::post(RSVP_ENDPOINT)
			.json(payload)
			.map_err(|e| TransportError::Encode(e.to_string()))?;

		let res = request.send()
			.await
			.map_err(|e| TransportError::Network(e.to_string()))?;

		// we don't care what the body says, just that it went through
		if res.ok() {
			Ok(())
		} else {
			Err(TransportError::Status(res.status()))
		}
	}
}

#[derive(Debug)]
pub enum RsvpMsg {
	Edit(Field, String),
	Submit,
	Finish(Result<(), TransportError>),
}

#[derive(Clone, Default, PartialEq)]
pub struct RsvpState {
	flow: RsvpFlow,
	// only really reachable if someone messes with the form in devtools since the inputs have
	// `required` and the selects only have valid options, but it's nicer than silently doing
	// nothing
	invalid: Option<ValidationError>,
	// the episode it came from is in here too so that two failures in a row still count as a
	// change and each get their own alert
	notice: Option<(u32, Notice)>,
}

impl Reducible for RsvpState {
	type Action = RsvpMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut next = (*self).clone();

		match action {
			RsvpMsg::Edit(field, value) => if !next.flow.edit(field, value) {
				return self;
			},
			RsvpMsg::Submit => match next.flow.begin_submit() {
				Ok(None) => return self,
				Ok(Some(_)) => next.invalid = None,
				Err(e) => next.invalid = Some(e),
			},
			RsvpMsg::Finish(outcome) => {
				if let Some(notice) = next.flow.finish(outcome) {
					next.notice = Some((next.flow.episode(), notice));
				}
			}
		}

		next.into()
	}
}

fn alert(notice: Notice) {
	let Some(window) = web_sys::window() else {
		log!("No window to alert with; rsvp failed");
		return;
	};

	if let Err(e) = window.alert_with_message(notice.message()) {
		log!("Couldn't show alert: ", e);
	}
}

#[derive(Properties)]
pub struct RsvpProps {
	pub site: &'static WeddingSite
}

impl PartialEq for RsvpProps {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self.site, other.site)
	}
}

#[function_component(RsvpSection)]
pub fn rsvp_section(props: &RsvpProps) -> Html {
	let state = use_reducer_eq(RsvpState::default);

	// Whenever we go into Sending, fire off the one request for this episode. Pressing submit
	// again while it's out doesn't change what's in flight, so this doesn't run again.
	{
		let dispatcher = state.dispatcher();
		let in_flight = state.flow.in_flight()
			.cloned()
			.map(|payload| (state.flow.episode(), payload));

		use_effect_with(in_flight, move |in_flight| {
			if let Some((episode, payload)) = in_flight.clone() {
				wasm_bindgen_futures::spawn_local(async move {
					let outcome = GlooTransport.post_rsvp(&payload).await;

					if let Err(ref e) = outcome {
						log!(format!("Rsvp submission {episode} failed: {e}"));
					}

					dispatcher.dispatch(RsvpMsg::Finish(outcome));
				});
			}

			|| ()
		});
	}

	use_effect_with(state.notice, |notice| {
		if let Some((_, notice)) = notice {
			alert(*notice);
		}

		|| ()
	});

	let content = if state.flow.is_sent() {
		html! {
			<div id="rsvp-sent">
				<div class="sent-title">{ "Thank you!" }</div>
				<p class="muted">{ "We've recorded your RSVP. We'll reach out with any updates." }</p>
			</div>
		}
	} else {
		rsvp_form(&state, props.site)
	};

	html! {
		<section id="rsvp" class="narrow">
			{ super::sections::section_title("RSVP", "Let us know you're coming") }
			<div class="card">
				{ content }
			</div>
		</section>
	}
}

fn rsvp_form(state: &UseReducerHandle<RsvpState>, site: &WeddingSite) -> Html {
	let sending = state.flow.is_sending();
	let draft = state.flow.draft();

	macro_rules! edit_callback{
		($field:ident, $elem:ty, $ev:ty) => {{
			let state = state.clone();
			Callback::from(move |e: $ev| if let Some(el) = e.target_dyn_into::<$elem>() {
				state.dispatch(RsvpMsg::Edit(Field::$field, el.value()));
			})
		}}
	}

	let onsubmit = {
		let state = state.clone();
		Callback::from(move |e: SubmitEvent| {
			// we're doing the request ourselves, don't let the browser navigate
			e.prevent_default();
			state.dispatch(RsvpMsg::Submit);
		})
	};

	let attending = draft.value(Field::Attending);
	let meal = draft.value(Field::Meal);

	html! {
		<form id="rsvp-form" class="grid two-col" {onsubmit}>
			<label class="grid">
				<span class="field-label">{ "Full name" }</span>
				<input
					name={ Field::Name.name() }
					required=true
					disabled={ sending }
					value={ draft.value(Field::Name) }
					oninput={ edit_callback!(Name, HtmlInputElement, InputEvent) }
				/>
			</label>
			<label class="grid">
				<span class="field-label">{ "Email" }</span>
				<input
					name={ Field::Email.name() }
					type="email"
					required=true
					disabled={ sending }
					value={ draft.value(Field::Email) }
					oninput={ edit_callback!(Email, HtmlInputElement, InputEvent) }
				/>
			</label>
			<label class="grid">
				<span class="field-label">{ "Phone" }</span>
				<input
					name={ Field::Phone.name() }
					disabled={ sending }
					value={ draft.value(Field::Phone) }
					oninput={ edit_callback!(Phone, HtmlInputElement, InputEvent) }
				/>
			</label>
			<label class="grid">
				<span class="field-label">{ "Attending?" }</span>
				<select
					name={ Field::Attending.name() }
					disabled={ sending }
					onchange={ edit_callback!(Attending, HtmlSelectElement, Event) }
				>
					{
						Attending::ALL.into_iter().map(|a| html! {
							<option value={ a.as_str() } selected={ attending == a.as_str() }>{ a.label() }</option>
						}).collect::<Html>()
					}
				</select>
			</label>
			<label class="grid span-2">
				<span class="field-label">{ "Meal preference" }</span>
				<select
					name={ Field::Meal.name() }
					disabled={ sending }
					onchange={ edit_callback!(Meal, HtmlSelectElement, Event) }
				>
					{
						Meal::ALL.into_iter().map(|m| html! {
							<option value={ m.as_str() } selected={ meal == m.as_str() }>{ m.label() }</option>
						}).collect::<Html>()
					}
				</select>
			</label>
			<label class="grid span-2">
				<span class="field-label">{ "Plus one name (if any)" }</span>
				<input
					name={ Field::PlusOne.name() }
					disabled={ sending }
					value={ draft.value(Field::PlusOne) }
					oninput={ edit_callback!(PlusOne, HtmlInputElement, InputEvent) }
				/>
			</label>
			<label class="grid span-2">
				<span class="field-label">{ "Notes (allergies, access needs, song requests)" }</span>
				<textarea
					name={ Field::Notes.name() }
					rows="4"
					disabled={ sending }
					value={ draft.value(Field::Notes) }
					oninput={ edit_callback!(Notes, HtmlTextAreaElement, InputEvent) }
				/>
			</label>
			{
				match state.invalid {
					Some(ref err) => html! {
						<div class="span-2" id="rsvp-invalid">{ format!("Can't send that yet: {err}") }</div>
					},
					None => html! {}
				}
			}
			<div id="rsvp-footer" class="span-2">
				<span class="muted">
					{ "Questions? " }
					<a href={ site.phone_href() }>{ "Call us" }</a>
				</span>
				<button type="submit" disabled={ sending }>
					{ if sending { "Sending..." } else { "Submit RSVP" } }
				</button>
			</div>
		</form>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use shared_data::SubmissionState;

	fn filled_in() -> Rc<RsvpState> {
		Rc::new(RsvpState::default())
			.reduce(RsvpMsg::Edit(Field::Name, "Jane Doe".into()))
			.reduce(RsvpMsg::Edit(Field::Email, "jane@example.com".into()))
	}

	#[test]
	fn each_failure_gets_its_own_alert() {
		let first = filled_in()
			.reduce(RsvpMsg::Submit)
			.reduce(RsvpMsg::Finish(Err(TransportError::Status(500))));
		assert_eq!(first.notice, Some((1, Notice::SubmitFailed)));

		let second = first.clone()
			.reduce(RsvpMsg::Submit)
			.reduce(RsvpMsg::Finish(Err(TransportError::Network("offline".into()))));
		assert_eq!(second.notice, Some((2, Notice::SubmitFailed)));
		assert_ne!(first.notice, second.notice);
		assert_eq!(second.flow.draft(), first.flow.draft());
	}

	#[test]
	fn submitting_twice_is_a_no_op() {
		let sending = filled_in().reduce(RsvpMsg::Submit);
		assert!(sending.flow.is_sending());

		let again = sending.clone().reduce(RsvpMsg::Submit);
		assert!(Rc::ptr_eq(&sending, &again));
		assert_eq!(again.flow.episode(), 1);
	}

	#[test]
	fn success_leaves_no_notice() {
		let done = filled_in()
			.reduce(RsvpMsg::Submit)
			.reduce(RsvpMsg::Finish(Ok(())));

		assert_eq!(done.flow.state(), &SubmissionState::Sent);
		assert_eq!(done.notice, None);
	}

	#[test]
	fn missing_email_shows_inline_and_sends_nothing() {
		let state = Rc::new(RsvpState::default())
			.reduce(RsvpMsg::Edit(Field::Name, "Jane Doe".into()))
			.reduce(RsvpMsg::Submit);

		assert_eq!(state.invalid, Some(ValidationError::MissingField(Field::Email)));
		assert_eq!(state.flow.in_flight(), None);
	}
}
