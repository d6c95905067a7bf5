use gloo_console::log;
use shared_data::WeddingSite;
use yew::prelude::*;
use crate::{
	countdown::CountdownClock,
	rsvp::RsvpSection,
	sections,
	style::SharedStyle,
};

#[derive(Properties)]
pub struct HomeProps {
	pub site: &'static WeddingSite
}

impl PartialEq for HomeProps {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self.site, other.site)
	}
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
	let site = props.site;

	let countdown = match site.countdown() {
		Ok(countdown) => html! { <CountdownClock { countdown } /> },
		Err(e) => {
			// not worth taking the whole page down over, the date's still written up top
			log!(format!("Couldn't parse target '{}': {e}", site.target));
			html! {}
		}
	};

	html! {
		<>
			<SharedStyle />
			{ sections::hero(site, countdown) }
			{ sections::story(site) }
			{ sections::details(site) }
			{ sections::extras(site) }
			{ sections::gallery(site) }
			<RsvpSection { site } />
			{ sections::footer(site) }
		</>
	}
}
