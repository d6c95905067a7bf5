use yew_router::prelude::*;
use yew::prelude::*;
use home::Home;
use rsvp::RsvpSection;
use shared_data::DEFAULT_SITE;
use style::SharedStyle;

mod countdown;
mod home;
mod rsvp;
mod sections;
mod style;

#[derive(Clone, Routable, PartialEq)]
enum Route {
	#[not_found]
	#[at("/")]
	Home,
	// for sending to people who've already seen everything and just need the form
	#[at("/rsvp")]
	Rsvp,
}

fn switch(route: Route) -> Html {
	match route {
		Route::Home => html! { <Home site={ &DEFAULT_SITE } /> },
		Route::Rsvp => html! {
			<>
				<SharedStyle />
				<RsvpSection site={ &DEFAULT_SITE } />
			</>
		},
	}
}

#[function_component(Frontend)]
pub fn frontend() -> Html {
	html! {
		<BrowserRouter>
			<Switch<Route> render={switch} />
		</BrowserRouter>
	}
}

fn main() {
	yew::Renderer::<Frontend>::new().render();
}
