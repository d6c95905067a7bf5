use shared_data::WeddingSite;
use yew::prelude::*;

pub fn section_title(title: &'static str, subtitle: &'static str) -> Html {
	html! {
		<div class="section-title">
			<div class="section-subtitle">{ subtitle }</div>
			<h2>{ title }</h2>
		</div>
	}
}

// The countdown gets passed in already rendered since it might not exist if the target date
// didn't parse
pub fn hero(site: &WeddingSite, countdown: Html) -> Html {
	html! {
		<section id="hero">
			<h1 id="couple">{ site.couple }</h1>
			<p id="tagline">{ site.tagline }</p>
			<div id="when-where">
				<span>{ site.date_label }</span>
				<span>{ site.location }</span>
			</div>
			{ countdown }
			<div id="hero-buttons">
				<a href="#rsvp" class="button">{ "RSVP" }</a>
				<a href="#details" class="button outline">{ "Event Details" }</a>
			</div>
		</section>
	}
}

pub fn story(site: &WeddingSite) -> Html {
	html! {
		<section id="story">
			{ section_title("Our Story", "A tiny timeline of big moments") }
			<div class="grid three-col">
				{
					site.story.iter().map(|beat| html! {
						<div class="card">
							<div class="story-year serif">{ beat.year }</div>
							<div class="story-title">{ beat.title }</div>
							<p class="muted">{ beat.text }</p>
						</div>
					}).collect::<Html>()
				}
			</div>
		</section>
	}
}

pub fn details(site: &WeddingSite) -> Html {
	html! {
		<section id="details">
			{ section_title("Event Details", "When, where, dress code") }
			<div class="grid two-col">
				<div class="card">
					<div class="card-heading">{ "Schedule" }</div>
					<ul class="muted">
						{
							site.schedule.iter().map(|item| html! {
								<li><b>{ item.time }</b>{ " - " }{ item.what }</li>
							}).collect::<Html>()
						}
					</ul>
					<div class="muted">{ "Dress code: " }{ site.dress_code }</div>
				</div>
				<div class="card no-pad">
					<iframe
						title="Venue Map"
						width="100%"
						height="320"
						loading="lazy"
						referrerpolicy="no-referrer-when-downgrade"
						src={ site.map_embed }
					/>
				</div>
			</div>
		</section>
	}
}

pub fn extras(site: &WeddingSite) -> Html {
	html! {
		<section id="extras">
			{ section_title("Extras", "Registry & playlist") }
			<div class="grid two-col">
				<div class="card">
					<div class="card-heading">{ "Registry" }</div>
					<p class="muted">{ site.registry_blurb }</p>
					<ul>
						{
							site.registry.iter().map(|link| html! {
								<li><a href={ link.href }>{ link.label }</a></li>
							}).collect::<Html>()
						}
					</ul>
				</div>
				<div class="card">
					<div class="card-heading">{ "Playlist" }</div>
					<p class="muted">{ "Add a song you want to hear on the dance floor." }</p>
					<iframe
						id="playlist"
						src={ site.playlist_embed }
						width="100%"
						height="352"
						frameborder="0"
						allow="autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture"
						loading="lazy"
					/>
				</div>
			</div>
		</section>
	}
}

pub fn gallery(site: &WeddingSite) -> Html {
	html! {
		<section id="gallery">
			{ section_title("Gallery", "Engagement photos & guest uploads") }
			<div class="grid four-col">
				{ (0..site.gallery_slots).map(|_| html! { <div class="gallery-tile" /> }).collect::<Html>() }
			</div>
			<p class="muted">
				{ "Got pics of us? " }
				<a href={ site.shared_album }>{ "Upload to our shared album" }</a>
				{ "." }
			</p>
		</section>
	}
}

pub fn footer(site: &WeddingSite) -> Html {
	let year = js_sys::Date::new_0().get_full_year();

	html! {
		<footer class="muted">
			{ format!("© {year} {} • Built with ❤ • ", site.couple) }
			<a href={ site.hashtag.href }>{ site.hashtag.label }</a>
		</footer>
	}
}
