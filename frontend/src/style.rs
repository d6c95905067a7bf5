use yew::prelude::*;

// everything the page needs on top of the palette/base rules that live in shared_data
const PAGE_STYLE: &str = r#"
#hero {
	text-align: center;
	max-width: 896px;
	padding-bottom: 48px;
}
#couple {
	font-size: 60px;
	margin: 0;
}
#tagline {
	font-size: 20px;
	color: var(--muted);
}
#when-where > span {
	margin: 0 12px;
	color: var(--muted);
}
#countdown {
	grid-template-columns: repeat(4, 1fr);
	max-width: 448px;
	margin: 32px auto 0 auto;
}
.countdown-unit {
	padding: 12px;
	backdrop-filter: blur(8px);
}
.countdown-value {
	font-size: 24px;
	font-weight: 600;
}
.countdown-label {
	font-size: 12px;
	color: var(--faint);
}
#hero-buttons {
	margin-top: 32px;
}
#hero-buttons > a {
	margin: 0 6px;
	display: inline-block;
}
.section-title {
	text-align: center;
	margin-bottom: 32px;
}
.section-subtitle {
	color: var(--rose);
	text-transform: uppercase;
	letter-spacing: 0.1em;
	font-size: 12px;
}
.section-title > h2 {
	font-size: 36px;
	margin: 4px 0 0 0;
}
.story-year {
	font-size: 24px;
}
.story-title, .card-heading {
	font-weight: 600;
	margin-top: 4px;
}
.no-pad {
	padding: 0;
	overflow: hidden;
}
iframe {
	border: 0;
	border-radius: 12px;
}
.gallery-tile {
	aspect-ratio: 1;
	border-radius: 12px;
	background-color: var(--tile);
}
section.narrow {
	max-width: 768px;
}
.field-label {
	font-size: 14px;
}
#rsvp-footer {
	display: flex;
	align-items: center;
	justify-content: space-between;
}
#rsvp-invalid {
	color: var(--rose);
}
#rsvp-sent {
	text-align: center;
}
.sent-title {
	font-size: 20px;
	font-weight: 600;
}
footer {
	text-align: center;
	padding-bottom: 64px;
}
"#;

#[function_component(SharedStyle)]
pub fn shared_style() -> Html {
	html! {
		<>
			<style>{ shared_data::BASE_STYLE }</style>
			<style>{ PAGE_STYLE }</style>
		</>
	}
}
