pub mod countdown;
pub mod rsvp;
pub mod site;

pub use countdown::{Countdown, CountdownState, TICK_PERIOD_MS};
pub use rsvp::{
	Attending,
	Field,
	Meal,
	Notice,
	RsvpFlow,
	RsvpForm,
	RsvpPayload,
	RsvpTransport,
	SubmissionState,
	TransportError,
	ValidationError,
	RSVP_ENDPOINT,
};
pub use site::{WeddingSite, DEFAULT_SITE};

/// The body the intake endpoint replies with when it's happy. The page doesn't actually look at
/// it, any 2xx is good enough.
#[derive(serde::Deserialize, serde::Serialize, Debug, PartialEq, Eq)]
pub struct RsvpAck {
	pub ok: bool,
}

pub static BASE_STYLE: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Cormorant+Garamond:wght@500;600&display=swap');
* {
	--rose: #e11d48;
	--rose-soft: #fff1f2;
	--ink: #1e293b;
	--muted: #475569;
	--faint: #64748b;
	--card: #ffffffb3;
	--border: #e2e8f0;
	--tile: #f1f5f9;
	color: var(--ink);
	font-family: system-ui, Arial, sans-serif;
	box-sizing: border-box;
}
body {
	margin: 0;
	min-height: 100vh;
	background: linear-gradient(to bottom, var(--rose-soft), #ffffff, #f8fafc);
}
h1, h2, .serif {
	font-family: "Cormorant Garamond", serif;
}
section {
	margin: 0 auto;
	max-width: 1024px;
	padding: 64px 24px;
}
.card {
	background-color: var(--card);
	border-radius: 16px;
	box-shadow: 0 1px 2px rgba(0, 0, 0, 0.06);
	padding: 24px;
}
.grid {
	display: grid;
	gap: 16px;
}
.muted {
	color: var(--muted);
	font-size: 14px;
}
a {
	color: var(--rose);
}
button, .button {
	border-radius: 16px;
	border: 1px solid var(--ink);
	background-color: var(--ink);
	color: white;
	padding: 14px 24px;
	font-size: 16px;
	text-decoration: none;
	cursor: pointer;
}
.button.outline {
	background-color: transparent;
	color: var(--ink);
}
button:disabled {
	opacity: 0.6;
	cursor: default;
}
input, select, textarea {
	border: 1px solid var(--border);
	border-radius: 12px;
	padding: 12px;
	font-size: 16px;
	width: 100%;
}
@media (min-width: 768px) {
	.two-col {
		grid-template-columns: 1fr 1fr;
	}
	.three-col {
		grid-template-columns: 1fr 1fr 1fr;
	}
	.four-col {
		grid-template-columns: repeat(4, 1fr);
	}
	.span-2 {
		grid-column: span 2;
	}
}
"#;
