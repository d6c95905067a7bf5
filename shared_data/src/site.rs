use chrono::ParseError;
use crate::countdown::Countdown;

/// When the ceremony starts. Set `WEDDING_TARGET` (rfc3339, with an offset) when building the
/// frontend to move it without touching the code.
pub const TARGET_INSTANT: &str = match option_env!("WEDDING_TARGET") {
	Some(target) => target,
	None => "2025-11-27T17:00:00-05:00",
};

pub struct StoryBeat {
	pub year: &'static str,
	pub title: &'static str,
	pub text: &'static str,
}

pub struct ScheduleItem {
	pub time: &'static str,
	pub what: &'static str,
}

pub struct Link {
	pub label: &'static str,
	pub href: &'static str,
}

/// Everything on the page that isn't behaviour. There used to be a few slightly different
/// copies of the page floating around; this is the one description they all render from now.
pub struct WeddingSite {
	pub couple: &'static str,
	pub tagline: &'static str,
	pub date_label: &'static str,
	pub location: &'static str,
	pub target: &'static str,
	pub story: &'static [StoryBeat],
	pub schedule: &'static [ScheduleItem],
	pub dress_code: &'static str,
	pub map_embed: &'static str,
	pub registry_blurb: &'static str,
	pub registry: &'static [Link],
	pub playlist_embed: &'static str,
	pub gallery_slots: u8,
	pub shared_album: &'static str,
	pub contact_phone: &'static str,
	pub hashtag: Link,
}

impl WeddingSite {
	pub fn countdown(&self) -> Result<Countdown, ParseError> {
		Countdown::parse(self.target)
	}

	/// `tel:` link for the "call us" bit under the form
	#[must_use]
	pub fn phone_href(&self) -> String {
		let digits = self.contact_phone
			.chars()
			.filter(|c| c.is_ascii_digit() || *c == '+')
			.collect::<String>();
		format!("tel:{digits}")
	}
}

pub static DEFAULT_SITE: WeddingSite = WeddingSite {
	couple: "Mishal & Shraddha",
	tagline: "We're getting married, and you're invited.",
	date_label: "Nov 27, 2025",
	location: "New York, NY",
	target: TARGET_INSTANT,
	story: &[
		StoryBeat {
			year: "2019",
			title: "We met",
			text: "Met at a hackathon; argued about tabs vs spaces; sparks flew.",
		},
		StoryBeat {
			year: "2023",
			title: "Said yes",
			text: "A quiet sunrise proposal. She said yes before coffee.",
		},
		StoryBeat {
			year: "2025",
			title: "Tying the knot",
			text: "Come celebrate with us. Dress sharp, dance harder.",
		},
	],
	schedule: &[
		ScheduleItem { time: "5:00 PM", what: "Guests arrive, welcome drinks" },
		ScheduleItem { time: "5:30 PM", what: "Ceremony" },
		ScheduleItem { time: "6:30 PM", what: "Cocktails & Photos" },
		ScheduleItem { time: "7:30 PM", what: "Dinner & Speeches" },
		ScheduleItem { time: "9:00 PM", what: "Dancing till late" },
		ScheduleItem { time: "11:30 PM", what: "Send-off" },
	],
	dress_code: "Black tie optional. Comfortable shoes encouraged for the dance floor.",
	map_embed: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3689.7875103739148!2d73.19861201120304!3d22.36165084058331!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x395fcec39ff45793%3A0x79fa9e5bbda7549f!2sBanyan%20Paradise%20Resort!5e0!3m2!1sen!2sus!4v1756873465789!5m2!1sen!2sus",
	registry_blurb: "We're grateful for your presence; gifts are optional. If you'd like, here are links:",
	registry: &[
		Link { label: "Amazon", href: "#" },
		Link { label: "Crate & Barrel", href: "#" },
		Link { label: "Honeyfund", href: "#" },
	],
	playlist_embed: "https://open.spotify.com/embed/playlist/37i9dQZF1DXaXB8fQg7xif?utm_source=generator",
	gallery_slots: 8,
	shared_album: "#",
	contact_phone: "+1 (555) 123-4567",
	hashtag: Link { label: "#MishalWedsShraddha", href: "#" },
};

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_target_parses() {
		assert!(DEFAULT_SITE.countdown().is_ok());

		let eastern = Countdown::parse("2025-11-27T17:00:00-05:00").unwrap();
		assert_eq!(eastern.target().offset().local_minus_utc(), -5 * 3600);
	}

	#[test]
	fn phone_link_only_has_digits() {
		assert_eq!(DEFAULT_SITE.phone_href(), "tel:+15551234567");
	}
}
