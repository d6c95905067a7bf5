use chrono::{DateTime, FixedOffset, ParseError};

/// How often the countdown should be recomputed, in milliseconds
pub const TICK_PERIOD_MS: u32 = 1000;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// The time left until the event, broken down the way it's shown on the page.
///
/// `hours`, `minutes`, and `seconds` always stay within a single day/hour/minute (so 0-23,
/// 0-59, 0-59), and nothing here can ever go negative: once the event has started, everything
/// just sits at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountdownState {
	pub days: u64,
	pub hours: u8,
	pub minutes: u8,
	pub seconds: u8,
}

impl CountdownState {
	pub const ZERO: Self = Self { days: 0, hours: 0, minutes: 0, seconds: 0 };

	#[must_use]
	pub fn from_remaining_ms(remaining_ms: i64) -> Self {
		// if the clock got pushed past the target (or backwards, or whatever) we just show zeros
		let ms = remaining_ms.max(0);

		// all of these are bounded by the modulo so the casts can't truncate
		Self {
			days: (ms / MS_PER_DAY) as u64,
			hours: ((ms / MS_PER_HOUR) % 24) as u8,
			minutes: ((ms / MS_PER_MINUTE) % 60) as u8,
			seconds: ((ms / MS_PER_SECOND) % 60) as u8,
		}
	}

	#[must_use]
	pub fn is_zero(&self) -> bool {
		*self == Self::ZERO
	}

	#[must_use]
	pub fn total_seconds(&self) -> u64 {
		self.days * 86_400
			+ u64::from(self.hours) * 3600
			+ u64::from(self.minutes) * 60
			+ u64::from(self.seconds)
	}

	/// Each unit with its label, in the order they're laid out on the page
	#[must_use]
	pub fn units(&self) -> [(&'static str, u64); 4] {
		[
			("Days", self.days),
			("Hours", u64::from(self.hours)),
			("Minutes", u64::from(self.minutes)),
			("Seconds", u64::from(self.seconds)),
		]
	}
}

/// Zero-pads to at least two digits, so `5` shows up as `05` but `123` days stays `123`
#[must_use]
pub fn pad(value: u64) -> String {
	format!("{value:02}")
}

/// A countdown to one fixed instant. If you want to count down to something else, make a new
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
	target: DateTime<FixedOffset>,
}

impl Countdown {
	#[must_use]
	pub fn new(target: DateTime<FixedOffset>) -> Self {
		Self { target }
	}

	pub fn parse(rfc3339: &str) -> Result<Self, ParseError> {
		DateTime::parse_from_rfc3339(rfc3339).map(Self::new)
	}

	#[must_use]
	pub fn target(&self) -> DateTime<FixedOffset> {
		self.target
	}

	/// What the countdown should read at `now_ms` (milliseconds since the unix epoch). This is
	/// computed from scratch every time, so a late or skipped tick fixes itself on the next one.
	#[must_use]
	pub fn at(&self, now_ms: i64) -> CountdownState {
		CountdownState::from_remaining_ms(self.target.timestamp_millis().saturating_sub(now_ms))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn target() -> Countdown {
		Countdown::parse("2025-11-27T17:00:00-05:00").unwrap()
	}

	fn in_range(state: &CountdownState) -> bool {
		state.hours <= 23 && state.minutes <= 59 && state.seconds <= 59
	}

	#[test]
	fn one_of_each_unit() {
		let countdown = target();
		let now = countdown.target().timestamp_millis() - 90_061_001;

		assert_eq!(countdown.at(now), CountdownState { days: 1, hours: 1, minutes: 1, seconds: 1 });
	}

	#[test]
	fn past_target_reads_zero_forever() {
		let countdown = target();
		let start = countdown.target().timestamp_millis();

		for offset in [0, 1, 999, 1000, 86_400_000, 10 * 365 * 86_400_000] {
			assert_eq!(countdown.at(start + offset), CountdownState::ZERO);
		}
		assert!(countdown.at(i64::MAX).is_zero());
	}

	#[test]
	fn never_increases_while_ticking() {
		let countdown = target();
		let end = countdown.target().timestamp_millis();
		// start a couple days out and tick past the target by a bit, with some uneven tick
		// spacing to mimic a browser that's being lazy about the interval
		let mut now = end - 2 * 86_400_000 - 1234;
		let mut last = countdown.at(now);

		while now < end + 5000 {
			now += if now % 7 == 0 { 2300 } else { 1000 };
			let next = countdown.at(now);

			assert!(next.total_seconds() <= last.total_seconds(), "{next:?} > {last:?}");
			assert!(in_range(&next), "{next:?} out of range");
			last = next;
		}

		assert!(last.is_zero());
	}

	#[test]
	fn units_stay_in_range() {
		for ms in [
			0, 1, 999, 59_999, 60_000, 3_599_999, 3_600_000, 86_399_999, 86_400_000,
			123_456_789, 987_654_321_012, i64::MAX, -1, i64::MIN
		] {
			let state = CountdownState::from_remaining_ms(ms);
			assert!(in_range(&state), "{ms} gave {state:?}");
		}
	}

	#[test]
	fn rounds_down_to_the_last_whole_second() {
		let state = CountdownState::from_remaining_ms(86_399_999);
		assert_eq!(state, CountdownState { days: 0, hours: 23, minutes: 59, seconds: 59 });
		assert_eq!(state.total_seconds(), 86_399);
	}

	#[test]
	fn offset_doesnt_matter_for_the_same_instant() {
		let eastern = Countdown::parse("2025-11-27T17:00:00-05:00").unwrap();
		let utc = Countdown::parse("2025-11-27T22:00:00Z").unwrap();
		let now = utc.target().timestamp_millis() - 3_600_000;

		assert_eq!(eastern.at(now), utc.at(now));
	}

	#[test]
	fn bad_target_doesnt_parse() {
		assert!(Countdown::parse("next thursday").is_err());
	}

	#[test]
	fn padding() {
		assert_eq!(pad(0), "00");
		assert_eq!(pad(7), "07");
		assert_eq!(pad(42), "42");
		assert_eq!(pad(365), "365");
	}

	#[test]
	fn units_are_in_display_order() {
		let state = CountdownState { days: 3, hours: 2, minutes: 1, seconds: 0 };
		let labels = state.units().map(|(label, _)| label);
		assert_eq!(labels, ["Days", "Hours", "Minutes", "Seconds"]);
		assert_eq!(state.units()[0].1, 3);
	}
}
