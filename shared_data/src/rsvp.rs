use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Where the page sends responses to
pub const RSVP_ENDPOINT: &str = "/api/rsvp";

/// The only thing we tell a guest when their rsvp doesn't go through. We don't try to explain
/// what went wrong, they can just hit submit again or email us.
pub const SUBMIT_FAILED_MESSAGE: &str = "Could not send RSVP. Try again or email us.";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Attending {
	#[default]
	Yes,
	No,
	Maybe,
}

impl Attending {
	pub const ALL: [Self; 3] = [Self::Yes, Self::No, Self::Maybe];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Yes => "yes",
			Self::No => "no",
			Self::Maybe => "maybe",
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Yes => "Yes",
			Self::No => "No",
			Self::Maybe => "Maybe",
		}
	}
}

impl FromStr for Attending {
	type Err = ValidationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL.into_iter()
			.find(|a| a.as_str() == s)
			.ok_or_else(|| ValidationError::UnknownAttending(s.to_string()))
	}
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
	#[default]
	None,
	// the form has always sent `veg` for this, so that's what the intake end expects
	#[serde(rename = "veg")]
	Vegetarian,
	Vegan,
	Chicken,
	Fish,
}

impl Meal {
	pub const ALL: [Self; 5] = [Self::None, Self::Vegetarian, Self::Vegan, Self::Chicken, Self::Fish];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Vegetarian => "veg",
			Self::Vegan => "vegan",
			Self::Chicken => "chicken",
			Self::Fish => "fish",
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::None => "No preference",
			Self::Vegetarian => "Vegetarian",
			Self::Vegan => "Vegan",
			Self::Chicken => "Chicken",
			Self::Fish => "Fish",
		}
	}
}

impl FromStr for Meal {
	type Err = ValidationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL.into_iter()
			.find(|m| m.as_str() == s)
			.ok_or_else(|| ValidationError::UnknownMeal(s.to_string()))
	}
}

/// What actually gets sent to the intake endpoint. Optional fields that weren't filled in are
/// left out of the json entirely.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RsvpPayload {
	pub name: String,
	pub email: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
	#[serde(default)]
	pub attending: Attending,
	#[serde(default)]
	pub meal: Meal,
	#[serde(rename = "plusOne", default, skip_serializing_if = "Option::is_none")]
	pub plus_one_name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
}

impl RsvpPayload {
	/// The first required field that's blank, if any. Other clients are allowed to post to the
	/// endpoint too, so it can't just trust that the form checked this.
	#[must_use]
	pub fn missing_required(&self) -> Option<Field> {
		if self.name.trim().is_empty() {
			Some(Field::Name)
		} else if self.email.trim().is_empty() {
			Some(Field::Email)
		} else {
			None
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
	Name,
	Email,
	Phone,
	Attending,
	Meal,
	PlusOne,
	Notes,
}

impl Field {
	pub const ALL: [Self; 7] = [
		Self::Name,
		Self::Email,
		Self::Phone,
		Self::Attending,
		Self::Meal,
		Self::PlusOne,
		Self::Notes,
	];

	/// The `name` attribute this field has in the form, which is also its key in the json body
	#[must_use]
	pub fn name(self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Email => "email",
			Self::Phone => "phone",
			Self::Attending => "attending",
			Self::Meal => "meal",
			Self::PlusOne => "plusOne",
			Self::Notes => "notes",
		}
	}

	#[must_use]
	pub fn is_required(self) -> bool {
		matches!(self, Self::Name | Self::Email)
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	#[error("the {0} field is required")]
	MissingField(Field),
	#[error("'{0}' isn't a valid answer for attending")]
	UnknownAttending(String),
	#[error("'{0}' isn't one of the meal options")]
	UnknownMeal(String),
}

/// Everything that can go wrong between handing a payload to the transport and getting a
/// successful response back. The flow doesn't care which one it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
	#[error("couldn't encode rsvp: {0}")]
	Encode(String),
	#[error("couldn't reach the server: {0}")]
	Network(String),
	#[error("server responded with status {0}")]
	Status(u16),
}

/// The raw contents of the form, exactly as the guest left them. Nothing in here is validated
/// until [`RsvpForm::to_payload`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RsvpForm {
	name: Option<String>,
	email: Option<String>,
	phone: Option<String>,
	attending: Option<String>,
	meal: Option<String>,
	plus_one: Option<String>,
	notes: Option<String>,
}

impl RsvpForm {
	/// Reads every field by its form name. Fields that `lookup` doesn't know about are just left
	/// empty.
	pub fn from_fields<F>(mut lookup: F) -> Self
	where
		F: FnMut(&str) -> Option<String>
	{
		let mut form = Self::default();
		for field in Field::ALL {
			if let Some(value) = lookup(field.name()) {
				form.set(field, value);
			}
		}
		form
	}

	fn slot(&mut self, field: Field) -> &mut Option<String> {
		match field {
			Field::Name => &mut self.name,
			Field::Email => &mut self.email,
			Field::Phone => &mut self.phone,
			Field::Attending => &mut self.attending,
			Field::Meal => &mut self.meal,
			Field::PlusOne => &mut self.plus_one,
			Field::Notes => &mut self.notes,
		}
	}

	pub fn set(&mut self, field: Field, value: String) {
		*self.slot(field) = Some(value);
	}

	#[must_use]
	pub fn get(&self, field: Field) -> Option<&str> {
		match field {
			Field::Name => self.name.as_deref(),
			Field::Email => self.email.as_deref(),
			Field::Phone => self.phone.as_deref(),
			Field::Attending => self.attending.as_deref(),
			Field::Meal => self.meal.as_deref(),
			Field::PlusOne => self.plus_one.as_deref(),
			Field::Notes => self.notes.as_deref(),
		}
	}

	/// What an input should display for this field
	#[must_use]
	pub fn value(&self, field: Field) -> String {
		match (field, self.get(field)) {
			(_, Some(val)) => val.to_string(),
			(Field::Attending, None) => Attending::default().as_str().to_string(),
			(Field::Meal, None) => Meal::default().as_str().to_string(),
			(_, None) => String::new(),
		}
	}

	pub fn to_payload(&self) -> Result<RsvpPayload, ValidationError> {
		fn required(form: &RsvpForm, field: Field) -> Result<String, ValidationError> {
			form.get(field)
				.filter(|v| !v.trim().is_empty())
				.map(str::to_string)
				.ok_or(ValidationError::MissingField(field))
		}

		// an input that's there but empty is the same as not having it at all
		let optional = |field| self.get(field)
			.filter(|v| !v.is_empty())
			.map(str::to_string);

		let attending = match self.get(Field::Attending) {
			None | Some("") => Attending::default(),
			Some(a) => a.parse()?,
		};

		let meal = match self.get(Field::Meal) {
			None | Some("") => Meal::default(),
			Some(m) => m.parse()?,
		};

		Ok(RsvpPayload {
			name: required(self, Field::Name)?,
			email: required(self, Field::Email)?,
			phone: optional(Field::Phone),
			attending,
			meal,
			plus_one_name: optional(Field::PlusOne),
			notes: optional(Field::Notes),
		})
	}
}

/// Where a single rsvp form is in its lifecycle.
///
/// `Sending` carries the payload that's currently out on the wire, so there can only ever be
/// one of those per form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
	Composing { last_error: bool },
	Sending(RsvpPayload),
	Sent,
}

impl Default for SubmissionState {
	fn default() -> Self {
		Self::Composing { last_error: false }
	}
}

/// Things the guest has to be told about out-of-band (i.e. with a blocking alert)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
	SubmitFailed,
}

impl Notice {
	#[must_use]
	pub fn message(self) -> &'static str {
		match self {
			Self::SubmitFailed => SUBMIT_FAILED_MESSAGE,
		}
	}
}

/// Something that can deliver a payload to the intake endpoint. Any non-success response has
/// to come back as an `Err`.
#[allow(async_fn_in_trait)]
pub trait RsvpTransport {
	async fn post_rsvp(&self, payload: &RsvpPayload) -> Result<(), TransportError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RsvpFlow {
	draft: RsvpForm,
	state: SubmissionState,
	// bumped every time we go into Sending, so that whatever's watching for new submissions can
	// tell two back-to-back episodes with the same payload apart
	episode: u32,
}

impl RsvpFlow {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn draft(&self) -> &RsvpForm {
		&self.draft
	}

	#[must_use]
	pub fn state(&self) -> &SubmissionState {
		&self.state
	}

	#[must_use]
	pub fn episode(&self) -> u32 {
		self.episode
	}

	#[must_use]
	pub fn is_sending(&self) -> bool {
		matches!(self.state, SubmissionState::Sending(_))
	}

	#[must_use]
	pub fn is_sent(&self) -> bool {
		self.state == SubmissionState::Sent
	}

	#[must_use]
	pub fn last_error(&self) -> bool {
		matches!(self.state, SubmissionState::Composing { last_error: true })
	}

	#[must_use]
	pub fn in_flight(&self) -> Option<&RsvpPayload> {
		match self.state {
			SubmissionState::Sending(ref payload) => Some(payload),
			_ => None,
		}
	}

	/// Updates a field. The form's locked while a submission is out or once it's been sent, so
	/// edits then are just dropped.
	pub fn edit(&mut self, field: Field, value: String) -> bool {
		if matches!(self.state, SubmissionState::Composing { .. }) {
			self.draft.set(field, value);
			true
		} else {
			false
		}
	}

	/// Starts a submission episode if we're allowed to. `Ok(None)` means there's already one in
	/// flight (or we're done), and nothing should be sent.
	pub fn begin_submit(&mut self) -> Result<Option<RsvpPayload>, ValidationError> {
		if !matches!(self.state, SubmissionState::Composing { .. }) {
			return Ok(None);
		}

		let payload = self.draft.to_payload()?;
		self.state = SubmissionState::Sending(payload.clone());
		self.episode = self.episode.wrapping_add(1);
		Ok(Some(payload))
	}

	/// Ends the current episode with whatever the transport reported. Outcomes that show up when
	/// we aren't sending anything are ignored.
	pub fn finish(&mut self, outcome: Result<(), TransportError>) -> Option<Notice> {
		if !self.is_sending() {
			return None;
		}

		match outcome {
			Ok(()) => {
				self.state = SubmissionState::Sent;
				None
			},
			Err(_) => {
				self.state = SubmissionState::Composing { last_error: true };
				Some(Notice::SubmitFailed)
			}
		}
	}

	/// Runs a whole episode against `transport`: exactly one request if we're allowed to send,
	/// none if not.
	pub async fn submit_with<T: RsvpTransport>(
		&mut self,
		transport: &T
	) -> Result<Option<Notice>, ValidationError> {
		let Some(payload) = self.begin_submit()? else {
			return Ok(None);
		};

		let outcome = transport.post_rsvp(&payload).await;
		Ok(self.finish(outcome))
	}
}
