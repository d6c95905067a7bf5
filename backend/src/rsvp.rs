use axum::{http::StatusCode, Json};
use shared_data::{RsvpAck, RsvpPayload};
use tracing::info;

use crate::warn_and_ret;

/// `POST /api/rsvp`. This doesn't store anything yet; it just makes sure the required fields
/// are actually there and logs what came in.
pub async fn submit_rsvp(
	Json(payload): Json<RsvpPayload>
) -> Result<Json<RsvpAck>, (StatusCode, String)> {
	if let Some(field) = payload.missing_required() {
		warn_and_ret!(StatusCode::BAD_REQUEST, "Rejected rsvp without a {field}");
	}

	info!(
		name = %payload.name,
		email = %payload.email,
		attending = payload.attending.as_str(),
		meal = payload.meal.as_str(),
		plus_one = payload.plus_one_name.as_deref().unwrap_or(""),
		has_notes = payload.notes.as_deref().is_some_and(|n| !n.is_empty()),
		"Received rsvp"
	);

	Ok(Json(RsvpAck { ok: true }))
}

#[cfg(test)]
mod tests {
	use super::*;
	use shared_data::{Attending, Meal};

	fn jane() -> RsvpPayload {
		RsvpPayload {
			name: "Jane Doe".into(),
			email: "jane@example.com".into(),
			phone: None,
			attending: Attending::Yes,
			meal: Meal::Vegetarian,
			plus_one_name: None,
			notes: None,
		}
	}

	#[tokio::test]
	async fn accepts_a_complete_rsvp() {
		let Json(ack) = submit_rsvp(Json(jane())).await.unwrap();
		assert_eq!(ack, RsvpAck { ok: true });
		assert_eq!(serde_json::to_string(&ack).unwrap(), r#"{"ok":true}"#);
	}

	#[tokio::test]
	async fn rejects_blank_name() {
		let payload = RsvpPayload { name: "  ".into(), ..jane() };

		let (status, msg) = submit_rsvp(Json(payload)).await.unwrap_err();
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert!(msg.contains("name"), "{msg}");
	}

	#[tokio::test]
	async fn rejects_blank_email() {
		let payload = RsvpPayload { email: String::new(), ..jane() };

		let (status, _) = submit_rsvp(Json(payload)).await.unwrap_err();
		assert_eq!(status, StatusCode::BAD_REQUEST);
	}

	#[tokio::test]
	async fn takes_what_the_page_sends() {
		let body = r#"{"name":"Jane Doe","email":"jane@example.com","phone":"","attending":"maybe","meal":"fish","plusOne":"John","notes":"no nuts"}"#;
		let payload: RsvpPayload = serde_json::from_str(body).unwrap();

		assert!(submit_rsvp(Json(payload)).await.is_ok());
	}
}
