use axum::{routing::post, Router};
use shared_data::RSVP_ENDPOINT;
use tower_http::services::{ServeDir, ServeFile};

pub mod config;
pub mod rsvp;

#[macro_export]
macro_rules! warn_and_ret{
	($err: expr, $ret_str: expr) => {{
		let msg = format!($ret_str);
		tracing::warn!("{msg}");
		return Err(($err, msg));
	}};
	($ret_str:expr) => {
		$crate::warn_and_ret!(axum::http::StatusCode::INTERNAL_SERVER_ERROR, $ret_str)
	}
}

/// The whole site: the intake endpoint, plus the built frontend for everything else
pub fn router(config: &config::Config) -> Router {
	let index = config.frontend_dir.join("index.html");
	let frontend = ServeDir::new(&config.frontend_dir)
		.fallback(ServeFile::new(index));

	// anything other than a POST here gets a 405 from the method router
	Router::new()
		.route(RSVP_ENDPOINT, post(rsvp::submit_rsvp))
		.fallback_service(frontend)
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::{body::{to_bytes, Body}, http::{Request, StatusCode}};
	use crate::config::Config;
	use std::net::{IpAddr, Ipv4Addr};
	use tower::ServiceExt;

	const JANE: &str = r#"{"name":"Jane Doe","email":"jane@example.com","attending":"yes","meal":"veg"}"#;

	fn config_for(dir: &std::path::Path) -> Config {
		Config {
			host: IpAddr::V4(Ipv4Addr::LOCALHOST),
			port: Config::DEFAULT_PORT,
			frontend_dir: dir.to_path_buf(),
		}
	}

	fn post_rsvp(body: &'static str) -> Request<Body> {
		Request::builder()
			.method("POST")
			.uri(RSVP_ENDPOINT)
			.header("content-type", "application/json")
			.body(Body::from(body))
			.unwrap()
	}

	async fn send(req: Request<Body>) -> (StatusCode, String) {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("index.html"), "<body>wedding</body>").unwrap();

		let res = router(&config_for(dir.path())).oneshot(req).await.unwrap();
		let status = res.status();
		let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
		(status, String::from_utf8_lossy(&body).into_owned())
	}

	#[tokio::test]
	async fn rsvp_goes_through() {
		let (status, body) = send(post_rsvp(JANE)).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, r#"{"ok":true}"#);
	}

	#[tokio::test]
	async fn only_post_is_allowed_on_rsvp() {
		let req = Request::builder()
			.uri(RSVP_ENDPOINT)
			.body(Body::empty())
			.unwrap();

		let (status, _) = send(req).await;
		assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
	}

	#[tokio::test]
	async fn unknown_meal_is_rejected_before_the_handler() {
		let (status, _) = send(post_rsvp(r#"{"name":"Jane Doe","email":"jane@example.com","meal":"vegetarian"}"#)).await;
		assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
	}

	#[tokio::test]
	async fn malformed_json_is_rejected() {
		let (status, _) = send(post_rsvp(r#"{"name": "Jane"#)).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
	}

	#[tokio::test]
	async fn blank_name_is_rejected_by_the_handler() {
		let (status, body) = send(post_rsvp(r#"{"name":"","email":"jane@example.com"}"#)).await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert!(body.contains("name"), "{body}");
	}

	#[tokio::test]
	async fn other_paths_fall_back_to_the_page() {
		let req = Request::builder()
			.uri("/rsvp")
			.body(Body::empty())
			.unwrap();

		let (status, body) = send(req).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, "<body>wedding</body>");
	}
}
