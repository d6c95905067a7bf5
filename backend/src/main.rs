use backend::config::Config;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt::init();

	// it's fine if there's no .env, everything has a default
	if let Err(e) = dotenv::dotenv() {
		info!("Not reading .env: {e}");
	}

	let config = Config::from_env();

	if !config.frontend_dir.is_dir() {
		tracing::warn!(
			"FRONTEND_DIR ({}) isn't a directory; only the api will work until the frontend is built there",
			config.frontend_dir.display()
		);
	}

	let app = backend::router(&config);
	let addr = config.addr();
	let listener = tokio::net::TcpListener::bind(addr).await?;

	info!("Serving {} on {addr}...", config.frontend_dir.display());

	axum::serve(listener, app).await?;

	Ok(())
}
