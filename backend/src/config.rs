use std::{net::{IpAddr, Ipv4Addr, SocketAddr}, path::PathBuf};

macro_rules! dotenv_num{
	($key:expr, $default:expr, $type:ident) => {
		dotenv::var($key).ok()
			.and_then(|v| v.parse::<$type>().ok())
			.unwrap_or($default)
	}
}

/// Everything the server reads out of the environment (or `.env`) at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub host: IpAddr,
	pub port: u16,
	/// Where trunk put the built frontend. We serve everything in here, falling back to
	/// `index.html` for any path we don't recognize so the router can take over.
	pub frontend_dir: PathBuf,
}

impl Config {
	pub const DEFAULT_PORT: u16 = 8080;
	pub const DEFAULT_FRONTEND_DIR: &'static str = "frontend/dist";

	#[must_use]
	pub fn from_env() -> Self {
		Self {
			host: dotenv_num!("BACKEND_HOST", IpAddr::V4(Ipv4Addr::LOCALHOST), IpAddr),
			port: dotenv_num!("BACKEND_PORT", Self::DEFAULT_PORT, u16),
			frontend_dir: dotenv::var("FRONTEND_DIR")
				.ok()
				.and_then(|d| (!d.is_empty()).then_some(d))
				.unwrap_or_else(|| Self::DEFAULT_FRONTEND_DIR.into())
				.into(),
		}
	}

	#[must_use]
	pub fn addr(&self) -> SocketAddr {
		SocketAddr::new(self.host, self.port)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn addr_uses_host_and_port() {
		let config = Config {
			host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
			port: 3000,
			frontend_dir: Config::DEFAULT_FRONTEND_DIR.into(),
		};

		assert_eq!(config.addr(), "0.0.0.0:3000".parse().unwrap());
	}
}
