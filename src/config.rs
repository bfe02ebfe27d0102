//! Runtime configuration: secret identifier and upstream endpoints.

// self
use crate::{_prelude::*, error::ConfigError};

/// Environment variable overriding the secret identifier.
pub const SECRET_ID_ENV: &str = "SPOTIFY_SECRET_ID";
/// Secret identifier used when [`SECRET_ID_ENV`] is unset or empty.
pub const DEFAULT_SECRET_ID: &str = "spotify/portfolio";
/// Spotify accounts service token endpoint.
pub const DEFAULT_TOKEN_ENDPOINT: &str = "https://accounts.spotify.com/api/token";
/// Spotify Web API base, including the version prefix.
pub const DEFAULT_API_BASE: &str = "https://api.spotify.com/v1/";

/// Configuration consumed by [`Proxy`](crate::handler::Proxy).
///
/// Only the secret identifier is read from the environment. The endpoints default to Spotify's
/// production hosts and can be redirected programmatically (mock servers, staging).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProxyConfig {
	/// Secret store key holding the [`Credentials`](crate::auth::Credentials) document.
	pub secret_id: String,
	/// Token endpoint used for the refresh-token exchange.
	pub token_endpoint: Url,
	/// Web API base URL; always ends with `/`.
	pub api_base: Url,
}
impl ProxyConfig {
	/// Reads configuration from the process environment.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Reads configuration through `lookup`, which resolves environment variable names.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut config = Self::default_endpoints()?;

		if let Some(secret_id) = lookup(SECRET_ID_ENV).filter(|value| !value.trim().is_empty()) {
			config.secret_id = secret_id;
		}

		Ok(config)
	}

	/// Overrides the secret identifier.
	pub fn with_secret_id(mut self, secret_id: impl Into<String>) -> Self {
		self.secret_id = secret_id.into();

		self
	}

	/// Overrides the token endpoint.
	pub fn with_token_endpoint(mut self, endpoint: &str) -> Result<Self, ConfigError> {
		self.token_endpoint = parse_endpoint("token", endpoint)?;

		Ok(self)
	}

	/// Overrides the Web API base URL, appending a trailing `/` when missing.
	pub fn with_api_base(mut self, base: &str) -> Result<Self, ConfigError> {
		self.api_base = parse_api_base(base)?;

		Ok(self)
	}

	fn default_endpoints() -> Result<Self, ConfigError> {
		Ok(Self {
			secret_id: DEFAULT_SECRET_ID.to_owned(),
			token_endpoint: parse_endpoint("token", DEFAULT_TOKEN_ENDPOINT)?,
			api_base: parse_api_base(DEFAULT_API_BASE)?,
		})
	}
}

fn parse_endpoint(endpoint: &'static str, raw: &str) -> Result<Url, ConfigError> {
	Url::parse(raw).map_err(|source| ConfigError::InvalidEndpoint { endpoint, source })
}

fn parse_api_base(raw: &str) -> Result<Url, ConfigError> {
	// `Url::join` drops the last path segment unless the base ends with a slash.
	if raw.ends_with('/') {
		parse_endpoint("api", raw)
	} else {
		parse_endpoint("api", &format!("{raw}/"))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn defaults_point_at_spotify() {
		let config = ProxyConfig::from_lookup(|_| None).expect("Default config should build.");

		assert_eq!(config.secret_id, DEFAULT_SECRET_ID);
		assert_eq!(config.token_endpoint.as_str(), DEFAULT_TOKEN_ENDPOINT);
		assert_eq!(config.api_base.as_str(), DEFAULT_API_BASE);
	}

	#[test]
	fn secret_id_env_overrides_default_unless_blank() {
		let config = ProxyConfig::from_lookup(|key| {
			(key == SECRET_ID_ENV).then(|| "spotify/staging".to_owned())
		})
		.expect("Config with secret override should build.");

		assert_eq!(config.secret_id, "spotify/staging");

		let config = ProxyConfig::from_lookup(|_| Some("   ".to_owned()))
			.expect("Config with blank override should build.");

		assert_eq!(config.secret_id, DEFAULT_SECRET_ID);
	}

	#[test]
	fn api_base_gains_trailing_slash() {
		let config = ProxyConfig::from_lookup(|_| None)
			.and_then(|config| config.with_api_base("http://127.0.0.1:9000/v1"))
			.expect("API base override should parse.");

		assert_eq!(config.api_base.as_str(), "http://127.0.0.1:9000/v1/");
		assert_eq!(
			config
				.api_base
				.join("me/player/currently-playing")
				.expect("Relative join should succeed.")
				.as_str(),
			"http://127.0.0.1:9000/v1/me/player/currently-playing",
		);
	}

	#[test]
	fn invalid_token_endpoint_is_rejected() {
		let err = ProxyConfig::from_lookup(|_| None)
			.and_then(|config| config.with_token_endpoint("not a url"))
			.expect_err("Invalid token endpoint should be rejected.");

		assert!(matches!(err, ConfigError::InvalidEndpoint { endpoint: "token", .. }));
	}
}
