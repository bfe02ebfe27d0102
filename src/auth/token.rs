//! Access tokens obtained from the refresh-token exchange.

// self
use crate::{_prelude::*, auth::TokenSecret};

/// Bearer access token valid for a single proxied request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessToken {
	/// Bearer credential sent to the Web API.
	pub secret: TokenSecret,
	/// Expiry reported by the token endpoint, when present.
	pub expires_at: Option<OffsetDateTime>,
}
impl AccessToken {
	/// Wraps a bearer value with no known expiry.
	pub fn new(secret: impl Into<String>) -> Self {
		Self { secret: TokenSecret::new(secret), expires_at: None }
	}

	/// Records the expiry relative to `issued_at`.
	pub fn with_expires_in(mut self, issued_at: OffsetDateTime, expires_in: Duration) -> Self {
		self.expires_at = issued_at.checked_add(expires_in);

		self
	}

	/// Returns the bearer value. Callers must avoid logging this string.
	pub fn bearer(&self) -> &str {
		self.secret.expose()
	}
}
