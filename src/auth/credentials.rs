//! OAuth client credentials stored in the secret store.

// self
use crate::{_prelude::*, auth::TokenSecret, error::SecretError};

/// Client credentials plus the long-lived refresh token for the proxied account.
///
/// The secret store holds these as a flat JSON document:
/// `{"client_id": "...", "client_secret": "...", "refresh_token": "..."}`. Unknown fields are
/// ignored so the same secret can carry unrelated metadata.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Credentials {
	/// OAuth 2.0 client identifier.
	pub client_id: String,
	/// OAuth 2.0 client secret.
	pub client_secret: TokenSecret,
	/// Refresh token exchanged for an access token on every request.
	pub refresh_token: TokenSecret,
}
impl Credentials {
	/// Builds credentials from their parts.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		refresh_token: impl Into<String>,
	) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: TokenSecret::new(client_secret),
			refresh_token: TokenSecret::new(refresh_token),
		}
	}

	/// Parses the secret store's JSON payload for `secret_id`.
	pub fn from_secret_json(secret_id: &str, raw: &str) -> Result<Self, SecretError> {
		let de = &mut serde_json::Deserializer::from_str(raw);

		serde_path_to_error::deserialize(de)
			.map_err(|source| SecretError::Malformed { secret_id: secret_id.to_owned(), source })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn parses_secret_document_and_ignores_extra_fields() {
		let credentials = Credentials::from_secret_json(
			"spotify/portfolio",
			r#"{"client_id":"id","client_secret":"secret","refresh_token":"refresh","note":"x"}"#,
		)
		.expect("Well-formed secret documents should parse.");

		assert_eq!(credentials, Credentials::new("id", "secret", "refresh"));
	}

	#[test]
	fn missing_field_reports_secret_and_path() {
		let err = Credentials::from_secret_json(
			"spotify/portfolio",
			r#"{"client_id":"id","client_secret":"secret"}"#,
		)
		.expect_err("A secret without refresh_token should be rejected.");
		let SecretError::Malformed { secret_id, source } = err else {
			panic!("Expected a malformed secret error.");
		};

		assert_eq!(secret_id, "spotify/portfolio");
		assert!(source.inner().to_string().contains("refresh_token"));
	}

	#[test]
	fn debug_output_redacts_secrets() {
		let credentials = Credentials::new("visible-id", "hidden-secret", "hidden-refresh");
		let rendered = format!("{credentials:?}");

		assert!(rendered.contains("visible-id"));
		assert!(!rendered.contains("hidden-secret"));
		assert!(!rendered.contains("hidden-refresh"));
	}
}
