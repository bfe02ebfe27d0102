//! Bearer-authenticated reads against the Web API player endpoints.

// crates.io
use reqwest::StatusCode;
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	error::{ConfigError, TransportError, UpstreamError},
	http::ReqwestHttpClient,
};

/// Number of items requested from the recently-played endpoint.
pub const RECENT_LIMIT: u8 = 8;

const CURRENTLY_PLAYING_PATH: &str = "me/player/currently-playing";
const RECENTLY_PLAYED_PATH: &str = "me/player/recently-played";

/// Outcome of a Web API read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
	/// Upstream JSON body, passed through verbatim.
	Content(Value),
	/// Upstream answered `204 No Content`.
	Empty,
}

/// Client for the player endpoints rooted at the configured API base.
#[derive(Clone, Debug)]
pub struct PlayerClient {
	http_client: ReqwestHttpClient,
	api_base: Url,
}
impl PlayerClient {
	/// Creates a client for `api_base`, which must end with `/`.
	pub fn new(api_base: Url, http_client: ReqwestHttpClient) -> Self {
		Self { http_client, api_base }
	}

	/// Reads the track currently playing, if any.
	pub async fn currently_playing(&self, token: &AccessToken) -> Result<Payload> {
		let url = self.endpoint(CURRENTLY_PLAYING_PATH)?;

		self.get_json(token, url).await
	}

	/// Reads up to `limit` recently played tracks.
	pub async fn recently_played(&self, token: &AccessToken, limit: u8) -> Result<Payload> {
		let mut url = self.endpoint(RECENTLY_PLAYED_PATH)?;

		url.query_pairs_mut().append_pair("limit", &limit.to_string());

		self.get_json(token, url).await
	}

	/// Performs a bearer-authenticated GET and decodes the body as JSON.
	///
	/// `204 No Content` maps to [`Payload::Empty`]. Any other status yields the parsed body;
	/// non-success statuses are logged but still passed through.
	pub async fn get_json(&self, token: &AccessToken, url: Url) -> Result<Payload> {
		let response = self
			.http_client
			.get(url.clone())
			.bearer_auth(token.bearer())
			.send()
			.await
			.map_err(TransportError::from)?;
		let status = response.status();

		if status == StatusCode::NO_CONTENT {
			return Ok(Payload::Empty);
		}
		if !status.is_success() {
			tracing::warn!(
				endpoint = url.path(),
				status = status.as_u16(),
				"web api returned an error status"
			);
		}

		let body = response.bytes().await.map_err(TransportError::from)?;
		let value = serde_json::from_slice(&body).map_err(|source| UpstreamError::MalformedBody {
			endpoint: url.path().to_owned(),
			status: status.as_u16(),
			source,
		})?;

		Ok(Payload::Content(value))
	}

	fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
		self.api_base
			.join(path)
			.map_err(|source| ConfigError::InvalidEndpoint { endpoint: "api", source })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn client() -> PlayerClient {
		let base = Url::parse("https://api.spotify.com/v1/").expect("API base should parse.");

		PlayerClient::new(base, ReqwestHttpClient::with_client(ReqwestClient::new()))
	}

	#[test]
	fn endpoints_keep_version_prefix() {
		let client = client();

		assert_eq!(
			client.endpoint(CURRENTLY_PLAYING_PATH).expect("Endpoint should join.").as_str(),
			"https://api.spotify.com/v1/me/player/currently-playing",
		);
		assert_eq!(
			client.endpoint(RECENTLY_PLAYED_PATH).expect("Endpoint should join.").as_str(),
			"https://api.spotify.com/v1/me/player/recently-played",
		);
	}
}
