//! Request handler: credentials, token refresh, routing, and response shaping.
//!
//! [`Proxy::handle`] runs the same pipeline for every request. Credentials come from the
//! once-initialized [`CredentialCache`]; the refresh-token exchange runs exactly once per
//! request, before routing, so even a `404` costs one token call. Any failure along the way is
//! logged and collapsed into `500 server_error`.

mod metrics;
pub mod response;

pub use metrics::ProxyMetrics;
pub use response::ProxyResponse;

// crates.io
use lambda_http::{Body, Request, Response, http::Method};
// self
use crate::{
	_prelude::*,
	config::ProxyConfig,
	http::ReqwestHttpClient,
	oauth::TokenRefresher,
	obs::{self, RequestOutcome, RequestSpan, RouteKind},
	player::{Payload, PlayerClient, RECENT_LIMIT},
	secrets::{CredentialCache, SecretStore},
};

const NOW_PLAYING_SUFFIX: &str = "/nowplaying";
const RECENT_SUFFIX: &str = "/recent";

/// Process-wide proxy state shared by every invocation.
///
/// Build one per process and reuse it; the credentials cache and the pooled HTTP client live
/// here.
pub struct Proxy {
	/// Runtime configuration.
	pub config: ProxyConfig,
	/// Secret store the credentials are read from.
	pub secrets: Arc<dyn SecretStore>,
	/// Shared counters for handled requests.
	pub metrics: Arc<ProxyMetrics>,
	credentials: CredentialCache,
	refresher: TokenRefresher,
	player: PlayerClient,
}
impl Proxy {
	/// Creates a proxy with the default HTTP client.
	pub fn new(config: ProxyConfig, secrets: Arc<dyn SecretStore>) -> Result<Self> {
		let http_client = ReqwestHttpClient::new()?;

		Ok(Self::with_http_client(config, secrets, http_client))
	}

	/// Creates a proxy that reuses the caller-provided HTTP client.
	pub fn with_http_client(
		config: ProxyConfig,
		secrets: Arc<dyn SecretStore>,
		http_client: ReqwestHttpClient,
	) -> Self {
		let refresher = TokenRefresher::new(&config.token_endpoint, http_client.clone());
		let player = PlayerClient::new(config.api_base.clone(), http_client);

		Self {
			config,
			secrets,
			metrics: Default::default(),
			credentials: Default::default(),
			refresher,
			player,
		}
	}

	/// Lambda entry point: handles `request` and renders the HTTP response.
	pub async fn serve(&self, request: Request) -> Result<Response<Body>, lambda_http::Error> {
		let response = self.handle(request.method(), request.uri().path()).await;

		Ok(response.into_response()?)
	}

	/// Handles one request, never failing: errors become `500 server_error`.
	pub async fn handle(&self, method: &Method, path: &str) -> ProxyResponse {
		let route = route_for(method, path);
		let span = RequestSpan::new(route);

		self.metrics.record_request();

		let (response, outcome) = span
			.instrument(async {
				match self.dispatch(route).await {
					Ok(result) => result,
					Err(err) => {
						self.metrics.record_failure();
						tracing::error!(error = %err, detail = ?err, "request failed");

						(ProxyResponse::server_error(), RequestOutcome::Failure)
					},
				}
			})
			.await;

		obs::record_request_outcome(route, outcome);

		response
	}

	async fn dispatch(&self, route: RouteKind) -> Result<(ProxyResponse, RequestOutcome)> {
		let credentials =
			self.credentials.resolve(self.secrets.as_ref(), &self.config.secret_id).await?;

		self.metrics.record_token_refresh();

		let token = self.refresher.refresh(credentials).await?;
		let result = match route {
			RouteKind::NowPlaying => match self.player.currently_playing(&token).await? {
				Payload::Content(body) => (ProxyResponse::ok(body), RequestOutcome::Content),
				Payload::Empty => (ProxyResponse::nothing_playing(), RequestOutcome::Empty),
			},
			RouteKind::Recent => match self.player.recently_played(&token, RECENT_LIMIT).await? {
				Payload::Content(body) => (ProxyResponse::ok(body), RequestOutcome::Content),
				Payload::Empty => (ProxyResponse::no_recent_items(), RequestOutcome::Empty),
			},
			RouteKind::NotFound => (ProxyResponse::not_found(), RequestOutcome::NotFound),
		};

		Ok(result)
	}
}
impl Debug for Proxy {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Proxy")
			.field("config", &self.config)
			.field("credentials_cached", &self.credentials.get().is_some())
			.finish()
	}
}

/// Only `GET` is served; matching is a case-insensitive path suffix check.
fn route_for(method: &Method, path: &str) -> RouteKind {
	if *method != Method::GET {
		return RouteKind::NotFound;
	}

	if ends_with_ignore_case(path, NOW_PLAYING_SUFFIX) {
		RouteKind::NowPlaying
	} else if ends_with_ignore_case(path, RECENT_SUFFIX) {
		RouteKind::Recent
	} else {
		RouteKind::NotFound
	}
}

fn ends_with_ignore_case(path: &str, suffix: &str) -> bool {
	path.len() >= suffix.len()
		&& path
			.get(path.len() - suffix.len()..)
			.is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn routes_match_suffix_case_insensitively() {
		assert_eq!(route_for(&Method::GET, "/api/nowplaying"), RouteKind::NowPlaying);
		assert_eq!(route_for(&Method::GET, "/prod/spotify/NowPlaying"), RouteKind::NowPlaying);
		assert_eq!(route_for(&Method::GET, "/RECENT"), RouteKind::Recent);
		assert_eq!(route_for(&Method::GET, "/recent/"), RouteKind::NotFound);
		assert_eq!(route_for(&Method::GET, "/nowplaying/extra"), RouteKind::NotFound);
		assert_eq!(route_for(&Method::GET, ""), RouteKind::NotFound);
	}

	#[test]
	fn non_get_methods_are_not_routed() {
		assert_eq!(route_for(&Method::POST, "/nowplaying"), RouteKind::NotFound);
		assert_eq!(route_for(&Method::OPTIONS, "/recent"), RouteKind::NotFound);
	}

	#[test]
	fn suffix_check_tolerates_multibyte_paths() {
		assert!(!ends_with_ignore_case("/é", "/recent"));
		assert!(!ends_with_ignore_case("/ééééé", "/recent"));
		assert!(ends_with_ignore_case("/é/recent", "/recent"));
	}
}
