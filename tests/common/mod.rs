//! Shared fixtures for proxy integration tests.

#![allow(dead_code)]

// std
use std::{sync::Arc, time::Duration};
// crates.io
use httpmock::prelude::*;
// self
use spotify_proxy::{
	config::ProxyConfig,
	handler::Proxy,
	http::ReqwestHttpClient,
	secrets::{MemorySecretStore, SecretFuture, SecretStore},
};

pub const SECRET_ID: &str = "spotify/test";
pub const CLIENT_ID: &str = "client-test";
pub const CLIENT_SECRET: &str = "secret-test";
pub const REFRESH_TOKEN: &str = "refresh-test";
pub const ACCESS_TOKEN: &str = "access-test";

pub fn secret_json() -> String {
	format!(
		"{{\"client_id\":\"{CLIENT_ID}\",\"client_secret\":\"{CLIENT_SECRET}\",\"refresh_token\":\"{REFRESH_TOKEN}\"}}"
	)
}

pub fn test_config(server: &MockServer) -> ProxyConfig {
	ProxyConfig::from_lookup(|_| None)
		.expect("Default config should build.")
		.with_secret_id(SECRET_ID)
		.with_token_endpoint(&server.url("/api/token"))
		.expect("Mock token endpoint should parse.")
		.with_api_base(&server.url("/v1"))
		.expect("Mock API base should parse.")
}

/// Builds a proxy whose token endpoint and Web API both point at `server`, with the test
/// credentials stored under [`SECRET_ID`].
pub fn build_test_proxy(server: &MockServer) -> (Proxy, Arc<MemorySecretStore>) {
	let store = Arc::new(MemorySecretStore::default().with_secret(SECRET_ID, secret_json()));

	(build_proxy_with_store(server, store.clone()), store)
}

pub fn build_proxy_with_store<S>(server: &MockServer, store: Arc<S>) -> Proxy
where
	S: 'static + SecretStore,
{
	let secrets: Arc<dyn SecretStore> = store;
	let http_client = ReqwestHttpClient::new().expect("Default HTTP client should build.");

	Proxy::with_http_client(test_config(server), secrets, http_client)
}

pub async fn mock_token_success(server: &MockServer) -> httpmock::Mock<'_> {
	server
		.mock_async(|when, then| {
			when.method(POST).path("/api/token");
			then.status(200).header("content-type", "application/json").body(format!(
				"{{\"access_token\":\"{ACCESS_TOKEN}\",\"token_type\":\"Bearer\",\"expires_in\":3600,\"scope\":\"user-read-currently-playing user-read-recently-played\"}}"
			));
		})
		.await
}

/// Secret store that holds every fetch open for `delay` before answering from `inner`.
#[derive(Debug)]
pub struct SlowSecretStore {
	pub inner: MemorySecretStore,
	pub delay: Duration,
}
impl SlowSecretStore {
	pub fn new(delay: Duration) -> Self {
		Self { inner: MemorySecretStore::default().with_secret(SECRET_ID, secret_json()), delay }
	}
}
impl SecretStore for SlowSecretStore {
	fn fetch<'a>(&'a self, secret_id: &'a str) -> SecretFuture<'a, String> {
		Box::pin(async move {
			tokio::time::sleep(self.delay).await;

			self.inner.fetch(secret_id).await
		})
	}
}
