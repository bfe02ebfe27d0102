//! Lambda entry point for the Spotify proxy.

// std
use std::sync::Arc;
// crates.io
use lambda_http::{Error, Request, run, service_fn};
// self
use spotify_proxy::{config::ProxyConfig, handler::Proxy, secrets::SecretsManagerStore};

#[tokio::main]
async fn main() -> Result<(), Error> {
	lambda_http::tracing::init_default_subscriber();

	let config = ProxyConfig::from_env()?;
	let secrets = SecretsManagerStore::from_env().await;
	let proxy = Arc::new(Proxy::new(config, Arc::new(secrets))?);

	tracing::info!(secret_id = %proxy.config.secret_id, "spotify proxy ready");

	run(service_fn(move |request: Request| {
		let proxy = Arc::clone(&proxy);

		async move { proxy.serve(request).await }
	}))
	.await
}
