//! Secret store contract, built-in stores, and the process-wide credentials cache.

pub mod aws;
pub mod memory;

pub use aws::SecretsManagerStore;
pub use memory::MemorySecretStore;

// crates.io
use async_lock::OnceCell;
// self
use crate::{_prelude::*, auth::Credentials, error::SecretError};

/// Boxed future returned by [`SecretStore`] implementations.
pub type SecretFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, SecretError>> + 'a + Send>>;

/// Read-only secret store holding the credentials document.
pub trait SecretStore
where
	Self: Send + Sync,
{
	/// Returns the string payload stored under `secret_id`.
	fn fetch<'a>(&'a self, secret_id: &'a str) -> SecretFuture<'a, String>;
}

/// Once-initialized holder for the credentials.
///
/// The first successful fetch is kept for the lifetime of the cache and never re-read.
/// Concurrent first-time callers wait on the same fetch instead of racing. A failed fetch
/// leaves the cache empty so a later call tries again.
#[derive(Debug, Default)]
pub struct CredentialCache(OnceCell<Credentials>);
impl CredentialCache {
	/// Returns the cached credentials, fetching and parsing them from `store` on first use.
	pub async fn resolve(
		&self,
		store: &dyn SecretStore,
		secret_id: &str,
	) -> Result<&Credentials, SecretError> {
		self.0
			.get_or_try_init(|| async {
				tracing::debug!(secret_id, "fetching credentials from the secret store");

				let raw = store.fetch(secret_id).await?;

				Credentials::from_secret_json(secret_id, &raw)
			})
			.await
	}

	/// Returns the credentials if they have already been resolved.
	pub fn get(&self) -> Option<&Credentials> {
		self.0.get()
	}
}
