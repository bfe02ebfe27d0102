//! Thread-safe in-memory [`SecretStore`] for local runs and tests.

// std
use std::sync::atomic::{AtomicU64, Ordering};
// self
use crate::{
	_prelude::*,
	error::SecretError,
	secrets::{SecretFuture, SecretStore},
};

/// Secret store backed by an in-process map, counting every fetch.
#[derive(Debug, Default)]
pub struct MemorySecretStore {
	secrets: RwLock<HashMap<String, String>>,
	fetches: AtomicU64,
}
impl MemorySecretStore {
	/// Adds (or replaces) a secret, builder style.
	pub fn with_secret(self, secret_id: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(secret_id, value);

		self
	}

	/// Adds (or replaces) a secret.
	pub fn insert(&self, secret_id: impl Into<String>, value: impl Into<String>) {
		self.secrets.write().insert(secret_id.into(), value.into());
	}

	/// Returns how many times [`SecretStore::fetch`] has been called, hits and misses alike.
	pub fn fetch_count(&self) -> u64 {
		self.fetches.load(Ordering::Relaxed)
	}
}
impl SecretStore for MemorySecretStore {
	fn fetch<'a>(&'a self, secret_id: &'a str) -> SecretFuture<'a, String> {
		self.fetches.fetch_add(1, Ordering::Relaxed);

		let value = self.secrets.read().get(secret_id).cloned();

		Box::pin(async move {
			value.ok_or_else(|| SecretError::NotFound { secret_id: secret_id.to_owned() })
		})
	}
}
