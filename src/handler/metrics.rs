// std
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters for proxy activity.
#[derive(Debug, Default)]
pub struct ProxyMetrics {
	requests: AtomicU64,
	token_refreshes: AtomicU64,
	failures: AtomicU64,
}
impl ProxyMetrics {
	/// Returns the total number of handled requests.
	pub fn requests(&self) -> u64 {
		self.requests.load(Ordering::Relaxed)
	}

	/// Returns the number of refresh-token exchanges attempted.
	pub fn token_refreshes(&self) -> u64 {
		self.token_refreshes.load(Ordering::Relaxed)
	}

	/// Returns the number of requests answered with `500 server_error`.
	pub fn failures(&self) -> u64 {
		self.failures.load(Ordering::Relaxed)
	}

	pub(crate) fn record_request(&self) {
		self.requests.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_token_refresh(&self) {
		self.token_refreshes.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_failure(&self) {
		self.failures.fetch_add(1, Ordering::Relaxed);
	}
}
