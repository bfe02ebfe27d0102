//! Observability helpers for proxied requests.
//!
//! - Every request runs inside a `spotify_proxy.request` span carrying the `route` field.
//! - Enable `metrics` to increment the `spotify_proxy_request_total` counter for every request,
//!   labeled by `route` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

/// Routes served by the proxy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteKind {
	/// `…/nowplaying`.
	NowPlaying,
	/// `…/recent`.
	Recent,
	/// Anything else.
	NotFound,
}
impl RouteKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RouteKind::NowPlaying => "now_playing",
			RouteKind::Recent => "recent",
			RouteKind::NotFound => "not_found",
		}
	}
}

/// Outcome labels recorded for each request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Upstream content was passed through.
	Content,
	/// Upstream had nothing to report and the empty shape was returned.
	Empty,
	/// No route matched.
	NotFound,
	/// A failure was collapsed into `500 server_error`.
	Failure,
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Content => "content",
			RequestOutcome::Empty => "empty",
			RequestOutcome::NotFound => "not_found",
			RequestOutcome::Failure => "failure",
		}
	}
}
