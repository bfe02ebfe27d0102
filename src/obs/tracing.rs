// self
use crate::{_prelude::*, obs::RouteKind};

/// Span wrapper used by the request handler.
#[derive(Clone, Debug)]
pub struct RequestSpan {
	span: tracing::Span,
}
impl RequestSpan {
	/// Creates a new span tagged with the resolved route.
	pub fn new(route: RouteKind) -> Self {
		Self { span: tracing::info_span!("spotify_proxy.request", route = route.as_str()) }
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> tracing::instrument::Instrumented<Fut>
	where
		Fut: Future,
	{
		use tracing::Instrument;

		fut.instrument(self.span.clone())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = RequestSpan::new(RouteKind::Recent);
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
