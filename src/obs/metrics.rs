// self
use crate::obs::{RequestOutcome, RouteKind};

/// Records a request outcome via the global metrics recorder (when enabled).
pub fn record_request_outcome(route: RouteKind, outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"spotify_proxy_request_total",
			"route" => route.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (route, outcome);
	}
}
