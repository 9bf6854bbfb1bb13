// crates.io
use oauth2::http::Method;
// self
use crate::{auth::GrantType, obs::CallOutcome};

/// Records a grant flow outcome via the global metrics recorder (when enabled).
pub fn record_flow_outcome(grant: GrantType, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"podio_client_flow_total",
			"flow" => grant.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (grant, outcome);
	}
}

/// Records an authorized request outcome via the global metrics recorder (when enabled).
pub fn record_request_outcome(method: &Method, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"podio_client_request_total",
			"method" => method.as_str().to_owned(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (method, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn recorders_noop_without_metrics() {
		record_flow_outcome(GrantType::App, CallOutcome::Failure);
		record_request_outcome(&Method::GET, CallOutcome::Attempt);
	}
}
