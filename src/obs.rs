//! Optional observability helpers for grant flows and authorized calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit spans named `podio_client.flow` (fields `flow`, `stage`) around
//!   grant exchanges and `podio_client.request` (fields `method`, `path`) around authorized
//!   calls.
//! - Enable `metrics` to increment `podio_client_flow_total{flow, outcome}` and
//!   `podio_client_request_total{method, outcome}` for every attempt/success/failure.
//!
//! With both features off every helper here compiles to a no-op.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a flow or request.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
