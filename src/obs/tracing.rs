// crates.io
use oauth2::http::Method;
// self
use crate::{_prelude::*, auth::GrantType};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// Span wrapper for grant exchanges and authorized calls.
///
/// Span fields never include tokens or credentials.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Span for a grant exchange, tagged with the grant and the calling operation.
	pub fn flow(grant: GrantType, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("podio_client.flow", flow = grant.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (grant, stage);

			Self {}
		}
	}

	/// Span for an authorized call.
	pub fn request(method: &Method, path: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("podio_client.request", method = method.as_str(), path);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (method, path);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[tokio::test]
	async fn instrument_passes_output_through() {
		let span = CallSpan::flow(GrantType::RefreshToken, "instrument_passes_output_through");

		assert_eq!(span.instrument(async { 42 }).await, 42);

		let span = CallSpan::request(&Method::DELETE, "/item/1");

		assert_eq!(span.instrument(async { "done" }).await, "done");
	}
}
