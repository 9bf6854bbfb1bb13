//! Pluggable HTTP seam used by the transport.
//!
//! [`HttpClient`] is the crate's only dependency on an HTTP stack. The transport hands
//! it fully-built [`HttpRequest`] values and expects the raw [`HttpResponse`] back,
//! whatever its status. Implementations must not reject non-2xx responses themselves;
//! status classification happens in the transport so every client gets the same error
//! kinds. Failures to obtain a response at all are reported through [`HttpClientError`]
//! and translated by a [`TransportErrorMapper`](crate::transport::TransportErrorMapper).

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
pub use oauth2::{HttpClientError, HttpRequest, HttpResponse};
// self
use crate::_prelude::*;

/// Boxed future returned by [`HttpClient::execute`].
pub type HttpFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, HttpClientError<E>>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing API calls.
///
/// Implementations must be `Send + Sync + 'static` so one client can back many sessions,
/// and the returned future must be `Send` so callers can spawn API calls onto
/// multi-threaded executors.
pub trait HttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and resolves with the response, regardless of its status code.
	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// The default client has no timeout; wrap a configured [`ReqwestClient`] with
/// [`ReqwestHttpClient::with_client`] to add one.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let request: reqwest::Request = request.try_into().map_err(reqwest_failure)?;
			let response = client.execute(request).await.map_err(reqwest_failure)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut response_new =
				HttpResponse::new(response.bytes().await.map_err(reqwest_failure)?.to_vec());

			*response_new.status_mut() = status;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}

#[cfg(feature = "reqwest")]
fn reqwest_failure(e: ReqwestError) -> HttpClientError<ReqwestError> {
	HttpClientError::Reqwest(Box::new(e))
}
