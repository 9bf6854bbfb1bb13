//! Transport primitive: one outbound call against the API origin.
//!
//! [`Transport::call`] resolves a relative path against the base URL, sends the request
//! through the configured [`HttpClient`], and either decodes the response into an
//! [`Envelope`] or classifies the failure. Non-2xx responses become an
//! [`ApiError`](crate::error::ApiError) whose kind comes from
//! [`ErrorKind::from_status`](crate::error::ErrorKind::from_status); failures with no
//! response at all go through the [`TransportErrorMapper`]. The transport does not add
//! authorization; see [`Api`](crate::api::Api) for that.

pub mod envelope;
pub mod mapper;
pub mod request;

pub use envelope::*;
pub use mapper::*;
pub use request::*;

// crates.io
use oauth2::http::{HeaderMap, header::RETRY_AFTER};
use serde::de::DeserializeOwned;
use time::format_description::well_known::Rfc2822;
// self
use crate::{_prelude::*, error::ApiError, error::ConfigError, http::HttpClient};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Fixed API origin used unless overridden with [`Transport::with_base_url`].
pub const BASE_URL: &str = "https://api.podio.com";

#[cfg(feature = "reqwest")]
/// Transport specialized for the crate's default reqwest stack.
pub type ReqwestTransport = Transport<ReqwestHttpClient, ReqwestTransportErrorMapper>;

/// Sends [`ApiRequest`]s to the API origin and normalizes the outcome.
pub struct Transport<C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// HTTP client used for every outbound request.
	pub http_client: Arc<C>,
	/// Mapper applied to transport-layer errors before surfacing them to callers.
	pub error_mapper: Arc<M>,
	base_url: String,
}
impl<C, M> Transport<C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Creates a transport against [`BASE_URL`].
	pub fn new(http_client: impl Into<Arc<C>>, error_mapper: impl Into<Arc<M>>) -> Self {
		Self {
			http_client: http_client.into(),
			error_mapper: error_mapper.into(),
			base_url: BASE_URL.to_owned(),
		}
	}

	/// Points the transport at another origin (mock servers, proxies).
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();

		self
	}

	/// Origin every request path is resolved against.
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Resolves `path` and `query` into an absolute URL.
	pub fn url_for(&self, path: &str, query: &[(String, String)]) -> Result<Url> {
		let base = self.base_url.trim_end_matches('/');
		let joined = if path.starts_with('/') {
			format!("{base}{path}")
		} else {
			format!("{base}/{path}")
		};
		let mut url = Url::parse(&joined)
			.map_err(|source| ConfigError::InvalidUrl { path: path.to_owned(), source })?;

		if !query.is_empty() {
			let mut pairs = url.query_pairs_mut();

			for (key, value) in query {
				pairs.append_pair(key, value);
			}
		}

		Ok(url)
	}

	/// Performs one call and decodes a successful body into `T`.
	pub async fn call<T>(&self, request: ApiRequest) -> Result<Envelope<T>>
	where
		T: DeserializeOwned,
	{
		let url = self.url_for(&request.path, &request.query)?;
		let summary = RequestSummary { method: request.method.clone(), url: url.clone() };
		let http_request = request.into_http(&url)?;
		let response = self
			.http_client
			.execute(http_request)
			.await
			.map_err(|err| self.error_mapper.map_transport_error(err))?;
		let status = response.status();

		if !status.is_success() {
			let retry_after = parse_retry_after(response.headers());

			return Err(
				ApiError::from_response(status.as_u16(), response.body(), retry_after).into()
			);
		}

		Envelope::decode(summary, response)
	}
}
#[cfg(feature = "reqwest")]
impl Transport<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	/// Creates a transport backed by a default reqwest client.
	pub fn reqwest() -> Self {
		Self::new(ReqwestHttpClient::default(), ReqwestTransportErrorMapper)
	}
}
impl<C, M> Clone for Transport<C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn clone(&self) -> Self {
		Self {
			http_client: self.http_client.clone(),
			error_mapper: self.error_mapper.clone(),
			base_url: self.base_url.clone(),
		}
	}
}
impl<C, M> Debug for Transport<C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Transport").field("base_url", &self.base_url).finish()
	}
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u64>() {
		return Some(Duration::seconds(i64::try_from(secs).ok()?));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// crates.io
	use oauth2::http::HeaderValue;
	// self
	use super::*;

	#[test]
	fn url_for_joins_base_path_and_query() {
		let transport = ReqwestTransport::reqwest();
		let query =
			[("silent".to_owned(), "false".to_owned()), ("hook".to_owned(), "true".to_owned())];
		let url = transport.url_for("/task/42", &query).expect("Task URL should resolve.");

		assert_eq!(url.as_str(), "https://api.podio.com/task/42?silent=false&hook=true");

		let url = transport.url_for("oauth/token", &[]).expect("Relative path should resolve.");

		assert_eq!(url.as_str(), "https://api.podio.com/oauth/token");
	}

	#[test]
	fn url_for_respects_base_override() {
		let transport = ReqwestTransport::reqwest().with_base_url("http://127.0.0.1:8080/");
		let url = transport.url_for("/item/1", &[]).expect("Item URL should resolve.");

		assert_eq!(transport.base_url(), "http://127.0.0.1:8080/");
		assert_eq!(url.as_str(), "http://127.0.0.1:8080/item/1");
	}

	#[test]
	fn url_for_rejects_invalid_origin() {
		let transport = ReqwestTransport::reqwest().with_base_url("not a url");
		let err = transport.url_for("/item/1", &[]).expect_err("Invalid origin should fail.");

		assert!(matches!(err, Error::Config(ConfigError::InvalidUrl { .. })));
	}

	#[test]
	fn retry_after_accepts_seconds() {
		let mut headers = HeaderMap::new();

		assert_eq!(parse_retry_after(&headers), None);

		headers.insert(RETRY_AFTER, HeaderValue::from_static("30"));

		assert_eq!(parse_retry_after(&headers), Some(Duration::seconds(30)));

		headers.insert(RETRY_AFTER, HeaderValue::from_static("soon"));

		assert_eq!(parse_retry_after(&headers), None);
	}
}
