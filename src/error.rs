//! Client-level error types shared by the transport, grant flows, and resource modules.
//!
//! Upstream failures surface as [`ApiError`], a single error type parameterized by
//! [`ErrorKind`]. Callers branch on the kind; every kind carries the same fields. Local
//! faults (bad paths, unserializable bodies, request construction) are reported through
//! [`ConfigError`] and never disguised as upstream errors.

// crates.io
use serde::{Deserializer, de::DeserializeOwned};
// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Upstream API rejected the call, or the call never reached it.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// Local configuration or request-construction problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// A successful response body did not match the declared payload shape.
	#[error("Response body could not be decoded (HTTP {status}).")]
	Decode {
		/// Structured parsing failure, including the JSON path that failed.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response that failed to decode.
		status: u16,
	},
}
impl Error {
	/// Returns the upstream error, if this failure came from the API or the network.
	pub fn as_api(&self) -> Option<&ApiError> {
		match self {
			Self::Api(e) => Some(e),
			_ => None,
		}
	}

	/// Returns the upstream error kind, if any.
	pub fn kind(&self) -> Option<ErrorKind> {
		self.as_api().map(|e| e.kind)
	}
}

/// Configuration and request-construction failures raised locally.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// Base URL and path do not form a valid URL.
	#[error("Request path `{path}` does not form a valid URL.")]
	InvalidUrl {
		/// Offending request path.
		path: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// A header value contains characters HTTP does not allow.
	#[error("Header `{name}` has an invalid value.")]
	InvalidHeader {
		/// Header name.
		name: &'static str,
		/// Underlying validation failure.
		#[source]
		source: oauth2::http::header::InvalidHeaderValue,
	},
	/// Request body could not be serialized to JSON.
	#[error("Request body could not be serialized.")]
	SerializeBody(#[source] serde_json::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Category of an upstream failure, derived from the HTTP status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
	/// 400.
	BadRequest,
	/// 401, typically an invalid or expired access token.
	Authorization,
	/// 403 and 404; the API reports missing objects as forbidden.
	Forbidden,
	/// 409.
	Conflict,
	/// 410.
	Gone,
	/// 420, the API's rate limit signal.
	RateLimit,
	/// 500.
	ServerError,
	/// 502, 503 and 504.
	Unavailable,
	/// Anything else, including network failures (status 0).
	Generic,
}
impl ErrorKind {
	/// Maps a status code to its error kind. Total: unknown codes yield [`ErrorKind::Generic`].
	pub const fn from_status(status: u16) -> Self {
		match status {
			400 => Self::BadRequest,
			401 => Self::Authorization,
			403 | 404 => Self::Forbidden,
			409 => Self::Conflict,
			410 => Self::Gone,
			420 => Self::RateLimit,
			500 => Self::ServerError,
			502..=504 => Self::Unavailable,
			_ => Self::Generic,
		}
	}

	/// Returns a stable label suitable for logs or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::BadRequest => "bad_request",
			Self::Authorization => "authorization",
			Self::Forbidden => "forbidden",
			Self::Conflict => "conflict",
			Self::Gone => "gone",
			Self::RateLimit => "rate_limit",
			Self::ServerError => "server_error",
			Self::Unavailable => "unavailable",
			Self::Generic => "generic",
		}
	}
}
impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Typed upstream failure returned for every rejected call.
#[derive(Debug, ThisError)]
#[error("API call failed with a {kind} error (status {status_code}): {message}")]
pub struct ApiError {
	/// Error category derived from `status_code`.
	pub kind: ErrorKind,
	/// Upstream `error_description`, or the transport's own failure message.
	pub message: String,
	/// Upstream error envelope, when the response carried one.
	pub response: Option<UpstreamError>,
	/// HTTP status code; `0` when no HTTP response was received.
	pub status_code: u16,
	/// Retry-After hint from upstream, if supplied.
	pub retry_after: Option<Duration>,
	/// Underlying transport failure for network errors.
	#[source]
	pub source: Option<BoxError>,
}
impl ApiError {
	/// Builds an error from a non-success HTTP response.
	///
	/// The body is parsed as the upstream error envelope when possible; the message prefers
	/// its `error_description` and falls back to a generic status message.
	pub fn from_response(status: u16, body: &[u8], retry_after: Option<Duration>) -> Self {
		let response = serde_json::from_slice::<UpstreamError>(body).ok();
		let message = response
			.as_ref()
			.and_then(|r| r.error_description.clone())
			.unwrap_or_else(|| format!("Request failed with status code {status}"));

		Self {
			kind: ErrorKind::from_status(status),
			message,
			response,
			status_code: status,
			retry_after,
			source: None,
		}
	}

	/// Builds an error for a call that produced no HTTP response (DNS, TCP, TLS, I/O).
	pub fn network(message: impl Into<String>, source: Option<BoxError>) -> Self {
		Self {
			kind: ErrorKind::from_status(0),
			message: message.into(),
			response: None,
			status_code: 0,
			retry_after: None,
			source,
		}
	}

	/// Returns `true` when no HTTP response was received.
	pub fn is_network_failure(&self) -> bool {
		self.status_code == 0
	}
}

/// Error envelope returned by the API alongside failing responses.
///
/// Each field is read on its own: a field with an unexpected type becomes `None` instead of
/// discarding the whole envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpstreamError {
	/// Machine-readable error code (e.g. `conflict`, `invalid_grant`).
	#[serde(default, deserialize_with = "lenient")]
	pub error: Option<String>,
	/// Human-readable description.
	#[serde(default, deserialize_with = "lenient")]
	pub error_description: Option<String>,
	/// Parameters referenced by the description.
	#[serde(default, deserialize_with = "lenient")]
	pub error_parameters: Option<Value>,
	/// Additional structured detail.
	#[serde(default, deserialize_with = "lenient")]
	pub error_detail: Option<Value>,
	/// Whether the error should be shown to end users.
	#[serde(default, deserialize_with = "lenient")]
	pub error_propagate: Option<bool>,
	/// Echo of the request the API rejected.
	#[serde(default, deserialize_with = "lenient")]
	pub request: Option<UpstreamRequest>,
}

/// Request echo embedded in [`UpstreamError`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamRequest {
	/// Requested URL.
	#[serde(default, deserialize_with = "lenient")]
	pub url: Option<String>,
	/// Raw query string.
	#[serde(default, deserialize_with = "lenient")]
	pub query_string: Option<String>,
	/// HTTP method.
	#[serde(default, deserialize_with = "lenient")]
	pub method: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned,
{
	let value = Value::deserialize(deserializer)?;

	Ok(serde_json::from_value(value).ok())
}
