//! Translation of transport failures (no HTTP response) into client errors.

// self
use crate::{
	_prelude::*,
	error::{ApiError, ConfigError},
	http::HttpClientError,
};

/// Maps HTTP transport failures into client [`Error`] values.
///
/// Network-level failures become an [`ApiError`] with status `0` and the transport's own
/// message. Failures that indicate a local bug (request construction) must map to
/// [`ConfigError`] so they are never reported as upstream errors.
pub trait TransportErrorMapper<E>
where
	Self: 'static + Send + Sync,
	E: 'static + Send + Sync + StdError,
{
	/// Converts an [`HttpClientError`] emitted by the transport into a client error.
	fn map_transport_error(&self, error: HttpClientError<E>) -> Error;
}

/// Default mapper for reqwest-backed transports.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransportErrorMapper;
#[cfg(feature = "reqwest")]
impl TransportErrorMapper<ReqwestError> for ReqwestTransportErrorMapper {
	fn map_transport_error(&self, err: HttpClientError<ReqwestError>) -> Error {
		match err {
			HttpClientError::Reqwest(inner) => map_reqwest_error(*inner),
			other => map_common_error(other),
		}
	}
}

/// Wraps a transport failure that produced no HTTP response as a status-0 [`ApiError`],
/// using the failure's own message.
pub fn network_failure(src: impl 'static + Send + Sync + StdError) -> Error {
	ApiError::network(src.to_string(), Some(Box::new(src))).into()
}

/// Handles the transport-independent [`HttpClientError`] variants.
///
/// Custom mappers can delegate here after handling their own `Reqwest` variant.
pub fn map_common_error<E>(err: HttpClientError<E>) -> Error
where
	E: 'static + Send + Sync + StdError,
{
	match err {
		HttpClientError::Reqwest(inner) => network_failure(*inner),
		HttpClientError::Http(inner) => ConfigError::from(inner).into(),
		HttpClientError::Io(inner) => network_failure(inner),
		HttpClientError::Other(message) => ApiError::network(message, None).into(),
		_ => ApiError::network("HTTP client error occurred while calling the API.", None).into(),
	}
}

#[cfg(feature = "reqwest")]
fn map_reqwest_error(err: ReqwestError) -> Error {
	if err.is_builder() {
		return ConfigError::from(err).into();
	}

	network_failure(err)
}

#[cfg(test)]
mod tests {
	// std
	use std::io::{Error as IoError, ErrorKind as IoErrorKind};
	// self
	use super::*;
	use crate::error::ErrorKind;

	#[derive(Debug, ThisError)]
	#[error("dns lookup failed")]
	struct DnsFailure;

	#[test]
	fn network_failures_keep_the_transport_message() {
		let err = map_common_error(HttpClientError::Reqwest(Box::new(DnsFailure)));
		let api = err.as_api().expect("Network failure should map to an API error.");

		assert_eq!(api.kind, ErrorKind::Generic);
		assert_eq!(api.status_code, 0);
		assert_eq!(api.message, "dns lookup failed");
		assert!(StdError::source(api).is_some(), "Original failure should be kept as source.");
	}

	#[test]
	fn io_and_other_failures_map_to_status_zero() {
		let io = IoError::new(IoErrorKind::ConnectionReset, "connection reset by peer");
		let err = map_common_error::<DnsFailure>(HttpClientError::Io(io));

		assert_eq!(err.as_api().map(|e| e.message.as_str()), Some("connection reset by peer"));

		let err = map_common_error::<DnsFailure>(HttpClientError::Other("socket closed".into()));

		assert_eq!(err.as_api().map(|e| e.status_code), Some(0));
	}

	#[test]
	fn request_construction_failures_are_config_errors() {
		let http_err = oauth2::http::Request::builder()
			.uri("not a uri")
			.body(Vec::<u8>::new())
			.expect_err("Invalid URI should fail to build.");
		let err = map_common_error::<DnsFailure>(HttpClientError::Http(http_err));

		assert!(matches!(err, Error::Config(ConfigError::HttpRequest(_))));
	}
}
