//! Normalized success response.

// crates.io
use oauth2::http::{HeaderMap, Method};
use serde::de::DeserializeOwned;
// self
use crate::{_prelude::*, http::HttpResponse};

/// Method and absolute URL of the exchange that produced an [`Envelope`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestSummary {
	/// HTTP method sent.
	pub method: Method,
	/// Absolute URL, including the query string.
	pub url: Url,
}

/// Success response wrapper returned by every call.
///
/// `data` is the body decoded into the caller's declared payload type. The raw body and
/// request summary are kept for diagnostics.
#[derive(Clone, Debug)]
pub struct Envelope<T> {
	/// HTTP status code.
	pub status: u16,
	/// Canonical reason phrase for `status`.
	pub status_text: String,
	/// Response headers.
	pub headers: HeaderMap,
	/// Decoded payload.
	pub data: T,
	/// Exchange that produced this response.
	pub request: RequestSummary,
	/// Undecoded response body.
	pub body: Vec<u8>,
}
impl<T> Envelope<T> {
	/// Consumes the envelope and returns the payload.
	pub fn into_data(self) -> T {
		self.data
	}

	/// Maps the payload while keeping the response metadata.
	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
		Envelope {
			status: self.status,
			status_text: self.status_text,
			headers: self.headers,
			data: f(self.data),
			request: self.request,
			body: self.body,
		}
	}
}
impl<T> Envelope<T>
where
	T: DeserializeOwned,
{
	/// Decodes a successful response. An empty body decodes as JSON `null`.
	pub(crate) fn decode(request: RequestSummary, response: HttpResponse) -> Result<Self> {
		let (parts, body) = response.into_parts();
		let status = parts.status.as_u16();
		let data = decode_body(&body, status)?;

		Ok(Self {
			status,
			status_text: parts.status.canonical_reason().unwrap_or_default().to_owned(),
			headers: parts.headers,
			data,
			request,
			body,
		})
	}
}

fn decode_body<T>(body: &[u8], status: u16) -> Result<T>
where
	T: DeserializeOwned,
{
	let bytes = if body.iter().all(u8::is_ascii_whitespace) { b"null".as_slice() } else { body };
	let mut deserializer = serde_json::Deserializer::from_slice(bytes);

	serde_path_to_error::deserialize(&mut deserializer)
		.map_err(|source| Error::Decode { source, status })
}
