//! Outbound request shape handed to the transport.

// crates.io
use oauth2::http::{
	HeaderMap, HeaderValue, Method, Request,
	header::{CONTENT_TYPE, HeaderName},
};
use url::form_urlencoded;
// self
use crate::{_prelude::*, error::ConfigError, form, http::HttpRequest};

/// Percent-encodes `value` for use as one URL path segment.
///
/// Everything except ASCII alphanumerics and `*-._` is escaped, so `/`, `?`, `#` and `%` in
/// caller input cannot change which endpoint is called.
pub fn path_segment(value: &str) -> String {
	form_urlencoded::byte_serialize(value.as_bytes())
		.map(|chunk| if chunk == "+" { "%20" } else { chunk })
		.collect()
}

/// Already-serialized request body.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestBody {
	/// No body.
	#[default]
	Empty,
	/// JSON document, sent as `application/json`.
	Json(Value),
	/// Form-encoded string, sent as `application/x-www-form-urlencoded`.
	Form(String),
	/// Arbitrary bytes with an explicit content type.
	Raw {
		/// Body bytes.
		bytes: Vec<u8>,
		/// Content type sent with the bytes.
		content_type: HeaderValue,
	},
}
impl RequestBody {
	/// Content type implied by the body, if any.
	pub fn content_type(&self) -> Option<HeaderValue> {
		match self {
			Self::Empty => None,
			Self::Json(_) => Some(HeaderValue::from_static("application/json")),
			Self::Form(_) => Some(HeaderValue::from_static(form::CONTENT_TYPE)),
			Self::Raw { content_type, .. } => Some(content_type.clone()),
		}
	}

	/// Returns `true` for [`RequestBody::Empty`].
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}

	fn into_bytes(self) -> Result<Vec<u8>> {
		match self {
			Self::Empty => Ok(Vec::new()),
			Self::Json(value) =>
				serde_json::to_vec(&value).map_err(|e| ConfigError::SerializeBody(e).into()),
			Self::Form(encoded) => Ok(encoded.into_bytes()),
			Self::Raw { bytes, .. } => Ok(bytes),
		}
	}
}

/// One API call: method, path relative to the base URL, query, headers, and body.
#[derive(Clone, Debug)]
pub struct ApiRequest {
	/// HTTP method.
	pub method: Method,
	/// Path relative to the base URL, e.g. `/item/42`.
	pub path: String,
	/// Query parameters appended in order.
	pub query: Vec<(String, String)>,
	/// Headers merged into the outbound request.
	pub headers: HeaderMap,
	/// Request body.
	pub body: RequestBody,
}
impl ApiRequest {
	/// Creates a request without query, headers, or body.
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self {
			method,
			path: path.into(),
			query: Vec::new(),
			headers: HeaderMap::new(),
			body: RequestBody::Empty,
		}
	}

	/// `GET` request for `path`.
	pub fn get(path: impl Into<String>) -> Self {
		Self::new(Method::GET, path)
	}

	/// `POST` request for `path`.
	pub fn post(path: impl Into<String>) -> Self {
		Self::new(Method::POST, path)
	}

	/// `PUT` request for `path`.
	pub fn put(path: impl Into<String>) -> Self {
		Self::new(Method::PUT, path)
	}

	/// `PATCH` request for `path`.
	pub fn patch(path: impl Into<String>) -> Self {
		Self::new(Method::PATCH, path)
	}

	/// `DELETE` request for `path`.
	pub fn delete(path: impl Into<String>) -> Self {
		Self::new(Method::DELETE, path)
	}

	/// Appends a query parameter.
	pub fn query(mut self, key: impl Into<String>, value: impl Display) -> Self {
		self.query.push((key.into(), value.to_string()));

		self
	}

	/// Appends every key/value pair in `pairs` as query parameters.
	///
	/// JSON objects are accepted so loosely-typed filter attributes can be passed through;
	/// strings are sent verbatim and other scalars use their JSON rendering. `null` values
	/// are skipped, and a `null` (or `()`) adds nothing. Anything else is a
	/// [`ConfigError::SerializeBody`].
	pub fn query_object<B>(mut self, pairs: &B) -> Result<Self>
	where
		B: ?Sized + Serialize,
	{
		let map = match serde_json::to_value(pairs).map_err(ConfigError::SerializeBody)? {
			Value::Object(map) => map,
			Value::Null => return Ok(self),
			_ => {
				let source = <serde_json::Error as serde::ser::Error>::custom(
					"query attributes must serialize to a JSON object",
				);

				return Err(ConfigError::SerializeBody(source).into());
			},
		};

		for (key, value) in map {
			match value {
				Value::Null => {},
				Value::String(s) => self.query.push((key, s)),
				other => self.query.push((key, other.to_string())),
			}
		}

		Ok(self)
	}

	/// Sets a header, replacing any existing values for `name`.
	pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
		self.headers.insert(name, value);

		self
	}

	/// Serializes `body` as the JSON request body.
	pub fn json<B>(mut self, body: &B) -> Result<Self>
	where
		B: ?Sized + Serialize,
	{
		self.body =
			RequestBody::Json(serde_json::to_value(body).map_err(ConfigError::SerializeBody)?);

		Ok(self)
	}

	/// Uses an already-encoded form string as the request body.
	pub fn form(mut self, encoded: impl Into<String>) -> Self {
		self.body = RequestBody::Form(encoded.into());

		self
	}

	/// Sets an arbitrary request body.
	pub fn body(mut self, body: RequestBody) -> Self {
		self.body = body;

		self
	}

	/// Builds the wire request against `url`, adding the body's content type unless the
	/// caller already set one.
	pub(crate) fn into_http(self, url: &Url) -> Result<HttpRequest> {
		let content_type = self.body.content_type();
		let bytes = self.body.into_bytes()?;
		let mut request = Request::builder()
			.method(self.method)
			.uri(url.as_str())
			.body(bytes)
			.map_err(ConfigError::from)?;

		*request.headers_mut() = self.headers;

		if let Some(value) = content_type {
			request.headers_mut().entry(CONTENT_TYPE).or_insert(value);
		}

		Ok(request)
	}
}
