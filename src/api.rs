//! Authorized-request facade and the resource modules built on it.
//!
//! [`Api`] is the single chokepoint for authorized calls: it stamps every request with
//! `Authorization: OAuth2 {access_token}` from the token snapshot it was created with,
//! replacing any caller-supplied value, and hands the request to the
//! [`Transport`]. Resource accessors (`api.items()`, `api.tasks()`, ...) only build paths,
//! queries, and bodies.

macro_rules! def_resource {
	($name:ident, $accessor:ident, $doc:literal) => {
		#[doc = $doc]
		pub struct $name<'a, C, M>
		where
			C: ?Sized + $crate::http::HttpClient,
			M: ?Sized + $crate::transport::TransportErrorMapper<C::TransportError>,
		{
			api: &'a $crate::api::Api<C, M>,
		}
		impl<C, M> $crate::api::Api<C, M>
		where
			C: ?Sized + $crate::http::HttpClient,
			M: ?Sized + $crate::transport::TransportErrorMapper<C::TransportError>,
		{
			#[doc = concat!("Endpoints of [`", stringify!($name), "`].")]
			pub fn $accessor(&self) -> $name<'_, C, M> {
				$name { api: self }
			}
		}
		impl<C, M> std::fmt::Debug for $name<'_, C, M>
		where
			C: ?Sized + $crate::http::HttpClient,
			M: ?Sized + $crate::transport::TransportErrorMapper<C::TransportError>,
		{
			fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
				f.debug_tuple(stringify!($name)).field(self.api).finish()
			}
		}
	};
}

pub mod apps;
pub mod batches;
pub mod comments;
pub mod contacts;
pub mod conversations;
pub mod files;
pub mod hooks;
pub mod items;
pub mod orgs;
pub mod raw;
pub mod search;
pub mod spaces;
pub mod statuses;
pub mod tasks;
pub mod users;

pub use apps::*;
pub use batches::*;
pub use comments::*;
pub use contacts::*;
pub use conversations::*;
pub use files::*;
pub use hooks::*;
pub use items::*;
pub use orgs::*;
pub use raw::*;
pub use search::*;
pub use spaces::*;
pub use statuses::*;
pub use tasks::*;
pub use users::*;

// crates.io
use oauth2::http::{HeaderValue, header::AUTHORIZATION};
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	auth::TokenState,
	error::ConfigError,
	http::HttpClient,
	obs::{self, CallOutcome, CallSpan},
	transport::{ApiRequest, Envelope, Transport, TransportErrorMapper},
};

/// `silent` and `hook` flags accepted by write endpoints.
///
/// `silent` suppresses notifications; `hook` controls whether webhooks fire. Both are always
/// sent as query parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteOptions {
	/// Suppress notifications. Defaults to `false`.
	pub silent: bool,
	/// Trigger webhooks. Defaults to `true`.
	pub hook: bool,
}
impl WriteOptions {
	/// Overrides the `silent` flag.
	pub fn with_silent(mut self, silent: bool) -> Self {
		self.silent = silent;

		self
	}

	/// Overrides the `hook` flag.
	pub fn with_hook(mut self, hook: bool) -> Self {
		self.hook = hook;

		self
	}

	pub(crate) fn apply(self, request: ApiRequest) -> ApiRequest {
		request.query("silent", self.silent).query("hook", self.hook)
	}
}
impl Default for WriteOptions {
	fn default() -> Self {
		Self { silent: false, hook: true }
	}
}

/// Authorized-request facade bound to one token snapshot.
pub struct Api<C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	transport: Transport<C, M>,
	token: TokenState,
}
impl<C, M> Api<C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Binds `token` to `transport`.
	///
	/// An empty token is accepted; the server then rejects calls with an
	/// [`ErrorKind::Authorization`](crate::error::ErrorKind::Authorization) error.
	pub fn new(transport: Transport<C, M>, token: TokenState) -> Self {
		Self { transport, token }
	}

	/// Token snapshot used for the `Authorization` header.
	pub fn token(&self) -> &TokenState {
		&self.token
	}

	/// Underlying transport.
	pub fn transport(&self) -> &Transport<C, M> {
		&self.transport
	}

	/// Sends `request` with the authorization header and decodes the body into `T`.
	pub async fn request<T>(&self, request: ApiRequest) -> Result<Envelope<T>>
	where
		T: DeserializeOwned,
	{
		let method = request.method.clone();
		let span = CallSpan::request(&method, &request.path);

		obs::record_request_outcome(&method, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let request = self.authorize(request)?;

				self.transport.call(request).await
			})
			.await;

		match &result {
			Ok(_) => obs::record_request_outcome(&method, CallOutcome::Success),
			Err(_) => obs::record_request_outcome(&method, CallOutcome::Failure),
		}

		result
	}

	fn authorize(&self, mut request: ApiRequest) -> Result<ApiRequest> {
		let mut value = HeaderValue::from_str(&self.token.authorization_header())
			.map_err(|source| ConfigError::InvalidHeader { name: "authorization", source })?;

		value.set_sensitive(true);
		request.headers.insert(AUTHORIZATION, value);

		Ok(request)
	}
}
impl<C, M> Clone for Api<C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn clone(&self) -> Self {
		Self { transport: self.transport.clone(), token: self.token.clone() }
	}
}
impl<C, M> Debug for Api<C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Api")
			.field("base_url", &self.transport.base_url())
			.field("authenticated", &self.token.is_authenticated())
			.finish()
	}
}
