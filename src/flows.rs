//! Authentication session: credentials, transport, and the current token.
//!
//! [`AuthSession`] runs the four grant exchanges against the token endpoint and keeps the
//! resulting [`TokenState`] in a [`TokenCell`]. Resource calls go through [`AuthSession::api`],
//! which hands the current token snapshot to the authorized-request facade.

mod grants;

// self
use crate::{
	_prelude::*,
	api::Api,
	auth::{Credentials, TokenCell, TokenState},
	http::HttpClient,
	transport::{Transport, TransportErrorMapper},
};
#[cfg(feature = "reqwest")]
use crate::{http::ReqwestHttpClient, transport::ReqwestTransportErrorMapper};

/// Path of the token endpoint, relative to the base URL.
pub const TOKEN_PATH: &str = "/oauth/token";

#[cfg(feature = "reqwest")]
/// Session specialized for the crate's default reqwest transport stack.
pub type ReqwestSession = AuthSession<ReqwestHttpClient, ReqwestTransportErrorMapper>;

/// Creates a reqwest-backed session for `credentials`.
#[cfg(feature = "reqwest")]
pub fn auth(credentials: Credentials) -> ReqwestSession {
	AuthSession::new(credentials)
}

/// Client credentials plus the token obtained with them.
///
/// The token starts empty and is replaced wholesale by every successful grant exchange; a
/// failed exchange leaves it untouched. Expiry is never checked here: callers watch
/// `expires_in` and re-run a grant themselves. Clones share the same token cell.
pub struct AuthSession<C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Transport used for token exchanges and handed to [`Api`] instances.
	pub transport: Transport<C, M>,
	credentials: Credentials,
	token: TokenCell,
}
impl<C, M> AuthSession<C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Creates a session that reuses the caller-provided client + mapper pair.
	pub fn with_http_client(
		credentials: Credentials,
		http_client: impl Into<Arc<C>>,
		mapper: impl Into<Arc<M>>,
	) -> Self {
		Self {
			transport: Transport::new(http_client, mapper),
			credentials,
			token: TokenCell::default(),
		}
	}

	/// Points the session (and every [`Api`] it creates afterwards) at another origin.
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.transport = self.transport.with_base_url(base_url);

		self
	}

	/// Client credentials sent with every grant.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Snapshot of the current token. Empty until a grant succeeds.
	pub fn current_token(&self) -> TokenState {
		self.token.snapshot()
	}

	/// Authorized-request facade bound to the current token snapshot.
	///
	/// The facade keeps the snapshot it was created with; call this again after a new
	/// grant to pick up the new token.
	pub fn api(&self) -> Api<C, M> {
		Api::new(self.transport.clone(), self.token.snapshot())
	}
}
#[cfg(feature = "reqwest")]
impl AuthSession<ReqwestHttpClient, ReqwestTransportErrorMapper> {
	/// Creates a session with its own reqwest-backed transport.
	///
	/// The default client has no timeout. Use [`AuthSession::with_http_client`] with a
	/// configured [`ReqwestHttpClient`] to add one.
	pub fn new(credentials: Credentials) -> Self {
		Self::with_http_client(
			credentials,
			ReqwestHttpClient::default(),
			Arc::new(ReqwestTransportErrorMapper),
		)
	}
}
impl<C, M> Clone for AuthSession<C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn clone(&self) -> Self {
		Self {
			transport: self.transport.clone(),
			credentials: self.credentials.clone(),
			token: self.token.clone(),
		}
	}
}
impl<C, M> Debug for AuthSession<C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthSession")
			.field("base_url", &self.transport.base_url())
			.field("client_id", &self.credentials.client_id.as_str())
			.field("authenticated", &self.token.snapshot().is_authenticated())
			.finish()
	}
}

#[cfg(all(test, feature = "reqwest"))]
mod tests {
	// self
	use super::*;
	use crate::transport::BASE_URL;

	#[test]
	fn new_session_is_unauthenticated() {
		let session = auth(Credentials::new("cid", "csec"));

		assert_eq!(session.current_token(), TokenState::default());
		assert_eq!(session.current_token(), session.current_token());
		assert_eq!(session.transport.base_url(), BASE_URL);
		assert_eq!(session.credentials().client_id.as_str(), "cid");
	}

	#[test]
	fn debug_output_omits_secrets() {
		let session = auth(Credentials::new("cid", "csec")).with_base_url("http://localhost:1");
		let rendered = format!("{session:?}");

		assert!(rendered.contains("http://localhost:1"));
		assert!(rendered.contains("authenticated: false"));
		assert!(!rendered.contains("csec"));
	}
}
