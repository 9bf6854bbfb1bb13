//! The four grant exchanges.

// self
use crate::{
	_prelude::*,
	auth::{Grant, GrantRequest, TokenState},
	flows::{AuthSession, TOKEN_PATH},
	http::HttpClient,
	obs::{self, CallOutcome, CallSpan},
	transport::{ApiRequest, TransportErrorMapper},
};

impl<C, M> AuthSession<C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Authenticates as an app (`grant_type=app`).
	pub async fn app_auth(&self, app_id: u64, app_token: impl Into<String>) -> Result<TokenState> {
		self.run_grant(Grant::app(app_id, app_token), "app_auth").await
	}

	/// Authenticates as a user with username and password (`grant_type=password`).
	pub async fn password_auth(
		&self,
		username: impl Into<String>,
		password: impl Into<String>,
	) -> Result<TokenState> {
		self.run_grant(Grant::password(username, password), "password_auth").await
	}

	/// Exchanges an authorization code from the redirect flow (`grant_type=authorization_code`).
	pub async fn authenticate_with_auth_code(
		&self,
		code: impl Into<String>,
		redirect_uri: impl Into<String>,
	) -> Result<TokenState> {
		self.run_grant(Grant::authorization_code(code, redirect_uri), "authenticate_with_auth_code")
			.await
	}

	/// Exchanges a refresh token for a new token (`grant_type=refresh_token`).
	pub async fn authenticate_with_refresh_token(
		&self,
		refresh_token: impl Into<String>,
	) -> Result<TokenState> {
		self.run_grant(Grant::refresh_token(refresh_token), "authenticate_with_refresh_token")
			.await
	}

	/// Runs an arbitrary [`Grant`] against the token endpoint.
	pub async fn exchange(&self, grant: Grant) -> Result<TokenState> {
		self.run_grant(grant, "exchange").await
	}

	async fn run_grant(&self, grant: Grant, stage: &'static str) -> Result<TokenState> {
		let kind = grant.grant_type();
		let span = CallSpan::flow(kind, stage);

		obs::record_flow_outcome(kind, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let body = GrantRequest::new(&self.credentials, grant).encode();
				let request = ApiRequest::post(TOKEN_PATH).form(body);
				let state = self.transport.call::<TokenState>(request).await?.into_data();

				self.token.replace(state.clone());

				Ok(state)
			})
			.await;

		match &result {
			Ok(_) => obs::record_flow_outcome(kind, CallOutcome::Success),
			Err(_) => obs::record_flow_outcome(kind, CallOutcome::Failure),
		}

		result
	}
}
