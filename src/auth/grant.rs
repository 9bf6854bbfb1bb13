//! Grant requests sent to the token endpoint.

// crates.io
use oauth2::{AuthorizationCode, RefreshToken, ResourceOwnerPassword, ResourceOwnerUsername};
// self
use crate::{
	_prelude::*,
	auth::{Credentials, TokenSecret},
	form,
};

/// OAuth grant types supported by the token endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// App authentication with an app id and app token.
	App,
	/// Resource-owner password credentials.
	Password,
	/// Authorization code returned by the server-side redirect flow.
	AuthorizationCode,
	/// Refresh token issued by a previous exchange.
	RefreshToken,
}
impl GrantType {
	/// Returns the `grant_type` wire value.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::App => "app",
			Self::Password => "password",
			Self::AuthorizationCode => "authorization_code",
			Self::RefreshToken => "refresh_token",
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Grant-specific parameters; exactly one variant per exchange.
#[derive(Clone, Debug)]
pub enum Grant {
	/// `grant_type=app`.
	App {
		/// Application identifier.
		app_id: u64,
		/// Application token from the app's developer settings.
		app_token: TokenSecret,
	},
	/// `grant_type=password`.
	Password {
		/// Account username (email).
		username: ResourceOwnerUsername,
		/// Account password.
		password: ResourceOwnerPassword,
	},
	/// `grant_type=authorization_code`.
	AuthorizationCode {
		/// Code received on the redirect.
		code: AuthorizationCode,
		/// Redirect URI used when requesting the code.
		redirect_uri: String,
	},
	/// `grant_type=refresh_token`.
	RefreshToken {
		/// Refresh token from an earlier exchange.
		refresh_token: RefreshToken,
	},
}
impl Grant {
	/// App grant.
	pub fn app(app_id: u64, app_token: impl Into<String>) -> Self {
		Self::App { app_id, app_token: TokenSecret::new(app_token) }
	}

	/// Password grant.
	pub fn password(username: impl Into<String>, password: impl Into<String>) -> Self {
		Self::Password {
			username: ResourceOwnerUsername::new(username.into()),
			password: ResourceOwnerPassword::new(password.into()),
		}
	}

	/// Authorization code grant.
	pub fn authorization_code(code: impl Into<String>, redirect_uri: impl Into<String>) -> Self {
		Self::AuthorizationCode {
			code: AuthorizationCode::new(code.into()),
			redirect_uri: redirect_uri.into(),
		}
	}

	/// Refresh token grant.
	pub fn refresh_token(refresh_token: impl Into<String>) -> Self {
		Self::RefreshToken { refresh_token: RefreshToken::new(refresh_token.into()) }
	}

	/// Grant type of the active variant.
	pub const fn grant_type(&self) -> GrantType {
		match self {
			Self::App { .. } => GrantType::App,
			Self::Password { .. } => GrantType::Password,
			Self::AuthorizationCode { .. } => GrantType::AuthorizationCode,
			Self::RefreshToken { .. } => GrantType::RefreshToken,
		}
	}
}

/// A grant combined with the client credentials, ready to be form-encoded.
#[derive(Clone, Debug)]
pub struct GrantRequest<'a> {
	/// Client credentials appended to every grant.
	pub credentials: &'a Credentials,
	/// Grant-specific parameters.
	pub grant: Grant,
}
impl<'a> GrantRequest<'a> {
	/// Pairs `grant` with `credentials`.
	pub fn new(credentials: &'a Credentials, grant: Grant) -> Self {
		Self { credentials, grant }
	}

	/// Wire fields in order: `grant_type`, the grant's own fields, then `client_id` and
	/// `client_secret`.
	pub fn form_pairs(&self) -> Vec<(&'static str, String)> {
		let mut pairs = vec![("grant_type", self.grant.grant_type().as_str().to_owned())];

		match &self.grant {
			Grant::App { app_id, app_token } => {
				pairs.push(("app_id", app_id.to_string()));
				pairs.push(("app_token", app_token.expose().to_owned()));
			},
			Grant::Password { username, password } => {
				pairs.push(("username", username.as_str().to_owned()));
				pairs.push(("password", password.secret().to_owned()));
			},
			Grant::AuthorizationCode { code, redirect_uri } => {
				pairs.push(("code", code.secret().to_owned()));
				pairs.push(("redirect_uri", redirect_uri.clone()));
			},
			Grant::RefreshToken { refresh_token } => {
				pairs.push(("refresh_token", refresh_token.secret().to_owned()));
			},
		}

		pairs.push(("client_id", self.credentials.client_id.as_str().to_owned()));
		pairs.push(("client_secret", self.credentials.client_secret.secret().to_owned()));

		pairs
	}

	/// Form-encoded request body.
	pub fn encode(&self) -> String {
		form::encode(self.form_pairs())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn credentials() -> Credentials {
		Credentials::new("cid", "csec")
	}

	fn keys(request: &GrantRequest) -> Vec<&'static str> {
		request.form_pairs().into_iter().map(|(k, _)| k).collect()
	}

	#[test]
	fn grant_type_wire_values() {
		assert_eq!(Grant::app(1, "t").grant_type().as_str(), "app");
		assert_eq!(Grant::password("u", "p").grant_type().as_str(), "password");
		assert_eq!(Grant::authorization_code("c", "r").grant_type().as_str(), "authorization_code");
		assert_eq!(Grant::refresh_token("r").grant_type().to_string(), "refresh_token");
	}

	#[test]
	fn every_grant_carries_exactly_its_fields_plus_credentials() {
		let credentials = credentials();
		let cases = [
			(Grant::app(42, "apptok"), vec!["grant_type", "app_id", "app_token"]),
			(
				Grant::password("me@example.com", "hunter2"),
				vec!["grant_type", "username", "password"],
			),
			(
				Grant::authorization_code("code-1", "https://example.com/cb"),
				vec!["grant_type", "code", "redirect_uri"],
			),
			(Grant::refresh_token("R0"), vec!["grant_type", "refresh_token"]),
		];

		for (grant, mut expected) in cases {
			let request = GrantRequest::new(&credentials, grant);

			expected.extend(["client_id", "client_secret"]);

			assert_eq!(keys(&request), expected);
		}
	}

	#[test]
	fn app_grant_encodes_in_wire_order() {
		let credentials = credentials();
		let request = GrantRequest::new(&credentials, Grant::app(42, "apptok"));

		assert_eq!(
			request.encode(),
			"grant_type=app&app_id=42&app_token=apptok&client_id=cid&client_secret=csec"
		);
	}

	#[test]
	fn encoded_values_are_escaped() {
		let credentials = credentials();
		let request = GrantRequest::new(
			&credentials,
			Grant::authorization_code("a&b=c", "https://example.com/cb?x=1"),
		);
		let decoded = form::decode(&request.encode());

		assert_eq!(decoded.get("code").map(String::as_str), Some("a&b=c"));
		assert_eq!(
			decoded.get("redirect_uri").map(String::as_str),
			Some("https://example.com/cb?x=1")
		);
	}

	#[test]
	fn debug_output_hides_grant_secrets() {
		let rendered = format!("{:?}", Grant::password("me@example.com", "hunter2"));

		assert!(!rendered.contains("hunter2"), "Password leaked into Debug output.");
	}
}
