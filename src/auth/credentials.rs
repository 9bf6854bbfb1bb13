//! Fixed OAuth client credentials.

// crates.io
use oauth2::{ClientId, ClientSecret};
// self
use crate::_prelude::*;

/// Client identifier and secret issued for an API key.
///
/// Supplied once at construction and sent with every grant exchange. The secret is kept in
/// [`ClientSecret`], whose `Debug` output is redacted.
#[derive(Clone, Debug)]
pub struct Credentials {
	/// OAuth client identifier.
	pub client_id: ClientId,
	/// OAuth client secret.
	pub client_secret: ClientSecret,
}
impl Credentials {
	/// Wraps a client identifier and secret.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self {
			client_id: ClientId::new(client_id.into()),
			client_secret: ClientSecret::new(client_secret.into()),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn debug_output_hides_the_secret() {
		let credentials = Credentials::new("cid", "csec");
		let rendered = format!("{credentials:?}");

		assert_eq!(credentials.client_id.as_str(), "cid");
		assert_eq!(credentials.client_secret.secret(), "csec");
		assert!(rendered.contains("cid"));
		assert!(!rendered.contains("csec"), "Client secret leaked into Debug output.");
	}
}
