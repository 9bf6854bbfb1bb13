//! Token snapshot returned by grant exchanges.

// crates.io
use serde::{Deserializer, de::DeserializeOwned};
// self
use crate::{_prelude::*, auth::TokenSecret};

/// The six fields issued by the token endpoint.
///
/// A default value is the "never authenticated" state: every field empty. Exchanges replace
/// the whole value, never individual fields. `expires_in` is informational only; nothing in
/// the client refreshes automatically.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenState {
	/// Bearer token sent as `Authorization: OAuth2 {access_token}`.
	pub access_token: TokenSecret,
	/// Token accepted by the `refresh_token` grant.
	#[serde(default, deserialize_with = "null_as_default")]
	pub refresh_token: TokenSecret,
	/// Token type reported by the server (`bearer`).
	#[serde(default, deserialize_with = "null_as_default")]
	pub token_type: String,
	/// Granted scope string.
	#[serde(default, deserialize_with = "null_as_default")]
	pub scope: String,
	/// Lifetime in seconds at issue time.
	#[serde(default, deserialize_with = "null_as_default")]
	pub expires_in: u64,
	/// Opaque reference describing what the token was issued for (user, app).
	#[serde(rename = "ref", default, deserialize_with = "null_as_default")]
	pub reference: Map<String, Value>,
}
impl TokenState {
	/// Value of the `Authorization` header for this token.
	///
	/// An empty token still yields `OAuth2 ` so the server answers with an authorization
	/// error instead of the client failing locally.
	pub fn authorization_header(&self) -> String {
		format!("OAuth2 {}", self.access_token.expose())
	}

	/// Returns `true` once a grant exchange has issued an access token.
	pub fn is_authenticated(&self) -> bool {
		!self.access_token.is_empty()
	}
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + DeserializeOwned,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn deserializes_token_endpoint_payload() {
		let state: TokenState = serde_json::from_str(
			r#"{
				"access_token": "T1",
				"refresh_token": "R1",
				"token_type": "bearer",
				"scope": "S1",
				"expires_in": 100,
				"ref": { "type": "user", "id": 7 }
			}"#,
		)
		.expect("Token payload should deserialize.");

		assert_eq!(state.access_token.expose(), "T1");
		assert_eq!(state.refresh_token.expose(), "R1");
		assert_eq!(state.token_type, "bearer");
		assert_eq!(state.scope, "S1");
		assert_eq!(state.expires_in, 100);
		assert_eq!(state.reference.get("id"), Some(&Value::from(7)));
		assert!(state.is_authenticated());
		assert_eq!(state.authorization_header(), "OAuth2 T1");
	}

	#[test]
	fn missing_and_null_fields_default() {
		let state: TokenState =
			serde_json::from_str(r#"{"access_token":"T1","refresh_token":null,"ref":null}"#)
				.expect("Sparse payload should deserialize.");

		assert!(state.refresh_token.is_empty());
		assert!(state.reference.is_empty());
		assert_eq!(state.expires_in, 0);
	}

	#[test]
	fn default_state_is_unauthenticated() {
		let state = TokenState::default();

		assert!(!state.is_authenticated());
		assert_eq!(state.authorization_header(), "OAuth2 ");
	}

	#[test]
	fn serializes_reference_under_ref() {
		let state = TokenState { access_token: "T1".into(), ..Default::default() };
		let value = serde_json::to_value(&state).expect("Token state should serialize.");

		assert!(value.get("ref").is_some());
		assert!(value.get("reference").is_none());
	}

	#[test]
	fn debug_output_redacts_tokens() {
		let state = TokenState {
			access_token: "T1".into(),
			refresh_token: "R1".into(),
			..Default::default()
		};
		let rendered = format!("{state:?}");

		assert!(!rendered.contains("T1"));
		assert!(!rendered.contains("R1"));
	}
}
