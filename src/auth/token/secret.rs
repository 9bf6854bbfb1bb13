//! Redacted wrapper for bearer material.

// self
use crate::_prelude::*;

/// Token string that never shows up in `Debug` or `Display` output.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Returns `true` when no token has been issued.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl From<String> for TokenSecret {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for TokenSecret {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		if self.0.is_empty() {
			f.write_str("TokenSecret(\"\")")
		} else {
			f.debug_tuple("TokenSecret").field(&"<redacted>").finish()
		}
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn formatters_redact() {
		let secret = TokenSecret::new("super-secret");

		assert_eq!(format!("{secret:?}"), "TokenSecret(\"<redacted>\")");
		assert_eq!(format!("{secret}"), "<redacted>");
		assert_eq!(format!("{:?}", TokenSecret::default()), "TokenSecret(\"\")");
	}

	#[test]
	fn serializes_as_plain_string() {
		let secret: TokenSecret =
			serde_json::from_str("\"abc123\"").expect("String token should deserialize.");

		assert_eq!(secret.expose(), "abc123");
		assert!(!secret.is_empty());
		assert_eq!(serde_json::to_string(&secret).expect("Token should serialize."), "\"abc123\"");
	}
}
