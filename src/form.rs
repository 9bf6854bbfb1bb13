//! `application/x-www-form-urlencoded` helpers.
//!
//! The token endpoint only accepts form bodies, so grant requests are flattened into
//! key/value pairs and encoded here rather than serialized as JSON. Nested values are not
//! supported; callers pass flat pairs.

// crates.io
use url::form_urlencoded;
// self
use crate::_prelude::*;

/// Media type of bodies produced by [`encode`].
pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Percent-encodes flat key/value pairs, joining pairs with `&` and keys to values with `=`.
pub fn encode<I, K, V>(pairs: I) -> String
where
	I: IntoIterator<Item = (K, V)>,
	K: AsRef<str>,
	V: AsRef<str>,
{
	let mut serializer = form_urlencoded::Serializer::new(String::new());

	for (key, value) in pairs {
		serializer.append_pair(key.as_ref(), value.as_ref());
	}

	serializer.finish()
}

/// Parses a form body back into a map. Later duplicates overwrite earlier ones.
pub fn decode(body: impl AsRef<[u8]>) -> BTreeMap<String, String> {
	form_urlencoded::parse(body.as_ref()).into_owned().collect()
}
