//! Full-text search.

// self
use crate::{
	_prelude::*,
	error::ConfigError,
	http::HttpClient,
	transport::{ApiRequest, Envelope, TransportErrorMapper},
};

def_resource!(Search, search, "Search endpoints (`/search`).");

/// One search hit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
	/// Identifier of the matched object.
	pub id: u64,
	/// Object type (`item`, `task`, `file`, ...).
	#[serde(rename = "type")]
	pub kind: Option<String>,
	/// Title of the matched object.
	pub title: Option<String>,
	/// Web link to the matched object.
	pub link: Option<String>,
	/// Remaining fields, as returned.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl<C, M> Search<'_, C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Searches everything the user can see.
	pub async fn globally<B>(
		&self,
		words: &str,
		attributes: &B,
	) -> Result<Envelope<Vec<SearchResult>>>
	where
		B: ?Sized + Serialize,
	{
		self.run("/search/".into(), words, attributes).await
	}

	/// Searches within an organization.
	pub async fn in_org<B>(
		&self,
		org_id: u64,
		words: &str,
		attributes: &B,
	) -> Result<Envelope<Vec<SearchResult>>>
	where
		B: ?Sized + Serialize,
	{
		self.run(format!("/search/org/{org_id}/"), words, attributes).await
	}

	/// Searches within a space.
	pub async fn in_space<B>(
		&self,
		space_id: u64,
		words: &str,
		attributes: &B,
	) -> Result<Envelope<Vec<SearchResult>>>
	where
		B: ?Sized + Serialize,
	{
		self.run(format!("/search/space/{space_id}/"), words, attributes).await
	}

	/// Searches within an app.
	pub async fn in_app<B>(
		&self,
		app_id: u64,
		words: &str,
		attributes: &B,
	) -> Result<Envelope<Vec<SearchResult>>>
	where
		B: ?Sized + Serialize,
	{
		self.run(format!("/search/app/{app_id}/"), words, attributes).await
	}

	async fn run<B>(
		&self,
		path: String,
		words: &str,
		attributes: &B,
	) -> Result<Envelope<Vec<SearchResult>>>
	where
		B: ?Sized + Serialize,
	{
		let body = search_body(words, attributes)?;

		self.api.request(ApiRequest::post(path).json(&body)?).await
	}
}

/// Merges the search words into `attributes` under `query`, replacing any `query` already set.
fn search_body<B>(words: &str, attributes: &B) -> Result<Value>
where
	B: ?Sized + Serialize,
{
	let mut body = match serde_json::to_value(attributes).map_err(ConfigError::SerializeBody)? {
		Value::Object(map) => map,
		Value::Null => Map::new(),
		_ => {
			let source = <serde_json::Error as serde::ser::Error>::custom(
				"search attributes must serialize to a JSON object",
			);

			return Err(ConfigError::SerializeBody(source).into());
		},
	};

	body.insert("query".into(), Value::from(words));

	Ok(Value::Object(body))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn query_is_merged_into_attributes() {
		let body = search_body("roadmap", &serde_json::json!({ "limit": 5, "query": "stale" }))
			.expect("Object attributes should merge.");

		assert_eq!(body, serde_json::json!({ "limit": 5, "query": "roadmap" }));

		let body = search_body("roadmap", &()).expect("Unit attributes should merge.");

		assert_eq!(body, serde_json::json!({ "query": "roadmap" }));
	}

	#[test]
	fn non_object_attributes_are_rejected() {
		let err = search_body("roadmap", &[1, 2]).expect_err("Array attributes should fail.");

		assert!(matches!(err, Error::Config(ConfigError::SerializeBody(_))));
	}
}
