//! Contacts and user profiles.

// self
use crate::{
	_prelude::*,
	http::HttpClient,
	transport::{self, ApiRequest, Envelope, TransportErrorMapper},
};

def_resource!(Contacts, contacts, "Contact endpoints (`/contact`).");

/// A contact profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
	/// Profile identifier.
	pub profile_id: u64,
	/// User identifier, for contacts that are users.
	pub user_id: Option<u64>,
	/// Display name.
	pub name: Option<String>,
	/// Email addresses.
	pub mail: Vec<String>,
	/// `user` or `space`.
	#[serde(rename = "type")]
	pub kind: Option<String>,
	/// Remaining fields, as returned.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Identifier returned when a space contact is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedContact {
	/// New profile identifier.
	pub profile_id: u64,
}

impl<C, M> Contacts<'_, C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Returns contacts by profile id. `profile_ids` is one id or a comma-separated list; the
	/// response is an object for one id and an array otherwise.
	pub async fn get<Q>(&self, profile_ids: &str, attributes: &Q) -> Result<Envelope<Value>>
	where
		Q: ?Sized + Serialize,
	{
		let request = ApiRequest::get(format!("/contact/{}/v2", id_list(profile_ids)));

		self.api.request(request.query_object(attributes)?).await
	}

	/// Returns the user's contacts, filtered by `attributes` (query parameters).
	pub async fn get_all<Q>(&self, attributes: &Q) -> Result<Envelope<Vec<Contact>>>
	where
		Q: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::get("/contact/").query_object(attributes)?).await
	}

	/// Returns the profile of a user.
	pub async fn get_for_user(&self, user_id: u64) -> Result<Envelope<Contact>> {
		self.api.request(ApiRequest::get(format!("/contact/user/{user_id}"))).await
	}

	/// Returns contact totals by organization and space.
	pub async fn totals(&self) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::get("/contact/totals/v3/")).await
	}

	/// Creates a contact in a space.
	pub async fn create<B>(&self, space_id: u64, attributes: &B) -> Result<Envelope<CreatedContact>>
	where
		B: ?Sized + Serialize,
	{
		self.api
			.request(ApiRequest::post(format!("/contact/space/{space_id}/")).json(attributes)?)
			.await
	}

	/// Updates a space contact.
	pub async fn update<B>(&self, profile_id: u64, attributes: &B) -> Result<Envelope<Value>>
	where
		B: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::put(format!("/contact/{profile_id}")).json(attributes)?).await
	}

	/// Deletes space contacts; `profile_ids` is one id or a comma-separated list.
	pub async fn delete(&self, profile_ids: &str) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::delete(format!("/contact/{}", id_list(profile_ids)))).await
	}
}

/// Encodes each id of a comma-separated list, keeping the commas.
fn id_list(profile_ids: &str) -> String {
	profile_ids.split(',').map(transport::path_segment).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn id_lists_keep_separators() {
		assert_eq!(id_list("1,2,3"), "1,2,3");
		assert_eq!(id_list("1,2?x"), "1,2%3Fx");
	}
}
