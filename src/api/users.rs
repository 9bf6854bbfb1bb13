//! The authenticated user.

// self
use crate::{
	_prelude::*,
	http::HttpClient,
	transport::{self, ApiRequest, Envelope, TransportErrorMapper},
};

def_resource!(Users, users, "Endpoints for the authenticated user (`/user`).");

/// The authenticated user's account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
	/// User identifier.
	pub user_id: u64,
	/// Primary email address.
	pub mail: Option<String>,
	/// Account status.
	pub status: Option<String>,
	/// Locale.
	pub locale: Option<String>,
	/// Time zone.
	pub timezone: Option<String>,
	/// Remaining fields, as returned.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// User, profile, and counters returned by `/user/status`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStatus {
	/// Account.
	pub user: User,
	/// Contact profile.
	pub profile: Option<Value>,
	/// Unread inbox notifications.
	pub inbox_new: Option<u64>,
	/// Remaining fields, as returned.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl<C, M> Users<'_, C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Returns the user's account.
	pub async fn get(&self) -> Result<Envelope<User>> {
		self.api.request(ApiRequest::get("/user")).await
	}

	/// Returns the user's account, profile, and counters.
	pub async fn status(&self) -> Result<Envelope<UserStatus>> {
		self.api.request(ApiRequest::get("/user/status")).await
	}

	/// Returns a stored user property.
	pub async fn get_property(&self, name: &str) -> Result<Envelope<Value>> {
		let name = transport::path_segment(name);

		self.api.request(ApiRequest::get(format!("/user/property/{name}"))).await
	}

	/// Stores a user property (`{"value": ...}`).
	pub async fn set_property<B>(&self, name: &str, attributes: &B) -> Result<Envelope<Value>>
	where
		B: ?Sized + Serialize,
	{
		let name = transport::path_segment(name);

		self.api.request(ApiRequest::put(format!("/user/property/{name}")).json(attributes)?).await
	}

	/// Deletes a user property.
	pub async fn delete_property(&self, name: &str) -> Result<Envelope<Value>> {
		let name = transport::path_segment(name);

		self.api.request(ApiRequest::delete(format!("/user/property/{name}"))).await
	}

	/// Updates fields of the user's profile.
	pub async fn update_profile<B>(&self, attributes: &B) -> Result<Envelope<Value>>
	where
		B: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::put("/user/profile/").json(attributes)?).await
	}
}
