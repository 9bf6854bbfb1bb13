//! Organizations and their members.

// self
use crate::{
	_prelude::*,
	api::Space,
	http::HttpClient,
	transport::{ApiRequest, Envelope, TransportErrorMapper},
};

def_resource!(Orgs, orgs, "Organization endpoints (`/org`).");

/// An organization.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Org {
	/// Organization identifier.
	pub org_id: u64,
	/// Display name.
	pub name: Option<String>,
	/// URL label.
	pub url_label: Option<String>,
	/// Full URL of the organization.
	pub url: Option<String>,
	/// Spaces the user is a member of, when included.
	pub spaces: Vec<Space>,
	/// Remaining fields, as returned.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl<C, M> Orgs<'_, C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Returns one organization.
	pub async fn get(&self, org_id: u64) -> Result<Envelope<Org>> {
		self.api.request(ApiRequest::get(format!("/org/{org_id}"))).await
	}

	/// Returns the user's organizations with the spaces they are a member of.
	pub async fn get_all(&self) -> Result<Envelope<Vec<Org>>> {
		self.api.request(ApiRequest::get("/org/")).await
	}

	/// Returns the spaces of an organization the user is a member of.
	pub async fn get_spaces(&self, org_id: u64) -> Result<Envelope<Vec<Space>>> {
		self.api.request(ApiRequest::get(format!("/org/{org_id}/space/"))).await
	}

	/// Returns the members of an organization.
	pub async fn get_members(&self, org_id: u64) -> Result<Envelope<Vec<Value>>> {
		self.api.request(ApiRequest::get(format!("/org/{org_id}/member/"))).await
	}

	/// Returns one member of an organization.
	pub async fn get_member(&self, org_id: u64, user_id: u64) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::get(format!("/org/{org_id}/member/{user_id}"))).await
	}

	/// Updates an organization's name or URL label.
	pub async fn update<B>(&self, org_id: u64, attributes: &B) -> Result<Envelope<Value>>
	where
		B: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::put(format!("/org/{org_id}")).json(attributes)?).await
	}
}
