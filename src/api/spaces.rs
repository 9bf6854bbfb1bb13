//! Workspaces.

// self
use crate::{
	_prelude::*,
	http::HttpClient,
	transport::{ApiRequest, Envelope, TransportErrorMapper},
};

def_resource!(Spaces, spaces, "Space endpoints (`/space`).");

/// A workspace.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Space {
	/// Space identifier.
	pub space_id: u64,
	/// Display name.
	pub name: Option<String>,
	/// Owning organization.
	pub org_id: Option<u64>,
	/// URL label.
	pub url_label: Option<String>,
	/// Full URL of the space.
	pub url: Option<String>,
	/// `open` or `closed`.
	pub privacy: Option<String>,
	/// Remaining fields, as returned.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Identifier and URL returned when a space is created.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedSpace {
	/// New space identifier.
	pub space_id: u64,
	/// URL of the new space.
	pub url: Option<String>,
}

impl<C, M> Spaces<'_, C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Returns one space.
	pub async fn get(&self, space_id: u64) -> Result<Envelope<Space>> {
		self.api.request(ApiRequest::get(format!("/space/{space_id}"))).await
	}

	/// Returns the spaces of an organization the user can see.
	pub async fn get_for_org(&self, org_id: u64) -> Result<Envelope<Vec<Space>>> {
		self.api.request(ApiRequest::get(format!("/space/org/{org_id}/"))).await
	}

	/// Resolves a space from its URL (`url`, or `org_slug` + `space_slug`).
	pub async fn get_by_url<Q>(&self, attributes: &Q) -> Result<Envelope<Space>>
	where
		Q: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::get("/space/url").query_object(attributes)?).await
	}

	/// Creates a space.
	pub async fn create<B>(&self, attributes: &B) -> Result<Envelope<CreatedSpace>>
	where
		B: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::post("/space/").json(attributes)?).await
	}

	/// Updates a space.
	pub async fn update<B>(&self, space_id: u64, attributes: &B) -> Result<Envelope<Value>>
	where
		B: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::put(format!("/space/{space_id}")).json(attributes)?).await
	}

	/// Deletes a space.
	pub async fn delete(&self, space_id: u64) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::delete(format!("/space/{space_id}"))).await
	}

	/// Archives a space.
	pub async fn archive(&self, space_id: u64) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::post(format!("/space/{space_id}/archive"))).await
	}

	/// Restores an archived space.
	pub async fn restore(&self, space_id: u64) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::post(format!("/space/{space_id}/restore"))).await
	}

	/// Returns the open spaces of an organization the user can join.
	pub async fn available(&self, org_id: u64) -> Result<Envelope<Vec<Space>>> {
		self.api.request(ApiRequest::get(format!("/space/org/{org_id}/available/"))).await
	}

	/// Returns the user's most used spaces.
	pub async fn top(&self) -> Result<Envelope<Vec<Space>>> {
		self.api.request(ApiRequest::get("/space/top/")).await
	}
}
