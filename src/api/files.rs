//! Uploaded files and their attachments.

// self
use crate::{
	_prelude::*,
	http::HttpClient,
	transport::{ApiRequest, Envelope, TransportErrorMapper},
};

def_resource!(Files, files, "File endpoints (`/file`).");

/// An uploaded file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
	/// File identifier.
	pub file_id: u64,
	/// File name.
	pub name: Option<String>,
	/// MIME type.
	pub mimetype: Option<String>,
	/// Size in bytes.
	pub size: Option<u64>,
	/// Download link.
	pub link: Option<String>,
	/// Remaining fields, as returned.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl<C, M> Files<'_, C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Returns one file.
	pub async fn get(&self, file_id: u64) -> Result<Envelope<File>> {
		self.api.request(ApiRequest::get(format!("/file/{file_id}"))).await
	}

	/// Returns files visible to the user, filtered by `attributes` (query parameters).
	pub async fn get_all<Q>(&self, attributes: &Q) -> Result<Envelope<Vec<File>>>
	where
		Q: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::get("/file").query_object(attributes)?).await
	}

	/// Returns the files attached to items of an app.
	pub async fn get_for_app<Q>(&self, app_id: u64, attributes: &Q) -> Result<Envelope<Vec<File>>>
	where
		Q: ?Sized + Serialize,
	{
		self.api
			.request(ApiRequest::get(format!("/file/app/{app_id}")).query_object(attributes)?)
			.await
	}

	/// Returns the files in a space.
	pub async fn get_for_space<Q>(
		&self,
		space_id: u64,
		attributes: &Q,
	) -> Result<Envelope<Vec<File>>>
	where
		Q: ?Sized + Serialize,
	{
		self.api
			.request(ApiRequest::get(format!("/file/space/{space_id}")).query_object(attributes)?)
			.await
	}

	/// Attaches a file to an object (`ref_type`, `ref_id`).
	pub async fn attach<B>(&self, file_id: u64, attributes: &B) -> Result<Envelope<Value>>
	where
		B: ?Sized + Serialize,
	{
		self.api
			.request(ApiRequest::post(format!("/file/{file_id}/attach")).json(attributes)?)
			.await
	}

	/// Copies a file, returning the new file id.
	pub async fn copy(&self, file_id: u64) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::post(format!("/file/{file_id}/copy"))).await
	}

	/// Replaces an existing file with this one (`old_file_id`).
	pub async fn replace<B>(&self, file_id: u64, attributes: &B) -> Result<Envelope<Value>>
	where
		B: ?Sized + Serialize,
	{
		self.api
			.request(ApiRequest::post(format!("/file/{file_id}/replace")).json(attributes)?)
			.await
	}

	/// Updates a file's description.
	pub async fn update<B>(&self, file_id: u64, attributes: &B) -> Result<Envelope<Value>>
	where
		B: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::put(format!("/file/{file_id}")).json(attributes)?).await
	}

	/// Deletes a file.
	pub async fn delete(&self, file_id: u64) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::delete(format!("/file/{file_id}"))).await
	}
}
