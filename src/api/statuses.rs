//! Status messages posted to spaces.

// self
use crate::{
	_prelude::*,
	http::HttpClient,
	transport::{ApiRequest, Envelope, TransportErrorMapper},
};

def_resource!(Statuses, statuses, "Status message endpoints (`/status`).");

/// A status message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
	/// Status identifier.
	pub status_id: u64,
	/// Message text.
	pub value: Option<String>,
	/// Web link to the status.
	pub link: Option<String>,
	/// Remaining fields, as returned.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl<C, M> Statuses<'_, C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Returns one status message.
	pub async fn get(&self, status_id: u64) -> Result<Envelope<Status>> {
		self.api.request(ApiRequest::get(format!("/status/{status_id}"))).await
	}

	/// Posts a status message to a space.
	pub async fn create<B>(&self, space_id: u64, attributes: &B) -> Result<Envelope<Status>>
	where
		B: ?Sized + Serialize,
	{
		self.api
			.request(ApiRequest::post(format!("/status/space/{space_id}")).json(attributes)?)
			.await
	}

	/// Edits a status message.
	pub async fn update<B>(&self, status_id: u64, attributes: &B) -> Result<Envelope<Value>>
	where
		B: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::put(format!("/status/{status_id}")).json(attributes)?).await
	}

	/// Deletes a status message.
	pub async fn delete(&self, status_id: u64) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::delete(format!("/status/{status_id}"))).await
	}
}
