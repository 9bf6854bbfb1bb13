//! Webhook registrations.
//!
//! These endpoints only manage registrations; the client does not receive or dispatch hook
//! deliveries.

// self
use crate::{
	_prelude::*,
	http::HttpClient,
	transport::{self, ApiRequest, Envelope, TransportErrorMapper},
};

def_resource!(Hooks, hooks, "Webhook endpoints (`/hook`).");

/// A registered webhook.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hook {
	/// Hook identifier.
	pub hook_id: u64,
	/// Target URL.
	pub url: Option<String>,
	/// Event type (`item.create`, ...).
	#[serde(rename = "type")]
	pub kind: Option<String>,
	/// `active` or `inactive` (unverified).
	pub status: Option<String>,
	/// Remaining fields, as returned.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Identifier returned when a hook is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedHook {
	/// New hook identifier.
	pub hook_id: u64,
}

impl<C, M> Hooks<'_, C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Returns the hooks registered on an object (`app`, `space`, `app_field`).
	pub async fn get_for(&self, ref_type: &str, ref_id: u64) -> Result<Envelope<Vec<Hook>>> {
		let ref_type = transport::path_segment(ref_type);

		self.api.request(ApiRequest::get(format!("/hook/{ref_type}/{ref_id}/"))).await
	}

	/// Registers a hook (`url`, `type`) on an object.
	pub async fn create<B>(
		&self,
		ref_type: &str,
		ref_id: u64,
		attributes: &B,
	) -> Result<Envelope<CreatedHook>>
	where
		B: ?Sized + Serialize,
	{
		let ref_type = transport::path_segment(ref_type);

		self.api
			.request(ApiRequest::post(format!("/hook/{ref_type}/{ref_id}/")).json(attributes)?)
			.await
	}

	/// Deletes a hook.
	pub async fn delete(&self, hook_id: u64) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::delete(format!("/hook/{hook_id}"))).await
	}

	/// Asks the server to send a verification code to the hook URL.
	pub async fn request_verification(&self, hook_id: u64) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::post(format!("/hook/{hook_id}/verify/request"))).await
	}

	/// Activates a hook with the received verification `code`.
	pub async fn validate<B>(&self, hook_id: u64, attributes: &B) -> Result<Envelope<Value>>
	where
		B: ?Sized + Serialize,
	{
		self.api
			.request(ApiRequest::post(format!("/hook/{hook_id}/verify/validate")).json(attributes)?)
			.await
	}
}
