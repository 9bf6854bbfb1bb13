//! Background batch jobs (imports and exports).

// self
use crate::{
	_prelude::*,
	http::HttpClient,
	transport::{self, ApiRequest, Envelope, TransportErrorMapper},
};

def_resource!(Batches, batches, "Batch job endpoints (`/batch`).");

/// A batch job.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Batch {
	/// Batch identifier.
	pub batch_id: u64,
	/// `created`, `running`, `completed` or `failed`.
	pub status: Option<String>,
	/// Batch name.
	pub name: Option<String>,
	/// Number of completed steps.
	pub completed: Option<u64>,
	/// Total number of steps.
	pub count: Option<u64>,
	/// File produced by an export, once completed.
	pub file: Option<Value>,
	/// Remaining fields, as returned.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl<C, M> Batches<'_, C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Returns one batch.
	pub async fn get(&self, batch_id: u64) -> Result<Envelope<Batch>> {
		self.api.request(ApiRequest::get(format!("/batch/{batch_id}"))).await
	}

	/// Returns the user's batches.
	pub async fn get_all(&self) -> Result<Envelope<Vec<Batch>>> {
		self.api.request(ApiRequest::get("/batch/")).await
	}

	/// Returns the batches of `plugin` (`app_export`, `app_import`, ...) still running on an app
	/// or space.
	pub async fn running(
		&self,
		ref_type: &str,
		ref_id: u64,
		plugin: &str,
	) -> Result<Envelope<Vec<Batch>>> {
		let ref_type = transport::path_segment(ref_type);
		let plugin = transport::path_segment(plugin);
		let request = ApiRequest::get(format!("/batch/{ref_type}/{ref_id}/{plugin}/running/"));

		self.api.request(request).await
	}
}
