//! Comments on objects.

// self
use crate::{
	_prelude::*,
	api::WriteOptions,
	http::HttpClient,
	transport::{self, ApiRequest, Envelope, TransportErrorMapper},
};

def_resource!(Comments, comments, "Comment endpoints (`/comment`).");

/// A comment.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
	/// Comment identifier.
	pub comment_id: u64,
	/// Plain-text value.
	pub value: Option<String>,
	/// Rich-text value.
	pub rich_value: Option<String>,
	/// Creation timestamp, as returned.
	pub created_on: Option<String>,
	/// Remaining fields, as returned.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Paging for [`Comments::get_for`]; defaults to the first 100 comments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommentPage {
	/// Number of comments to skip.
	pub offset: u32,
	/// Maximum number of comments to return.
	pub limit: u32,
}
impl Default for CommentPage {
	fn default() -> Self {
		Self { offset: 0, limit: 100 }
	}
}

impl<C, M> Comments<'_, C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Returns one comment.
	pub async fn get(&self, comment_id: u64) -> Result<Envelope<Comment>> {
		self.api.request(ApiRequest::get(format!("/comment/{comment_id}"))).await
	}

	/// Returns the comments on an object.
	pub async fn get_for(
		&self,
		ref_type: &str,
		ref_id: u64,
		page: CommentPage,
	) -> Result<Envelope<Vec<Comment>>> {
		let ref_type = transport::path_segment(ref_type);
		let request = ApiRequest::get(format!("/comment/{ref_type}/{ref_id}"))
			.query("offset", page.offset)
			.query("limit", page.limit);

		self.api.request(request).await
	}

	/// Adds a comment to an object. `alert_invite` invites mentioned users who lack access.
	pub async fn create<B>(
		&self,
		ref_type: &str,
		ref_id: u64,
		attributes: &B,
		alert_invite: bool,
		options: WriteOptions,
	) -> Result<Envelope<Comment>>
	where
		B: ?Sized + Serialize,
	{
		let ref_type = transport::path_segment(ref_type);
		let request = ApiRequest::post(format!("/comment/{ref_type}/{ref_id}"))
			.query("alert_invite", alert_invite);

		self.api.request(options.apply(request).json(attributes)?).await
	}

	/// Updates a comment.
	pub async fn update<B>(&self, comment_id: u64, attributes: &B) -> Result<Envelope<Value>>
	where
		B: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::put(format!("/comment/{comment_id}")).json(attributes)?).await
	}

	/// Deletes a comment.
	pub async fn delete(&self, comment_id: u64) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::delete(format!("/comment/{comment_id}"))).await
	}

	/// Returns the edit history of a comment.
	pub async fn revisions(&self, comment_id: u64) -> Result<Envelope<Vec<Value>>> {
		self.api.request(ApiRequest::get(format!("/comment/{comment_id}/revision"))).await
	}
}
