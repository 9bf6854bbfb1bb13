//! Private conversations.

// self
use crate::{
	_prelude::*,
	http::HttpClient,
	transport::{ApiRequest, Envelope, TransportErrorMapper},
};

def_resource!(Conversations, conversations, "Conversation endpoints (`/conversation`).");

/// A conversation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conversation {
	/// Conversation identifier.
	pub conversation_id: u64,
	/// Subject line.
	pub subject: Option<String>,
	/// Participants, as returned.
	pub participants: Vec<Value>,
	/// Remaining fields, as returned.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Identifiers returned when a conversation is created or replied to.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationMessage {
	/// Conversation identifier, when a conversation was created.
	pub conversation_id: Option<u64>,
	/// Message identifier, when a message was posted.
	pub message_id: Option<u64>,
	/// Remaining fields, as returned.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl<C, M> Conversations<'_, C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Returns one conversation.
	pub async fn get(&self, conversation_id: u64) -> Result<Envelope<Conversation>> {
		self.api.request(ApiRequest::get(format!("/conversation/{conversation_id}"))).await
	}

	/// Returns the user's conversations, newest first.
	pub async fn get_all(&self, limit: u32, offset: u32) -> Result<Envelope<Vec<Conversation>>> {
		let request =
			ApiRequest::get("/conversation/").query("limit", limit).query("offset", offset);

		self.api.request(request).await
	}

	/// Starts a conversation (`subject`, `text`, `participants`).
	pub async fn create<B>(&self, attributes: &B) -> Result<Envelope<ConversationMessage>>
	where
		B: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::post("/conversation/v2/").json(attributes)?).await
	}

	/// Replies to a conversation (`text`, optional `file_ids`).
	pub async fn reply<B>(
		&self,
		conversation_id: u64,
		attributes: &B,
	) -> Result<Envelope<ConversationMessage>>
	where
		B: ?Sized + Serialize,
	{
		let request = ApiRequest::post(format!("/conversation/{conversation_id}/reply/v2"));

		self.api.request(request.json(attributes)?).await
	}

	/// Marks a conversation as read.
	pub async fn mark_as_read(&self, conversation_id: u64) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::post(format!("/conversation/{conversation_id}/read"))).await
	}

	/// Leaves a conversation.
	pub async fn leave(&self, conversation_id: u64) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::post(format!("/conversation/{conversation_id}/leave"))).await
	}
}
