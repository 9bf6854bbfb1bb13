//! Tasks and task labels.

// self
use crate::{
	_prelude::*,
	api::WriteOptions,
	http::HttpClient,
	transport::{self, ApiRequest, Envelope, TransportErrorMapper},
};

def_resource!(Tasks, tasks, "Task endpoints (`/task`).");

/// A task.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
	/// Task identifier.
	pub task_id: u64,
	/// Task text.
	pub text: Option<String>,
	/// `active`, `completed`, or `deleted`.
	pub status: Option<String>,
	/// Due date, as returned.
	pub due_date: Option<String>,
	/// Whether the task is private.
	pub private: Option<bool>,
	/// Web link to the task.
	pub link: Option<String>,
	/// Object the task is attached to.
	#[serde(rename = "ref")]
	pub reference: Option<Value>,
	/// Remaining fields, as returned.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// A task label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskLabel {
	/// Label identifier.
	pub label_id: u64,
	/// Label text.
	pub text: String,
	/// Hex color without `#`.
	pub color: Option<String>,
}

/// Identifier returned when a label is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedLabel {
	/// New label identifier.
	pub label_id: u64,
}

/// Task count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCount {
	/// Number of tasks.
	pub count: u64,
}

/// Single task property updated through [`Tasks::update_field`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskField {
	/// `description`
	Description,
	/// `due` (due date and time)
	Due,
	/// `private`
	Private,
	/// `ref` (attached object)
	Reference,
	/// `text`
	Text,
}
impl TaskField {
	/// Path segment addressing the field.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Description => "description",
			Self::Due => "due",
			Self::Private => "private",
			Self::Reference => "ref",
			Self::Text => "text",
		}
	}
}

/// Window for [`Tasks::totals_by_time`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskTime {
	/// Past due.
	Overdue,
	/// Due in the future.
	Due,
	/// Due today.
	Today,
	/// Every active task.
	All,
}
impl TaskTime {
	/// Path segment naming the window.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Overdue => "overdue",
			Self::Due => "due",
			Self::Today => "today",
			Self::All => "all",
		}
	}
}

impl<C, M> Tasks<'_, C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Returns one task.
	pub async fn get(&self, task_id: u64) -> Result<Envelope<Task>> {
		self.api.request(ApiRequest::get(format!("/task/{task_id}"))).await
	}

	/// Returns tasks matching `attributes` (query parameters such as `completed`, `grouping`).
	pub async fn get_all<Q>(&self, attributes: &Q) -> Result<Envelope<Vec<Task>>>
	where
		Q: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::get("/task/").query_object(attributes)?).await
	}

	/// Creates a standalone task.
	pub async fn create<B>(&self, attributes: &B) -> Result<Envelope<Task>>
	where
		B: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::post("/task/").json(attributes)?).await
	}

	/// Creates a task attached to an object (`item`, `status`, `space`, ...).
	pub async fn create_for<B>(
		&self,
		ref_type: &str,
		ref_id: u64,
		attributes: &B,
		options: WriteOptions,
	) -> Result<Envelope<Task>>
	where
		B: ?Sized + Serialize,
	{
		let ref_type = transport::path_segment(ref_type);
		let request = ApiRequest::post(format!("/task/{ref_type}/{ref_id}/"));

		self.api.request(options.apply(request).json(attributes)?).await
	}

	/// Updates a task.
	pub async fn update<B>(
		&self,
		task_id: u64,
		attributes: &B,
		options: WriteOptions,
	) -> Result<Envelope<Value>>
	where
		B: ?Sized + Serialize,
	{
		self.api
			.request(options.apply(ApiRequest::put(format!("/task/{task_id}"))).json(attributes)?)
			.await
	}

	/// Updates one property of a task; `attributes` carries the new value.
	pub async fn update_field<B>(
		&self,
		task_id: u64,
		field: TaskField,
		attributes: &B,
		options: WriteOptions,
	) -> Result<Envelope<Value>>
	where
		B: ?Sized + Serialize,
	{
		let request = ApiRequest::put(format!("/task/{task_id}/{}", field.as_str()));

		self.api.request(options.apply(request).json(attributes)?).await
	}

	/// Replaces the labels on a task; `labels` is the list of label ids.
	pub async fn update_labels<B>(&self, task_id: u64, labels: &B) -> Result<Envelope<Value>>
	where
		B: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::put(format!("/task/{task_id}/label/")).json(labels)?).await
	}

	/// Detaches a task from the object it references.
	pub async fn delete_reference(&self, task_id: u64) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::delete(format!("/task/{task_id}/ref"))).await
	}

	/// Deletes a task.
	pub async fn delete(&self, task_id: u64) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::delete(format!("/task/{task_id}"))).await
	}

	/// Assigns a task; `attributes` carries `responsible`.
	pub async fn assign<B>(&self, task_id: u64, attributes: &B) -> Result<Envelope<Value>>
	where
		B: ?Sized + Serialize,
	{
		self.api
			.request(ApiRequest::post(format!("/task/{task_id}/assign")).json(attributes)?)
			.await
	}

	/// Marks a task as completed. Recurring tasks return the id of the next occurrence.
	pub async fn complete(&self, task_id: u64) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::post(format!("/task/{task_id}/complete"))).await
	}

	/// Reopens a completed task.
	pub async fn incomplete(&self, task_id: u64, options: WriteOptions) -> Result<Envelope<Value>> {
		let request = ApiRequest::post(format!("/task/{task_id}/incomplete"));

		self.api.request(options.apply(request)).await
	}

	/// Moves a task relative to others (`before`/`after`).
	pub async fn rank<B>(&self, task_id: u64, attributes: &B) -> Result<Envelope<Value>>
	where
		B: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::post(format!("/task/{task_id}/rank")).json(attributes)?).await
	}

	/// Returns the user's task summary (overdue, today, other).
	pub async fn summary<Q>(&self, attributes: &Q) -> Result<Envelope<Value>>
	where
		Q: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::get("/task/summary").query_object(attributes)?).await
	}

	/// Returns the user's task summary within an organization.
	pub async fn summary_for_org<Q>(&self, org_id: u64, attributes: &Q) -> Result<Envelope<Value>>
	where
		Q: ?Sized + Serialize,
	{
		let request = ApiRequest::get(format!("/task/org/{org_id}/summary"));

		self.api.request(request.query_object(attributes)?).await
	}

	/// Returns the user's task summary within a space.
	pub async fn summary_for_space<Q>(
		&self,
		space_id: u64,
		attributes: &Q,
	) -> Result<Envelope<Value>>
	where
		Q: ?Sized + Serialize,
	{
		let request = ApiRequest::get(format!("/task/space/{space_id}/summary"));

		self.api.request(request.query_object(attributes)?).await
	}

	/// Returns the task summary for an object the tasks are attached to.
	pub async fn summary_for_reference<Q>(
		&self,
		ref_type: &str,
		ref_id: u64,
		attributes: &Q,
	) -> Result<Envelope<Value>>
	where
		Q: ?Sized + Serialize,
	{
		let ref_type = transport::path_segment(ref_type);
		let request = ApiRequest::get(format!("/task/{ref_type}/{ref_id}/summary"));

		self.api.request(request.query_object(attributes)?).await
	}

	/// Returns the summary of personal tasks and tasks in personal spaces.
	pub async fn summary_personal<Q>(&self, attributes: &Q) -> Result<Envelope<Value>>
	where
		Q: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::get("/task/personal/summary").query_object(attributes)?).await
	}

	/// Counts the user's active tasks falling in `time`.
	pub async fn totals_by_time<Q>(&self, time: TaskTime, attributes: &Q) -> Result<Envelope<Value>>
	where
		Q: ?Sized + Serialize,
	{
		let request = ApiRequest::get(format!("/task/total/{}", time.as_str()));

		self.api.request(request.query_object(attributes)?).await
	}

	/// Returns task totals.
	pub async fn totals<Q>(&self, attributes: &Q) -> Result<Envelope<Value>>
	where
		Q: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::get("/task/total/").query_object(attributes)?).await
	}

	/// Returns the user's task labels.
	pub async fn labels(&self) -> Result<Envelope<Vec<TaskLabel>>> {
		self.api.request(ApiRequest::get("/task/label/")).await
	}

	/// Creates a task label.
	pub async fn create_label<B>(&self, attributes: &B) -> Result<Envelope<CreatedLabel>>
	where
		B: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::post("/task/label/").json(attributes)?).await
	}

	/// Updates a task label.
	pub async fn update_label<B>(&self, label_id: u64, attributes: &B) -> Result<Envelope<Value>>
	where
		B: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::put(format!("/task/label/{label_id}")).json(attributes)?).await
	}

	/// Deletes a task label.
	pub async fn delete_label(&self, label_id: u64) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::delete(format!("/task/label/{label_id}"))).await
	}

	/// Counts the active tasks attached to an object.
	pub async fn count_by_reference(
		&self,
		ref_type: &str,
		ref_id: u64,
	) -> Result<Envelope<TaskCount>> {
		let ref_type = transport::path_segment(ref_type);

		self.api.request(ApiRequest::get(format!("/task/{ref_type}/{ref_id}/count"))).await
	}
}
