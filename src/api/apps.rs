//! Applications and their fields.

// self
use crate::{
	_prelude::*,
	api::WriteOptions,
	http::HttpClient,
	transport::{self, ApiRequest, Envelope, TransportErrorMapper},
};

def_resource!(Apps, apps, "Application endpoints (`/app`).");

/// An application definition.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct App {
	/// Application identifier.
	pub app_id: u64,
	/// Owning space.
	pub space_id: Option<u64>,
	/// `active`, `inactive`, or `deleted`.
	pub status: Option<String>,
	/// URL label used in web links.
	pub url_label: Option<String>,
	/// Web link to the app.
	pub link: Option<String>,
	/// App configuration (name, item name, icon, ...).
	pub config: Option<Value>,
	/// Field definitions.
	pub fields: Vec<AppField>,
	/// Remaining fields, as returned.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// A field of an application.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppField {
	/// Field identifier.
	pub field_id: u64,
	/// Stable external identifier.
	pub external_id: Option<String>,
	/// Field type (`text`, `category`, `date`, ...).
	#[serde(rename = "type")]
	pub kind: Option<String>,
	/// Display label.
	pub label: Option<String>,
	/// Field configuration.
	pub config: Option<Value>,
	/// Remaining fields, as returned.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Identifier returned when an app is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedApp {
	/// New application identifier.
	pub app_id: u64,
}

/// Identifier returned when a field is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedField {
	/// New field identifier.
	pub field_id: u64,
}

impl<C, M> Apps<'_, C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Returns one app.
	pub async fn get(&self, app_id: u64) -> Result<Envelope<App>> {
		self.api.request(ApiRequest::get(format!("/app/{app_id}"))).await
	}

	/// Returns the apps visible to the user, filtered by `attributes` (query parameters).
	pub async fn get_all<Q>(&self, attributes: &Q) -> Result<Envelope<Vec<App>>>
	where
		Q: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::get("/app/").query_object(attributes)?).await
	}

	/// Returns the apps in a space.
	pub async fn get_for_space<Q>(
		&self,
		space_id: u64,
		attributes: &Q,
	) -> Result<Envelope<Vec<App>>>
	where
		Q: ?Sized + Serialize,
	{
		self.api
			.request(ApiRequest::get(format!("/app/space/{space_id}/")).query_object(attributes)?)
			.await
	}

	/// Resolves an app from its organization, space, and app URL labels.
	pub async fn get_by_labels(
		&self,
		org_label: &str,
		space_label: &str,
		app_label: &str,
	) -> Result<Envelope<App>> {
		let path = format!(
			"/app/org/{}/space/{}/{}",
			transport::path_segment(org_label),
			transport::path_segment(space_label),
			transport::path_segment(app_label),
		);

		self.api.request(ApiRequest::get(path)).await
	}

	/// Creates an app.
	pub async fn create<B>(
		&self,
		attributes: &B,
		options: WriteOptions,
	) -> Result<Envelope<CreatedApp>>
	where
		B: ?Sized + Serialize,
	{
		self.api.request(options.apply(ApiRequest::post("/app/")).json(attributes)?).await
	}

	/// Replaces the app definition.
	pub async fn update<B>(
		&self,
		app_id: u64,
		attributes: &B,
		options: WriteOptions,
	) -> Result<Envelope<Value>>
	where
		B: ?Sized + Serialize,
	{
		self.api
			.request(options.apply(ApiRequest::put(format!("/app/{app_id}/v2/"))).json(attributes)?)
			.await
	}

	/// Activates a deactivated app.
	pub async fn activate(&self, app_id: u64) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::post(format!("/app/{app_id}/activate"))).await
	}

	/// Deactivates an app.
	pub async fn deactivate(&self, app_id: u64) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::post(format!("/app/{app_id}/deactivate"))).await
	}

	/// Deletes an app and all of its items.
	pub async fn delete(&self, app_id: u64, silent: bool) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::delete(format!("/app/{app_id}")).query("silent", silent)).await
	}

	/// Adds a field to an app.
	pub async fn create_field<B>(
		&self,
		app_id: u64,
		attributes: &B,
	) -> Result<Envelope<CreatedField>>
	where
		B: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::post(format!("/app/{app_id}/field/")).json(attributes)?).await
	}

	/// Updates a field's configuration.
	pub async fn update_field<B>(
		&self,
		app_id: u64,
		field_id: u64,
		attributes: &B,
	) -> Result<Envelope<Value>>
	where
		B: ?Sized + Serialize,
	{
		self.api
			.request(ApiRequest::put(format!("/app/{app_id}/field/{field_id}")).json(attributes)?)
			.await
	}

	/// Deletes a field; `attributes` may carry `delete_values`.
	pub async fn delete_field<B>(
		&self,
		app_id: u64,
		field_id: u64,
		attributes: &B,
	) -> Result<Envelope<Value>>
	where
		B: ?Sized + Serialize,
	{
		let request = ApiRequest::delete(format!("/app/{app_id}/field/{field_id}"));

		self.api.request(request.json(attributes)?).await
	}

	/// Returns the apps this app depends on.
	pub async fn dependencies(&self, app_id: u64) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::get(format!("/app/{app_id}/dependencies/"))).await
	}

	/// Installs a copy of the app into another space.
	pub async fn install<B>(&self, app_id: u64, attributes: &B) -> Result<Envelope<CreatedApp>>
	where
		B: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::post(format!("/app/{app_id}/install")).json(attributes)?).await
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn app_keeps_unknown_fields() {
		let app: App = serde_json::from_value(serde_json::json!({
			"app_id": 5,
			"status": "active",
			"fields": [{ "field_id": 9, "type": "text", "label": "Title", "status": "active" }],
			"rights": ["view"],
		}))
		.expect("App payload should deserialize.");

		assert_eq!(app.app_id, 5);
		assert_eq!(app.fields[0].kind.as_deref(), Some("text"));
		assert_eq!(app.fields[0].extra.get("status"), Some(&Value::from("active")));
		assert!(app.extra.contains_key("rights"));
		assert!(app.space_id.is_none());
	}
}
