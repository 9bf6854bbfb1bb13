//! Items, their field values, revisions, and references.

// self
use crate::{
	_prelude::*,
	api::WriteOptions,
	http::HttpClient,
	transport::{self, ApiRequest, Envelope, TransportErrorMapper},
};

def_resource!(Items, items, "Item endpoints (`/item`).");

/// An item of an app.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
	/// Item identifier.
	pub item_id: u64,
	/// Per-app sequential identifier.
	pub app_item_id: Option<u64>,
	/// Item title.
	pub title: Option<String>,
	/// Caller-assigned external identifier.
	pub external_id: Option<String>,
	/// Web link to the item.
	pub link: Option<String>,
	/// Field values.
	pub fields: Vec<Value>,
	/// Remaining fields, as returned.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Result of creating or updating an item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemRevision {
	/// Item identifier; only present on create.
	pub item_id: Option<u64>,
	/// Revision number produced by the write.
	pub revision: Option<u64>,
	/// Resulting item title.
	pub title: Option<String>,
	/// Remaining fields, as returned.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Page of items returned by the filter endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemFilter {
	/// Number of items matching the filter.
	pub filtered: u64,
	/// Number of items in the app.
	pub total: u64,
	/// Items in this page.
	pub items: Vec<Item>,
	/// Remaining fields, as returned.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Item count for an app.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCount {
	/// Number of items.
	pub count: u64,
}

/// One revision of an item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Revision {
	/// Revision number.
	pub revision: u64,
	/// Creation timestamp, as returned.
	pub created_on: Option<String>,
	/// Remaining fields, as returned.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

/// Spreadsheet format for [`Items::export`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
	/// Legacy Excel.
	Xls,
	/// Office Open XML.
	Xlsx,
}
impl ExportFormat {
	/// Path segment naming the exporter.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Xls => "xls",
			Self::Xlsx => "xlsx",
		}
	}
}

/// Batch created by [`Items::export`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemExport {
	/// Batch identifier to poll for the finished file.
	pub batch_id: u64,
}

/// Value range of a numeric field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldRange {
	/// Smallest value, or `None` when the field is empty everywhere.
	pub min: Option<f64>,
	/// Largest value.
	pub max: Option<f64>,
}

impl<C, M> Items<'_, C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// Returns one item.
	pub async fn get(&self, item_id: u64) -> Result<Envelope<Item>> {
		self.api.request(ApiRequest::get(format!("/item/{item_id}"))).await
	}

	/// Returns an item by its per-app identifier.
	pub async fn get_by_app_item_id(
		&self,
		app_id: u64,
		app_item_id: u64,
	) -> Result<Envelope<Item>> {
		self.api.request(ApiRequest::get(format!("/app/{app_id}/item/{app_item_id}"))).await
	}

	/// Returns an item by its external identifier.
	pub async fn get_by_external_id(
		&self,
		app_id: u64,
		external_id: &str,
	) -> Result<Envelope<Item>> {
		let external_id = transport::path_segment(external_id);

		self.api
			.request(ApiRequest::get(format!("/item/app/{app_id}/external_id/{external_id}")))
			.await
	}

	/// Creates an item in an app.
	pub async fn create<B>(
		&self,
		app_id: u64,
		attributes: &B,
		options: WriteOptions,
	) -> Result<Envelope<ItemRevision>>
	where
		B: ?Sized + Serialize,
	{
		let request = ApiRequest::post(format!("/item/app/{app_id}/"));

		self.api.request(options.apply(request).json(attributes)?).await
	}

	/// Updates an item.
	pub async fn update<B>(
		&self,
		item_id: u64,
		attributes: &B,
		options: WriteOptions,
	) -> Result<Envelope<ItemRevision>>
	where
		B: ?Sized + Serialize,
	{
		self.api
			.request(options.apply(ApiRequest::put(format!("/item/{item_id}/"))).json(attributes)?)
			.await
	}

	/// Deletes an item.
	pub async fn delete(&self, item_id: u64, options: WriteOptions) -> Result<Envelope<Value>> {
		self.api.request(options.apply(ApiRequest::delete(format!("/item/{item_id}/")))).await
	}

	/// Deletes the items of an app selected by `attributes` (item ids or filters).
	pub async fn bulk_delete<B>(
		&self,
		app_id: u64,
		attributes: &B,
		options: WriteOptions,
	) -> Result<Envelope<Value>>
	where
		B: ?Sized + Serialize,
	{
		let request = ApiRequest::post(format!("/item/app/{app_id}/delete"));

		self.api.request(options.apply(request).json(attributes)?).await
	}

	/// Creates a copy of an item in the same app.
	pub async fn clone_item(
		&self,
		item_id: u64,
		options: WriteOptions,
	) -> Result<Envelope<ItemRevision>> {
		self.api.request(options.apply(ApiRequest::post(format!("/item/{item_id}/clone")))).await
	}

	/// Filters the items of an app.
	pub async fn filter<B>(&self, app_id: u64, attributes: &B) -> Result<Envelope<ItemFilter>>
	where
		B: ?Sized + Serialize,
	{
		self.api
			.request(ApiRequest::post(format!("/item/app/{app_id}/filter/")).json(attributes)?)
			.await
	}

	/// Returns the items matched by a saved view.
	pub async fn filter_by_view<B>(
		&self,
		app_id: u64,
		view_id: u64,
		attributes: &B,
	) -> Result<Envelope<ItemFilter>>
	where
		B: ?Sized + Serialize,
	{
		let request = ApiRequest::post(format!("/item/app/{app_id}/filter/{view_id}/"));

		self.api.request(request.json(attributes)?).await
	}

	/// Counts the items of an app.
	pub async fn count(&self, app_id: u64) -> Result<Envelope<ItemCount>> {
		self.api.request(ApiRequest::get(format!("/item/app/{app_id}/count"))).await
	}

	/// Returns every field value of an item.
	pub async fn get_values(&self, item_id: u64) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::get(format!("/item/{item_id}/value/v2"))).await
	}

	/// Returns the value of one field, by field id or external id.
	pub async fn get_field_value(&self, item_id: u64, field: &str) -> Result<Envelope<Value>> {
		let field = transport::path_segment(field);

		self.api.request(ApiRequest::get(format!("/item/{item_id}/value/{field}/v2"))).await
	}

	/// Updates several field values at once.
	pub async fn update_values<B>(
		&self,
		item_id: u64,
		attributes: &B,
		options: WriteOptions,
	) -> Result<Envelope<ItemRevision>>
	where
		B: ?Sized + Serialize,
	{
		let request = ApiRequest::put(format!("/item/{item_id}/value"));

		self.api.request(options.apply(request).json(attributes)?).await
	}

	/// Updates the value of one field.
	pub async fn update_field<B>(
		&self,
		item_id: u64,
		field_id: u64,
		attributes: &B,
		options: WriteOptions,
	) -> Result<Envelope<ItemRevision>>
	where
		B: ?Sized + Serialize,
	{
		let request = ApiRequest::put(format!("/item/{item_id}/value/{field_id}"));

		self.api.request(options.apply(request).json(attributes)?).await
	}

	/// Returns the latest revisions of an item.
	pub async fn revisions(&self, item_id: u64) -> Result<Envelope<Vec<Revision>>> {
		self.api.request(ApiRequest::get(format!("/item/{item_id}/revision/"))).await
	}

	/// Returns the field differences between two revisions.
	pub async fn revision_difference(
		&self,
		item_id: u64,
		revision_from: u64,
		revision_to: u64,
	) -> Result<Envelope<Vec<Value>>> {
		let path = format!("/item/{item_id}/revision/{revision_from}/{revision_to}");

		self.api.request(ApiRequest::get(path)).await
	}

	/// Reverts the changes made in one revision.
	pub async fn revert(&self, item_id: u64, revision: u64) -> Result<Envelope<ItemRevision>> {
		self.api.request(ApiRequest::delete(format!("/item/{item_id}/revision/{revision}"))).await
	}

	/// Restores the item to the state it had at `revision`.
	pub async fn revert_to(&self, item_id: u64, revision: u64) -> Result<Envelope<ItemRevision>> {
		self.api
			.request(ApiRequest::post(format!("/item/{item_id}/revision/{revision}/revert_to")))
			.await
	}

	/// Returns the items referencing this item, grouped by app.
	pub async fn get_references(&self, item_id: u64) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::get(format!("/item/{item_id}/reference/"))).await
	}

	/// Removes the item's reference, if any.
	pub async fn delete_reference(&self, item_id: u64) -> Result<Envelope<Value>> {
		self.api.request(ApiRequest::delete(format!("/item/{item_id}/ref"))).await
	}

	/// Runs a calculation (sum, count, ...) over the app's items.
	pub async fn calculate<B>(&self, app_id: u64, attributes: &B) -> Result<Envelope<Value>>
	where
		B: ?Sized + Serialize,
	{
		self.api
			.request(ApiRequest::post(format!("/item/app/{app_id}/calculate")).json(attributes)?)
			.await
	}

	/// Starts a batch exporting the app's items; the response carries the batch id.
	pub async fn export<B>(
		&self,
		app_id: u64,
		format: ExportFormat,
		attributes: &B,
	) -> Result<Envelope<ItemExport>>
	where
		B: ?Sized + Serialize,
	{
		let request = ApiRequest::post(format!("/item/app/{app_id}/export/{}", format.as_str()));

		self.api.request(request.json(attributes)?).await
	}

	/// Finds items that can be referenced from an app field, matching `attributes` (`text`,
	/// `limit`, ...).
	pub async fn find_for_field<Q>(&self, field_id: u64, attributes: &Q) -> Result<Envelope<Value>>
	where
		Q: ?Sized + Serialize,
	{
		let request = ApiRequest::get(format!("/item/field/{field_id}/find"));

		self.api.request(request.query_object(attributes)?).await
	}

	/// Returns the smallest and largest values of a number, money or calculation field.
	pub async fn field_range(&self, field_id: u64) -> Result<Envelope<FieldRange>> {
		self.api.request(ApiRequest::get(format!("/item/field/{field_id}/range"))).await
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn field_range_tolerates_empty_fields() {
		let range: FieldRange = serde_json::from_str(r#"{"min":null,"max":12.5}"#)
			.expect("Range payload should deserialize.");

		assert_eq!(range, FieldRange { min: None, max: Some(12.5) });
		assert_eq!(ExportFormat::Xlsx.as_str(), "xlsx");
	}

	#[test]
	fn filter_page_decodes_items() {
		let page: ItemFilter = serde_json::from_value(serde_json::json!({
			"filtered": 1,
			"total": 3,
			"items": [{ "item_id": 11, "title": "Launch", "rights": ["view"] }],
		}))
		.expect("Filter payload should deserialize.");

		assert_eq!(page.filtered, 1);
		assert_eq!(page.items[0].item_id, 11);
		assert_eq!(page.items[0].title.as_deref(), Some("Launch"));
		assert!(page.items[0].extra.contains_key("rights"));
	}

	#[test]
	fn write_results_tolerate_missing_fields() {
		let created: ItemRevision = serde_json::from_value(serde_json::json!({
			"item_id": 11,
			"title": "Launch",
		}))
		.expect("Create payload should deserialize.");

		assert_eq!(created.item_id, Some(11));
		assert_eq!(created.revision, None);
	}
}
