// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use podio_client::{
	api::{Api, CommentPage, ExportFormat, TaskField, TaskTime, WriteOptions},
	auth::TokenState,
	error::{ConfigError, Error, ErrorKind},
	http::ReqwestHttpClient,
	transport::{ReqwestTransport, ReqwestTransportErrorMapper},
};
use serde_json::{Value, json};

type ReqwestApi = Api<ReqwestHttpClient, ReqwestTransportErrorMapper>;

fn api(server: &MockServer, access_token: &str) -> ReqwestApi {
	let transport = ReqwestTransport::reqwest().with_base_url(server.base_url());

	Api::new(transport, TokenState { access_token: access_token.into(), ..Default::default() })
}

#[tokio::test]
async fn item_create_sends_write_options_and_json_body() -> Result<()> {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/item/app/12/")
				.header("authorization", "OAuth2 T1")
				.header("content-type", "application/json")
				.query_param("silent", "true")
				.query_param("hook", "false")
				.json_body(json!({ "fields": { "title": "Launch" } }));
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"item_id":99,"revision":0,"title":"Launch"}"#);
		})
		.await;
	let created = api(&server, "T1")
		.items()
		.create(
			12,
			&json!({ "fields": { "title": "Launch" } }),
			WriteOptions::default().with_silent(true).with_hook(false),
		)
		.await?;

	mock.assert_async().await;

	assert_eq!(created.data.item_id, Some(99));
	assert_eq!(created.data.revision, Some(0));

	Ok(())
}

#[tokio::test]
async fn default_write_options_are_sent_explicitly() -> Result<()> {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/comment/item/7")
				.query_param("alert_invite", "false")
				.query_param("silent", "false")
				.query_param("hook", "true")
				.json_body(json!({ "value": "Looks good" }));
			then.status(200).body(r#"{"comment_id":3,"value":"Looks good"}"#);
		})
		.await;
	let comment = api(&server, "T1")
		.comments()
		.create("item", 7, &json!({ "value": "Looks good" }), false, WriteOptions::default())
		.await?;

	mock.assert_async().await;

	assert_eq!(comment.data.comment_id, 3);

	Ok(())
}

#[tokio::test]
async fn comment_listing_pages_with_offset_and_limit() -> Result<()> {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/comment/task/4")
				.query_param("offset", "0")
				.query_param("limit", "100");
			then.status(200).body("[]");
		})
		.await;
	let comments =
		api(&server, "T1").comments().get_for("task", 4, CommentPage::default()).await?;

	mock.assert_async().await;

	assert!(comments.data.is_empty());

	Ok(())
}

#[tokio::test]
async fn search_merges_words_into_attributes() -> Result<()> {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/search/space/8/")
				.json_body(json!({ "query": "invoice", "limit": 5, "ref_type": "item" }));
			then.status(200).body(r#"[{"id":1,"type":"item","title":"Invoice 42"}]"#);
		})
		.await;
	let hits = api(&server, "T1")
		.search()
		.in_space(8, "invoice", &json!({ "limit": 5, "ref_type": "item", "query": "stale" }))
		.await?;

	mock.assert_async().await;

	assert_eq!(hits.data[0].kind.as_deref(), Some("item"));
	assert_eq!(hits.data[0].title.as_deref(), Some("Invoice 42"));

	Ok(())
}

#[tokio::test]
async fn search_rejects_non_object_attributes_before_sending() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST);
			then.status(200).body("[]");
		})
		.await;
	let err = api(&server, "T1")
		.search()
		.globally("invoice", &json!(["not", "an", "object"]))
		.await
		.expect_err("Array attributes should be rejected.");

	assert!(matches!(err, Error::Config(ConfigError::SerializeBody(_))));

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn filter_query_object_flattens_into_parameters() -> Result<()> {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/task/")
				.query_param("completed", "false")
				.query_param("limit", "10")
				.query_param("grouping", "due_date");
			then.status(200).body(r#"[{"task_id":1,"text":"Call back"}]"#);
		})
		.await;
	let tasks = api(&server, "T1")
		.tasks()
		.get_all(&json!({
			"completed": false,
			"limit": 10,
			"grouping": "due_date",
			"space": null,
		}))
		.await?;

	mock.assert_async().await;

	assert_eq!(tasks.data.len(), 1);
	assert_eq!(tasks.data[0].text.as_deref(), Some("Call back"));

	Ok(())
}

#[tokio::test]
async fn expired_token_surfaces_authorization_error() {
	let server = MockServer::start_async().await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/user/status").header("authorization", "OAuth2 stale");
			then.status(401).body(
				r#"{"error":"invalid_token","error_description":"expired_token","error_propagate":false}"#,
			);
		})
		.await;

	let err = api(&server, "stale")
		.users()
		.status()
		.await
		.expect_err("Expired token should be rejected.");

	assert_eq!(err.kind(), Some(ErrorKind::Authorization));
	assert_eq!(err.as_api().map(|e| e.message.as_str()), Some("expired_token"));
}

#[tokio::test]
async fn raw_requests_reach_untyped_endpoints() -> Result<()> {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(PUT)
				.path("/space/3/member/9")
				.header("authorization", "OAuth2 T1")
				.json_body(json!({ "role": "admin" }));
			then.status(204);
		})
		.await;
	let envelope = api(&server, "T1")
		.raw()
		.put::<Value, _>("/space/3/member/9", &json!({ "role": "admin" }))
		.await?;

	mock.assert_async().await;

	assert_eq!(envelope.data, Value::Null);

	Ok(())
}

#[tokio::test]
async fn task_field_updates_and_summaries_use_their_own_paths() -> Result<()> {
	let server = MockServer::start_async().await;
	let due = server
		.mock_async(|when, then| {
			when.method(PUT)
				.path("/task/5/due")
				.query_param("silent", "true")
				.query_param("hook", "true")
				.json_body(json!({ "due_date": "2026-11-01" }));
			then.status(204);
		})
		.await;
	let space = server
		.mock_async(|when, then| {
			when.method(GET).path("/task/space/8/summary").query_param("limit", "3");
			then.status(200).body(r#"{"overdue":{"total":1,"tasks":[]}}"#);
		})
		.await;
	let totals = server
		.mock_async(|when, then| {
			when.method(GET).path("/task/total/overdue");
			then.status(200).body("4");
		})
		.await;
	let api = api(&server, "T1");
	let tasks = api.tasks();

	tasks
		.update_field(
			5,
			TaskField::Due,
			&json!({ "due_date": "2026-11-01" }),
			WriteOptions::default().with_silent(true),
		)
		.await?;

	let summary = tasks.summary_for_space(8, &json!({ "limit": 3 })).await?;
	let overdue = tasks.totals_by_time(TaskTime::Overdue, &()).await?;

	due.assert_async().await;
	space.assert_async().await;
	totals.assert_async().await;

	assert_eq!(summary.data["overdue"]["total"], 1);
	assert_eq!(overdue.data, json!(4));

	Ok(())
}

#[tokio::test]
async fn item_export_is_tracked_through_its_batch() -> Result<()> {
	let server = MockServer::start_async().await;
	let export = server
		.mock_async(|when, then| {
			when.method(POST).path("/item/app/12/export/xlsx").json_body(json!({ "limit": 50 }));
			then.status(200).body(r#"{"batch_id":77}"#);
		})
		.await;
	let range = server
		.mock_async(|when, then| {
			when.method(GET).path("/item/field/31/range");
			then.status(200).body(r#"{"min":2,"max":40.5}"#);
		})
		.await;
	let status = server
		.mock_async(|when, then| {
			when.method(GET).path("/batch/77");
			then.status(200).body(r#"{"batch_id":77,"status":"running","completed":3,"count":9}"#);
		})
		.await;
	let api = api(&server, "T1");
	let batch = api.items().export(12, ExportFormat::Xlsx, &json!({ "limit": 50 })).await?;
	let bounds = api.items().field_range(31).await?;
	let progress = api.batches().get(batch.data.batch_id).await?;

	export.assert_async().await;
	range.assert_async().await;
	status.assert_async().await;

	assert_eq!(progress.data.status.as_deref(), Some("running"));
	assert_eq!(progress.data.completed, Some(3));
	assert_eq!(bounds.data.min, Some(2.0));
	assert_eq!(bounds.data.max, Some(40.5));

	Ok(())
}
