// std
use std::{collections::VecDeque, sync::Arc};
// crates.io
use color_eyre::Result;
use parking_lot::Mutex;
use podio_client::{
	auth::{Credentials, Grant, TokenState},
	error::{Error, ErrorKind},
	flows::{AuthSession, TOKEN_PATH},
	form,
	http::{HttpClient, HttpClientError, HttpFuture, HttpRequest, HttpResponse},
	oauth2::http::{Method, StatusCode, header::CONTENT_TYPE},
	transport::{self, TransportErrorMapper},
};

const TOKEN_BODY: &str = r#"{
	"access_token": "T1",
	"refresh_token": "R1",
	"token_type": "bearer",
	"scope": "S1",
	"expires_in": 28800,
	"ref": { "type": "app", "id": 42 }
}"#;

#[derive(Debug, thiserror::Error)]
#[error("connect ECONNREFUSED 127.0.0.1:443")]
struct ConnectionRefused;

enum Reply {
	Status(u16, &'static str),
	Refused,
}

#[derive(Default)]
struct RecordingHttpClient {
	replies: Mutex<VecDeque<Reply>>,
	seen: Mutex<Vec<HttpRequest>>,
}
impl RecordingHttpClient {
	fn replying(replies: impl IntoIterator<Item = Reply>) -> Arc<Self> {
		Arc::new(Self { replies: Mutex::new(replies.into_iter().collect()), ..Default::default() })
	}

	fn form_bodies(&self) -> Vec<Vec<(String, String)>> {
		self.seen
			.lock()
			.iter()
			.map(|request| {
				url::form_urlencoded::parse(request.body()).into_owned().collect::<Vec<_>>()
			})
			.collect()
	}
}
impl HttpClient for RecordingHttpClient {
	type TransportError = ConnectionRefused;

	fn execute(&self, request: HttpRequest) -> HttpFuture<'_, Self::TransportError> {
		let reply = self.replies.lock().pop_front().unwrap_or(Reply::Status(200, TOKEN_BODY));

		self.seen.lock().push(request);

		Box::pin(async move {
			match reply {
				Reply::Status(status, body) => {
					let mut response = HttpResponse::new(body.as_bytes().to_vec());

					*response.status_mut() =
						StatusCode::from_u16(status).expect("Canned status should be valid.");

					Ok(response)
				},
				Reply::Refused => Err(HttpClientError::Reqwest(Box::new(ConnectionRefused))),
			}
		})
	}
}

struct RefusedMapper;
impl TransportErrorMapper<ConnectionRefused> for RefusedMapper {
	fn map_transport_error(&self, error: HttpClientError<ConnectionRefused>) -> Error {
		match error {
			HttpClientError::Reqwest(inner) => transport::network_failure(*inner),
			other => transport::map_common_error(other),
		}
	}
}

fn session(
	client: &Arc<RecordingHttpClient>,
) -> AuthSession<RecordingHttpClient, RefusedMapper> {
	AuthSession::with_http_client(Credentials::new("cid", "csec"), client.clone(), RefusedMapper)
		.with_base_url("https://podio.test")
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
	items.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[tokio::test]
async fn app_auth_posts_form_and_stores_token() -> Result<()> {
	let client = RecordingHttpClient::replying([]);
	let session = session(&client);
	let token = session.app_auth(42, "apptok").await?;

	assert_eq!(token.access_token.expose(), "T1");
	assert_eq!(token.refresh_token.expose(), "R1");
	assert_eq!(token.scope, "S1");
	assert_eq!(token.expires_in, 28800);
	assert_eq!(token.reference.get("id"), Some(&serde_json::Value::from(42)));
	assert_eq!(session.current_token(), token);

	let seen = client.seen.lock();
	let request = &seen[0];

	assert_eq!(request.method(), Method::POST);
	assert_eq!(request.uri().to_string(), format!("https://podio.test{TOKEN_PATH}"));
	assert_eq!(
		request.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
		Some(form::CONTENT_TYPE)
	);

	drop(seen);

	assert_eq!(
		client.form_bodies()[0],
		pairs(&[
			("grant_type", "app"),
			("app_id", "42"),
			("app_token", "apptok"),
			("client_id", "cid"),
			("client_secret", "csec"),
		])
	);

	Ok(())
}

#[tokio::test]
async fn every_grant_sends_its_own_fields() -> Result<()> {
	let client = RecordingHttpClient::replying([
		Reply::Status(200, r#"{"access_token":"P1","refresh_token":"PR","expires_in":28800}"#),
		Reply::Status(200, r#"{"access_token":"C1","refresh_token":"CR","expires_in":28800}"#),
		Reply::Status(200, r#"{"access_token":"F1","refresh_token":"FR","expires_in":28800}"#),
	]);
	let session = session(&client);
	let password = session.password_auth("me@example.com", "p&ss=word").await?;

	assert_eq!(password.access_token.expose(), "P1");
	assert_eq!(session.current_token(), password);

	let code = session.authenticate_with_auth_code("c0de", "https://app.example.com/cb").await?;

	assert_eq!(code.access_token.expose(), "C1");
	assert_eq!(session.current_token(), code);

	let refreshed = session.authenticate_with_refresh_token("R0").await?;

	assert_eq!(refreshed.access_token.expose(), "F1");
	assert_eq!(refreshed.refresh_token.expose(), "FR");
	assert_eq!(session.current_token(), refreshed);

	let bodies = client.form_bodies();

	assert_eq!(
		bodies[0],
		pairs(&[
			("grant_type", "password"),
			("username", "me@example.com"),
			("password", "p&ss=word"),
			("client_id", "cid"),
			("client_secret", "csec"),
		])
	);
	assert_eq!(
		bodies[1],
		pairs(&[
			("grant_type", "authorization_code"),
			("code", "c0de"),
			("redirect_uri", "https://app.example.com/cb"),
			("client_id", "cid"),
			("client_secret", "csec"),
		])
	);
	assert_eq!(
		bodies[2],
		pairs(&[
			("grant_type", "refresh_token"),
			("refresh_token", "R0"),
			("client_id", "cid"),
			("client_secret", "csec"),
		])
	);

	Ok(())
}

#[tokio::test]
async fn repeating_a_grant_is_idempotent() -> Result<()> {
	let client = RecordingHttpClient::replying([]);
	let session = session(&client);
	let first = session.exchange(Grant::refresh_token("R1")).await?;
	let second = session.exchange(Grant::refresh_token("R1")).await?;

	assert_eq!(first, second);
	assert_eq!(session.current_token(), second);
	assert_eq!(client.seen.lock().len(), 2);

	Ok(())
}

#[tokio::test]
async fn rejected_grant_keeps_previous_token() -> Result<()> {
	let client = RecordingHttpClient::replying([
		Reply::Status(200, TOKEN_BODY),
		Reply::Status(
			409,
			r#"{"error":"conflict","error_description":"duplicate","error_propagate":true}"#,
		),
	]);
	let session = session(&client);
	let before = session.password_auth("me@example.com", "hunter2").await?;
	let err = session
		.password_auth("me@example.com", "hunter2")
		.await
		.expect_err("Conflicting grant should fail.");
	let api = err.as_api().expect("Conflict should surface as an API error.");

	assert_eq!(api.kind, ErrorKind::Conflict);
	assert_eq!(api.status_code, 409);
	assert_eq!(api.message, "duplicate");
	assert_eq!(api.response.as_ref().and_then(|r| r.error.as_deref()), Some("conflict"));
	assert_eq!(session.current_token(), before);

	Ok(())
}

#[tokio::test]
async fn network_failure_reports_status_zero() {
	let client = RecordingHttpClient::replying([Reply::Refused]);
	let session = session(&client);
	let err = session.app_auth(42, "apptok").await.expect_err("Refused connection should fail.");
	let api = err.as_api().expect("Network failure should surface as an API error.");

	assert_eq!(api.kind, ErrorKind::Generic);
	assert_eq!(api.status_code, 0);
	assert_eq!(api.message, "connect ECONNREFUSED 127.0.0.1:443");
	assert!(api.is_network_failure());
	assert_eq!(session.current_token(), TokenState::default());
}

#[tokio::test]
async fn api_uses_token_from_latest_grant() -> Result<()> {
	let client = RecordingHttpClient::replying([
		Reply::Status(200, TOKEN_BODY),
		Reply::Status(200, r#"{"user_id":7}"#),
	]);
	let session = session(&client);

	session.app_auth(42, "apptok").await?;

	let status = session.api().raw().get::<serde_json::Value, _>("/user/status", &()).await?;

	assert_eq!(status.data["user_id"], 7);

	let seen = client.seen.lock();
	let authorization = seen[1]
		.headers()
		.get(podio_client::oauth2::http::header::AUTHORIZATION)
		.and_then(|v| v.to_str().ok());

	assert_eq!(authorization, Some("OAuth2 T1"));

	Ok(())
}
