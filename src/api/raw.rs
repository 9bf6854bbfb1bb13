//! Untyped access to any endpoint through the facade.

// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	http::HttpClient,
	transport::{ApiRequest, Envelope, TransportErrorMapper},
};

def_resource!(Raw, raw, "Generic authorized requests for endpoints without a typed wrapper.");

impl<C, M> Raw<'_, C, M>
where
	C: ?Sized + HttpClient,
	M: ?Sized + TransportErrorMapper<C::TransportError>,
{
	/// `GET path`, flattening `query` (a JSON object) into query parameters.
	pub async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<Envelope<T>>
	where
		T: DeserializeOwned,
		Q: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::get(path).query_object(query)?).await
	}

	/// `POST path` with a JSON body.
	pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<Envelope<T>>
	where
		T: DeserializeOwned,
		B: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::post(path).json(body)?).await
	}

	/// `PUT path` with a JSON body.
	pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<Envelope<T>>
	where
		T: DeserializeOwned,
		B: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::put(path).json(body)?).await
	}

	/// `PATCH path` with a JSON body.
	pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<Envelope<T>>
	where
		T: DeserializeOwned,
		B: ?Sized + Serialize,
	{
		self.api.request(ApiRequest::patch(path).json(body)?).await
	}

	/// `DELETE path`.
	pub async fn delete<T>(&self, path: &str) -> Result<Envelope<T>>
	where
		T: DeserializeOwned,
	{
		self.api.request(ApiRequest::delete(path)).await
	}
}
