//! JSON response shapes returned to the caller.

// crates.io
use lambda_http::{
	Body, Response,
	http::{
		self, StatusCode,
		header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
	},
};
use serde_json::json;
// self
use crate::_prelude::*;

/// Status code plus JSON body, before conversion into an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProxyResponse {
	/// HTTP status code.
	pub status: StatusCode,
	/// JSON body.
	pub body: Value,
}
impl ProxyResponse {
	/// `200` with the given body.
	pub fn ok(body: Value) -> Self {
		Self { status: StatusCode::OK, body }
	}

	/// `200 {"ok":true,"data":{"item":null}}`, returned when nothing is playing.
	pub fn nothing_playing() -> Self {
		Self::ok(json!({ "ok": true, "data": { "item": null } }))
	}

	/// `200 {"items":[]}`, returned when there is no listening history.
	pub fn no_recent_items() -> Self {
		Self::ok(json!({ "items": [] }))
	}

	/// `404 {"ok":false,"error":"not_found"}`.
	pub fn not_found() -> Self {
		Self { status: StatusCode::NOT_FOUND, body: json!({ "ok": false, "error": "not_found" }) }
	}

	/// `500 {"ok":false,"error":"server_error"}`.
	pub fn server_error() -> Self {
		Self {
			status: StatusCode::INTERNAL_SERVER_ERROR,
			body: json!({ "ok": false, "error": "server_error" }),
		}
	}

	/// Converts into an HTTP response with JSON and open CORS headers.
	pub fn into_response(self) -> Result<Response<Body>, http::Error> {
		Response::builder()
			.status(self.status)
			.header(CONTENT_TYPE, "application/json")
			.header(ACCESS_CONTROL_ALLOW_ORIGIN, "*")
			.body(Body::Text(self.body.to_string()))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn empty_shapes_match_contract() {
		assert_eq!(
			ProxyResponse::nothing_playing().body,
			json!({ "ok": true, "data": { "item": null } })
		);
		assert_eq!(ProxyResponse::no_recent_items().body, json!({ "items": [] }));
		assert_eq!(ProxyResponse::not_found().status, StatusCode::NOT_FOUND);
		assert_eq!(ProxyResponse::server_error().status, StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[test]
	fn http_response_carries_json_and_cors_headers() {
		let response = ProxyResponse::not_found()
			.into_response()
			.expect("Response conversion should succeed.");

		assert_eq!(response.status(), StatusCode::NOT_FOUND);
		assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
		assert_eq!(response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");

		let Body::Text(body) = response.body() else {
			panic!("Expected a text body.");
		};
		let body: Value = serde_json::from_str(body).expect("Body should be JSON.");

		assert_eq!(body, json!({ "ok": false, "error": "not_found" }));
	}
}
