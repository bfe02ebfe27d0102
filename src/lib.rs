//! Serverless proxy for Spotify's "now playing" and "recently played" endpoints.
//!
//! Each invocation resolves the OAuth client credentials (fetched from the secret store once
//! per process), exchanges the refresh token for a fresh access token, performs a single
//! bearer-authenticated read against the Web API, and answers with JSON. See
//! [`handler::Proxy`] for the request contract.

#![deny(clippy::all, missing_docs)]

pub mod auth;
pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod oauth;
pub mod obs;
pub mod player;
pub mod secrets;

mod _prelude {
	pub use std::{
		collections::HashMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use parking_lot::{Mutex, RwLock};
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::Deserialize;
	pub use serde_json::Value;
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use lambda_http;
pub use url;
