//! AWS Secrets Manager backed [`SecretStore`].

// crates.io
use aws_sdk_secretsmanager::{
	Client,
	error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
	operation::get_secret_value::{GetSecretValueError, GetSecretValueOutput},
};
// self
use crate::{
	_prelude::*,
	error::SecretError,
	secrets::{SecretFuture, SecretStore},
};

const ACCESS_DENIED: &str = "AccessDeniedException";

/// Reads secrets through `GetSecretValue`.
#[derive(Clone, Debug)]
pub struct SecretsManagerStore {
	client: Client,
}
impl SecretsManagerStore {
	/// Wraps an existing SDK client.
	pub fn new(client: Client) -> Self {
		Self { client }
	}

	/// Builds a client from the default AWS configuration chain (environment, profile, role).
	pub async fn from_env() -> Self {
		let config = aws_config::load_from_env().await;

		Self::new(Client::new(&config))
	}
}
impl SecretStore for SecretsManagerStore {
	fn fetch<'a>(&'a self, secret_id: &'a str) -> SecretFuture<'a, String> {
		Box::pin(async move {
			let output = self
				.client
				.get_secret_value()
				.secret_id(secret_id)
				.send()
				.await
				.map_err(|err| map_get_secret_error(secret_id, err))?;

			secret_string(secret_id, output)
		})
	}
}

fn map_get_secret_error<R>(secret_id: &str, err: SdkError<GetSecretValueError, R>) -> SecretError
where
	R: 'static + Debug,
{
	match err.as_service_error() {
		Some(service) if service.is_resource_not_found_exception() =>
			SecretError::NotFound { secret_id: secret_id.to_owned() },
		// Not a modeled error of the operation; only the error code identifies it.
		Some(service) if service.code() == Some(ACCESS_DENIED) =>
			SecretError::AccessDenied { secret_id: secret_id.to_owned() },
		_ => SecretError::Backend { message: DisplayErrorContext(&err).to_string() },
	}
}

fn secret_string(secret_id: &str, output: GetSecretValueOutput) -> Result<String, SecretError> {
	output
		.secret_string()
		.map(str::to_owned)
		.ok_or_else(|| SecretError::MissingSecretString { secret_id: secret_id.to_owned() })
}
