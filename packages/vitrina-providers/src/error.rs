pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The endpoint was unreachable, timed out, or dropped the connection.
	#[error("Request failed: {message}")]
	Transport { message: String },
	/// The endpoint answered with a non-2xx status.
	#[error("Endpoint returned status {status}: {message}")]
	Api { status: u16, message: String },
	/// The endpoint answered 2xx but the body was not the expected shape.
	#[error("Unexpected response shape: {message}")]
	Schema { message: String },
	#[error("Failed to build HTTP client: {0}")]
	Client(#[source] reqwest::Error),
}

impl From<reqwest::Error> for Error {
	fn from(err: reqwest::Error) -> Self {
		if err.is_status() {
			Self::Api {
				status: err.status().map(|status| status.as_u16()).unwrap_or_default(),
				message: err.to_string(),
			}
		} else {
			Self::Transport { message: err.to_string() }
		}
	}
}
