//! Crate-level error types shared by the sign-in flows.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
///
/// [`Error::Transport`] means the provider could not be reached or answered with something
/// undecodable; callers may retry. [`Error::InvalidAssertion`] means the provider was reached and
/// rejected the assertion; callers must deny access.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, body decoding).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Callback `openid.mode` was not a positive assertion.
	#[error("Unexpected openid.mode {mode:?}; expected `id_res`.")]
	ProtocolMismatch {
		/// Mode received in the callback, if any.
		mode: Option<String>,
	},
	/// Provider refused to confirm the assertion.
	#[error("Invalid authentication attempt.")]
	InvalidAssertion,
	/// Provider confirmed the assertion but the callback carried no claimed identifier.
	#[error("Confirmed assertion is missing openid.claimed_id.")]
	MissingClaimedId,
	/// Profile API answered with a non-200 status.
	#[error("Player summaries endpoint returned {status} {reason}.")]
	UnexpectedStatus {
		/// HTTP status code.
		status: u16,
		/// Canonical reason phrase for the status, when known.
		reason: String,
	},
	/// Profile API returned no player for the identifier.
	#[error("Steam did not return any data about the provided user.")]
	NoData,
}
impl Error {
	/// Returns `true` when the provider could not be reached or understood.
	pub fn is_transport(&self) -> bool {
		matches!(self, Self::Transport(_))
	}

	/// Returns `true` when the provider (or protocol) rejected the sign-in attempt.
	pub fn is_rejection(&self) -> bool {
		matches!(
			self,
			Self::ProtocolMismatch { .. } | Self::InvalidAssertion | Self::MissingClaimedId
		)
	}
}

/// Configuration failures raised while building requests or clients.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// A provider endpoint is not a valid URL.
	#[error("The {endpoint} endpoint is not a valid URL.")]
	InvalidEndpoint {
		/// Which endpoint failed to parse.
		endpoint: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO, decoding).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling {endpoint}.")]
	Network {
		/// Which endpoint was being called.
		endpoint: &'static str,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Response body was not valid JSON of the expected shape.
	#[error("Player summaries endpoint returned malformed JSON.")]
	Decode {
		/// Structured parsing failure, including the JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error raised while calling `endpoint`.
	pub fn network(
		endpoint: &'static str,
		src: impl 'static + Send + Sync + std::error::Error,
	) -> Self {
		Self::Network { endpoint, source: Box::new(src) }
	}
}
