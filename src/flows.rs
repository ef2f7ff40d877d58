//! The [`Authenticator`] facade and the three sign-in operations it exposes.
//!
//! 1. [`Authenticator::authorization_url`] builds the redirect that starts the handshake.
//! 2. [`Authenticator::validate_callback`] confirms the provider's callback with a direct
//!    `check_authentication` round-trip and yields the verified [`SteamId`].
//! 3. [`Authenticator::fetch_profile`] exchanges a verified [`SteamId`] for a
//!    [`PlayerSummary`].
//!
//! No step keeps state; the only thing that bridges steps is what the provider hands back to the
//! caller.
//!
//! [`SteamId`]: crate::auth::SteamId
//! [`PlayerSummary`]: crate::profile::PlayerSummary

mod authorize;
mod callback;
mod profile;

// std
use std::time::Duration;
// self
use crate::{_prelude::*, auth::ApiKey, endpoints::SteamEndpoints, http::ReqwestHttpClient};

/// Immutable sign-in configuration plus the transport used to reach Steam.
///
/// Cloning is cheap and clones share the underlying connection pool. The value is never mutated
/// after construction, so one instance can serve any number of concurrent callers.
#[derive(Clone)]
pub struct Authenticator {
	api_key: ApiKey,
	realm: String,
	endpoints: SteamEndpoints,
	http_client: ReqwestHttpClient,
	timeout: Option<Duration>,
}
impl Authenticator {
	/// Creates an authenticator for Steam's public endpoints.
	///
	/// `realm` is the OpenID realm, typically the base URL of the web application
	/// (e.g. `http://localhost:8080`).
	pub fn new(api_key: impl Into<ApiKey>, realm: impl Into<String>) -> Self {
		Self::builder(api_key, realm).build()
	}

	/// Starts a builder for non-default endpoints, transports, or request deadlines.
	pub fn builder(api_key: impl Into<ApiKey>, realm: impl Into<String>) -> AuthenticatorBuilder {
		AuthenticatorBuilder::new(api_key.into(), realm.into())
	}

	/// Configured OpenID realm.
	pub fn realm(&self) -> &str {
		&self.realm
	}

	/// Configured Web API key.
	pub fn api_key(&self) -> &ApiKey {
		&self.api_key
	}

	/// Endpoints the flows call.
	pub fn endpoints(&self) -> &SteamEndpoints {
		&self.endpoints
	}

	/// Per-request deadline, if one was configured.
	pub fn timeout(&self) -> Option<Duration> {
		self.timeout
	}

	fn bounded(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
		match self.timeout {
			Some(timeout) => request.timeout(timeout),
			None => request,
		}
	}
}
impl Debug for Authenticator {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Authenticator")
			.field("api_key", &self.api_key)
			.field("realm", &self.realm)
			.field("endpoints", &self.endpoints)
			.field("timeout", &self.timeout)
			.finish()
	}
}

/// Builder for [`Authenticator`] values.
#[derive(Debug)]
pub struct AuthenticatorBuilder {
	/// Steam Web API key.
	pub api_key: ApiKey,
	/// OpenID realm.
	pub realm: String,
	/// Endpoint overrides (defaults to Steam's public endpoints).
	pub endpoints: SteamEndpoints,
	/// Transport override.
	pub http_client: Option<ReqwestHttpClient>,
	/// Per-request deadline applied to every outbound call.
	pub timeout: Option<Duration>,
}
impl AuthenticatorBuilder {
	/// Creates a new builder seeded with the key and realm.
	pub fn new(api_key: ApiKey, realm: String) -> Self {
		Self {
			api_key,
			realm,
			endpoints: SteamEndpoints::default(),
			http_client: None,
			timeout: None,
		}
	}

	/// Replaces the endpoint set.
	pub fn endpoints(mut self, endpoints: SteamEndpoints) -> Self {
		self.endpoints = endpoints;

		self
	}

	/// Uses the provided transport instead of a default reqwest client.
	pub fn http_client(mut self, client: impl Into<ReqwestHttpClient>) -> Self {
		self.http_client = Some(client.into());

		self
	}

	/// Bounds every outbound request to `timeout`.
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Finalizes the authenticator.
	///
	/// Endpoints are parsed per call, so nothing here can fail. Without
	/// [`http_client`](Self::http_client) the transport is reqwest's default client.
	pub fn build(self) -> Authenticator {
		let AuthenticatorBuilder { api_key, realm, endpoints, http_client, timeout } = self;

		Authenticator {
			api_key,
			realm,
			endpoints,
			http_client: http_client.unwrap_or_default(),
			timeout,
		}
	}
}
