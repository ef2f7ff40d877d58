//! Transport wrapper used by the sign-in flows.
//!
//! Every outbound call goes through [`ReqwestHttpClient`]. Hosts that need proxies, custom TLS
//! roots, or request deadlines build their own [`reqwest::Client`] and wrap it with
//! [`ReqwestHttpClient::with_client`]; [`ReqwestHttpClient::with_timeout`] covers the common
//! case of bounding request duration.

// std
use std::{ops::Deref, time::Duration};
// self
use crate::{_prelude::*, error::ConfigError};

/// Thin wrapper around [`ReqwestClient`] shared by every [`Authenticator`] clone.
///
/// [`Authenticator`]: crate::flows::Authenticator
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client whose requests fail once `timeout` elapses.
	pub fn with_timeout(timeout: Duration) -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().timeout(timeout).build()?;

		Ok(Self(client))
	}
}
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl From<ReqwestClient> for ReqwestHttpClient {
	fn from(client: ReqwestClient) -> Self {
		Self(client)
	}
}
