//! Provider endpoint set consumed by the sign-in flows.

// self
use crate::{
	_prelude::*,
	error::ConfigError,
	openid::{OPENID_LOGIN_URL, PLAYER_SUMMARIES_URL},
};

/// Endpoints the flows call. Defaults to Steam's public endpoints.
///
/// Values are kept as strings and parsed on each call, so a malformed endpoint surfaces as
/// [`ConfigError::InvalidEndpoint`] at the operation that uses it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteamEndpoints {
	/// OpenID login endpoint (redirect target and confirmation POST target).
	pub openid_login: String,
	/// `ISteamUser/GetPlayerSummaries/v0002` endpoint.
	pub player_summaries: String,
}
impl SteamEndpoints {
	/// Parses the OpenID login endpoint.
	pub fn openid_login_url(&self) -> Result<Url, ConfigError> {
		parse_endpoint("openid_login", &self.openid_login)
	}

	/// Parses the player summaries endpoint.
	pub fn player_summaries_url(&self) -> Result<Url, ConfigError> {
		parse_endpoint("player_summaries", &self.player_summaries)
	}
}
impl Default for SteamEndpoints {
	fn default() -> Self {
		Self {
			openid_login: OPENID_LOGIN_URL.into(),
			player_summaries: PLAYER_SUMMARIES_URL.into(),
		}
	}
}

fn parse_endpoint(endpoint: &'static str, raw: &str) -> Result<Url, ConfigError> {
	Url::parse(raw).map_err(|source| ConfigError::InvalidEndpoint { endpoint, source })
}
