//! OpenID 2.0 protocol literals and the untrusted callback parameter set.
//!
//! Steam speaks a narrow slice of OpenID 2.0: the relying party always sends
//! `checkid_setup` with `identifier_select` for both identity fields, the provider answers the
//! return URL with `id_res` (or `cancel`), and the relying party confirms the assertion with a
//! direct `check_authentication` POST whose body contains `is_valid:true` when genuine.

// crates.io
use url::form_urlencoded;
// self
use crate::_prelude::*;

/// Steam's OpenID 2.0 login endpoint, used for both the redirect and the confirmation POST.
pub const OPENID_LOGIN_URL: &str = "https://steamcommunity.com/openid/login";
/// Steam Web API player summaries endpoint.
pub const PLAYER_SUMMARIES_URL: &str =
	"http://api.steampowered.com/ISteamUser/GetPlayerSummaries/v0002";
/// OpenID 2.0 namespace identifier.
pub const OPENID_NS_2_0: &str = "http://specs.openid.net/auth/2.0";
/// Sentinel telling the provider to let the user choose who they are.
pub const IDENTIFIER_SELECT: &str = "http://specs.openid.net/auth/2.0/identifier_select";
/// Substring present in a confirmation response for a genuine assertion.
pub const VALID_MARKER: &str = "is_valid:true";

/// `openid.ns` parameter key.
pub const PARAM_NS: &str = "openid.ns";
/// `openid.mode` parameter key.
pub const PARAM_MODE: &str = "openid.mode";
/// `openid.realm` parameter key.
pub const PARAM_REALM: &str = "openid.realm";
/// `openid.return_to` parameter key.
pub const PARAM_RETURN_TO: &str = "openid.return_to";
/// `openid.claimed_id` parameter key.
pub const PARAM_CLAIMED_ID: &str = "openid.claimed_id";
/// `openid.identity` parameter key.
pub const PARAM_IDENTITY: &str = "openid.identity";

/// `openid.mode` values exchanged with the provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpenIdMode {
	/// Interactive authentication request sent with the redirect.
	CheckIdSetup,
	/// Positive assertion delivered to the return URL.
	IdRes,
	/// Negative assertion: the user declined to sign in.
	Cancel,
	/// Direct verification request sent back to the provider.
	CheckAuthentication,
}
impl OpenIdMode {
	/// Returns the wire literal for the mode.
	pub const fn as_str(self) -> &'static str {
		match self {
			OpenIdMode::CheckIdSetup => "checkid_setup",
			OpenIdMode::IdRes => "id_res",
			OpenIdMode::Cancel => "cancel",
			OpenIdMode::CheckAuthentication => "check_authentication",
		}
	}
}
impl Display for OpenIdMode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for OpenIdMode {
	type Err = UnknownModeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"checkid_setup" => Ok(Self::CheckIdSetup),
			"id_res" => Ok(Self::IdRes),
			"cancel" => Ok(Self::Cancel),
			"check_authentication" => Ok(Self::CheckAuthentication),
			other => Err(UnknownModeError { mode: other.to_owned() }),
		}
	}
}

/// Error returned when parsing an unrecognized `openid.mode` literal.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unknown openid.mode `{mode}`.")]
pub struct UnknownModeError {
	/// The literal that failed to parse.
	pub mode: String,
}

/// Query parameters delivered by the provider to the return URL.
///
/// The set is untrusted until [`Authenticator::validate_callback`] confirms it. Pair order and
/// duplicate keys are preserved so the confirmation request echoes what was received. `Debug`
/// prints every key but only the `openid.mode` and `openid.claimed_id` values.
///
/// [`Authenticator::validate_callback`]: crate::flows::Authenticator::validate_callback
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CallbackParams(Vec<(String, String)>);
impl CallbackParams {
	/// Decodes a raw `application/x-www-form-urlencoded` query string (without the leading `?`).
	pub fn from_query(query: &str) -> Self {
		form_urlencoded::parse(query.as_bytes()).into_owned().collect()
	}

	/// Decodes the query component of a full callback URL.
	pub fn from_url(url: &Url) -> Self {
		url.query_pairs().into_owned().collect()
	}

	/// Returns the first value recorded for `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
	}

	/// Returns the raw `openid.mode` value, if present.
	pub fn mode(&self) -> Option<&str> {
		self.get(PARAM_MODE)
	}

	/// Returns the raw, unverified `openid.claimed_id` value, if present.
	pub fn claimed_id(&self) -> Option<&str> {
		self.get(PARAM_CLAIMED_ID)
	}

	/// Iterates over all pairs in received order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Number of pairs.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether the set holds no pairs.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Builds the confirmation pair list: every pair as received, except that the first
	/// `openid.mode` becomes `check_authentication` and any later `openid.mode` is dropped.
	pub fn to_check_authentication(&self) -> Vec<(&str, &str)> {
		let mut mode_seen = false;

		self.iter()
			.filter_map(|(k, v)| {
				if k != PARAM_MODE {
					return Some((k, v));
				}
				if mode_seen {
					return None;
				}

				mode_seen = true;

				Some((k, OpenIdMode::CheckAuthentication.as_str()))
			})
			.collect()
	}
}
impl<K, V> FromIterator<(K, V)> for CallbackParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}
impl Debug for CallbackParams {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("CallbackParams")
			.field("mode", &self.mode())
			.field("claimed_id", &self.claimed_id())
			.field("keys", &self.0.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>())
			.finish()
	}
}
