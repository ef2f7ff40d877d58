//! Player summary model returned by `ISteamUser/GetPlayerSummaries`.
//!
//! Enumerated fields are closed enums that (de)serialize as the raw integers the Web API uses,
//! so a summary re-serializes to the same JSON shape it was decoded from.

// self
use crate::{_prelude::*, auth::SteamId};

macro_rules! def_int_enum {
	($name:ident, $doc:literal, [$($derive:ident),*], { $($(#[$meta:meta])* $variant:ident = $value:literal,)+ }) => {
		#[doc = $doc]
		#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, $($derive),*)]
		#[serde(try_from = "u8", into = "u8")]
		pub enum $name {
			$($(#[$meta])* $variant,)+
		}
		impl $name {
			/// Returns the raw integer used by the Web API.
			pub const fn as_u8(self) -> u8 {
				match self {
					$($name::$variant => $value,)+
				}
			}
		}
		impl From<$name> for u8 {
			fn from(value: $name) -> Self {
				value.as_u8()
			}
		}
		impl TryFrom<u8> for $name {
			type Error = UnknownValueError;

			fn try_from(value: u8) -> Result<Self, Self::Error> {
				match value {
					$($value => Ok($name::$variant),)+
					other => Err(UnknownValueError { kind: stringify!($name), value: other }),
				}
			}
		}
	};
}

/// Error returned when an enumerated field carries an integer outside its known range.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("{value} is not a known {kind} value.")]
pub struct UnknownValueError {
	/// Enumeration that rejected the value.
	pub kind: &'static str,
	/// Raw integer received.
	pub value: u8,
}

def_int_enum! { PersonaState, "Current presence of the user. Private profiles always report `Offline`.", [], {
	/// Offline, or the profile is private.
	Offline = 0,
	/// Online.
	Online = 1,
	/// Busy.
	Busy = 2,
	/// Away.
	Away = 3,
	/// Snooze.
	Snooze = 4,
	/// Looking to trade.
	LookingToTrade = 5,
	/// Looking to play.
	LookingToPlay = 6,
}}

def_int_enum! { ProfileState, "Whether the user has configured a community profile.", [Default], {
	/// No community profile; the API omits the field in this case.
	#[default]
	NotConfigured = 0,
	/// A community profile exists.
	Configured = 1,
}}
def_int_enum! { CommunityVisibilityState, "Whether the profile is visible to the API key owner.", [], {
	/// Private, friends-only, or otherwise hidden from the caller.
	NotVisible = 1,
	/// Public.
	Public = 3,
}}

/// Public summary of a Steam user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
	/// The user's steamid64.
	#[serde(rename = "steamid")]
	pub steam_id: SteamId,
	/// Display name.
	#[serde(rename = "personaname")]
	pub persona_name: String,
	/// Presence state.
	#[serde(rename = "personastate")]
	pub persona_state: PersonaState,
	/// Full URL of the community profile.
	#[serde(rename = "profileurl")]
	pub profile_url: String,
	/// Whether a community profile is configured.
	#[serde(rename = "profilestate", default)]
	pub profile_state: ProfileState,
	/// Visibility of the profile to the caller.
	#[serde(rename = "communityvisibilitystate")]
	pub community_visibility_state: CommunityVisibilityState,
	/// 32x32 avatar URL.
	pub avatar: String,
	/// 64x64 avatar URL.
	#[serde(rename = "avatarmedium")]
	pub avatar_medium: String,
	/// 184x184 avatar URL.
	#[serde(rename = "avatarfull")]
	pub avatar_full: String,
	/// Hash of the avatar image.
	#[serde(rename = "avatarhash", default, skip_serializing_if = "Option::is_none")]
	pub avatar_hash: Option<String>,
	/// Real name, when public and set.
	#[serde(rename = "realname", default, skip_serializing_if = "Option::is_none")]
	pub real_name: Option<String>,
	/// ISO 3166 country code, when public and set.
	#[serde(rename = "loccountrycode", default, skip_serializing_if = "Option::is_none")]
	pub country_code: Option<String>,
	/// Account creation time, when public.
	#[serde(
		rename = "timecreated",
		default,
		skip_serializing_if = "Option::is_none",
		with = "time::serde::timestamp::option"
	)]
	pub time_created: Option<OffsetDateTime>,
	/// Last time the user was seen online.
	#[serde(
		rename = "lastlogoff",
		default,
		skip_serializing_if = "Option::is_none",
		with = "time::serde::timestamp::option"
	)]
	pub last_logoff: Option<OffsetDateTime>,
}
impl PlayerSummary {
	/// Whether the profile details beyond the basic summary are visible.
	pub fn is_public(&self) -> bool {
		self.community_visibility_state == CommunityVisibilityState::Public
	}
}

/// Envelope returned by the player summaries endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct PlayerSummariesEnvelope {
	pub(crate) response: PlayerSummariesResponse,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayerSummariesResponse {
	#[serde(default)]
	pub(crate) players: Vec<PlayerSummary>,
}
