//! Redacting wrapper for the Steam Web API key.

// self
use crate::_prelude::*;

/// Steam Web API key, provisioned at <https://steamcommunity.com/dev/apikey>.
///
/// Formatters never print the key.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);
impl ApiKey {
	/// Wraps a new key string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner key. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for ApiKey {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl From<&str> for ApiKey {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}
impl From<String> for ApiKey {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl Debug for ApiKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("ApiKey").field(&"<redacted>").finish()
	}
}
impl Display for ApiKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}
