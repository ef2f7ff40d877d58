//! The Steam identifier produced by callback validation.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

/// A 64-bit Steam identifier ("steamid64") in string form.
///
/// Values produced by [`Authenticator::validate_callback`] are the final path segment of a claimed
/// identifier the provider confirmed. The segment is kept exactly as the provider encoded it; no
/// numeric validation is applied.
///
/// [`Authenticator::validate_callback`]: crate::flows::Authenticator::validate_callback
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SteamId(String);
impl SteamId {
	/// Wraps an identifier the caller already trusts (for example one loaded from its own store).
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Extracts the identifier from a confirmed claimed-identifier URL.
	///
	/// Splits on `/` and keeps the final segment, so a trailing slash yields an empty identifier.
	pub(crate) fn from_claimed_id(claimed_id: &str) -> Self {
		let segment = claimed_id.rsplit('/').next().unwrap_or(claimed_id);

		Self(segment.to_owned())
	}

	/// Parses the identifier as an unsigned 64-bit integer, when it is one.
	pub fn as_u64(&self) -> Option<u64> {
		self.0.parse().ok()
	}

	/// Returns the identifier as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl Deref for SteamId {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for SteamId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Borrow<str> for SteamId {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl From<SteamId> for String {
	fn from(value: SteamId) -> Self {
		value.0
	}
}
impl From<u64> for SteamId {
	fn from(value: u64) -> Self {
		Self(value.to_string())
	}
}
impl Debug for SteamId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "SteamId({})", self.0)
	}
}
impl Display for SteamId {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
