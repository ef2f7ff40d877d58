//! Callback validation through a direct `check_authentication` round-trip.
//!
//! The callback query is attacker-controlled until the provider vouches for it. Validation
//! replays the received parameters to the provider with `openid.mode` switched to
//! `check_authentication`; only when the answer contains `is_valid:true` is the claimed
//! identifier trusted. Exactly one request is made per call and nothing is cached, so replay
//! protection (nonce tracking) is left to the caller.

// self
use crate::{
	_prelude::*,
	auth::SteamId,
	error::TransportError,
	flows::Authenticator,
	obs::{self, FlowKind},
	openid::{CallbackParams, OpenIdMode, VALID_MARKER},
	profile::PlayerSummary,
};

const ENDPOINT: &str = "openid_login";

impl Authenticator {
	/// Confirms the provider's callback and returns the verified Steam identifier.
	///
	/// `params` are the query parameters received at the return URL. Fails with
	/// [`Error::ProtocolMismatch`] before any request when `openid.mode` is not `id_res`,
	/// with [`Error::Transport`] when the provider cannot be reached, and with
	/// [`Error::InvalidAssertion`] when the provider does not confirm the assertion.
	pub async fn validate_callback(&self, params: &CallbackParams) -> Result<SteamId> {
		obs::observe(FlowKind::ValidateCallback, self.confirm_assertion(params)).await
	}

	/// Validates the callback, then fetches the verified player's summary.
	pub async fn authenticate(&self, params: &CallbackParams) -> Result<(SteamId, PlayerSummary)> {
		let steam_id = self.validate_callback(params).await?;
		let summary = self.fetch_profile(&steam_id).await?;

		Ok((steam_id, summary))
	}

	async fn confirm_assertion(&self, params: &CallbackParams) -> Result<SteamId> {
		match params.mode() {
			Some(mode) if mode == OpenIdMode::IdRes.as_str() => (),
			other => return Err(Error::ProtocolMismatch { mode: other.map(ToOwned::to_owned) }),
		}

		let login = self.endpoints.openid_login_url()?;
		let form = params.to_check_authentication();
		let response = self
			.bounded(self.http_client.post(login).form(&form))
			.send()
			.await
			.and_then(|response| response.error_for_status())
			.map_err(|e| TransportError::network(ENDPOINT, e))?;
		let body = response.text().await.map_err(|e| TransportError::network(ENDPOINT, e))?;

		if !body.contains(VALID_MARKER) {
			return Err(Error::InvalidAssertion);
		}

		// Only the original claimed identifier is read, and only after confirmation.
		let claimed_id = params.claimed_id().ok_or(Error::MissingClaimedId)?;

		Ok(SteamId::from_claimed_id(claimed_id))
	}
}
