//! Player summary lookup for a verified identifier.

// self
use crate::{
	_prelude::*,
	auth::SteamId,
	error::TransportError,
	flows::Authenticator,
	obs::{self, FlowKind},
	profile::{PlayerSummariesEnvelope, PlayerSummary},
};

const ENDPOINT: &str = "player_summaries";

impl Authenticator {
	/// Fetches the public summary for `steam_id`.
	///
	/// Makes one request per call and caches nothing; persist the result if repeated lookups
	/// should not depend on Steam. Fails with [`Error::UnexpectedStatus`] on any non-200 answer
	/// and with [`Error::NoData`] when Steam returns no player for the identifier.
	pub async fn fetch_profile(&self, steam_id: &SteamId) -> Result<PlayerSummary> {
		obs::observe(FlowKind::FetchProfile, self.request_player_summary(steam_id)).await
	}

	async fn request_player_summary(&self, steam_id: &SteamId) -> Result<PlayerSummary> {
		let mut url = self.endpoints.player_summaries_url()?;

		url.query_pairs_mut()
			.append_pair("key", self.api_key.expose())
			.append_pair("steamids", steam_id.as_str());

		// Request URLs carry the API key, so they are stripped from transport errors.
		let response = self
			.bounded(self.http_client.get(url))
			.send()
			.await
			.map_err(|e| TransportError::network(ENDPOINT, e.without_url()))?;
		let status = response.status();

		if status != reqwest::StatusCode::OK {
			return Err(Error::UnexpectedStatus {
				status: status.as_u16(),
				reason: status.canonical_reason().unwrap_or_default().to_owned(),
			});
		}

		let bytes =
			response.bytes().await.map_err(|e| TransportError::network(ENDPOINT, e.without_url()))?;
		let envelope: PlayerSummariesEnvelope =
			serde_path_to_error::deserialize(&mut serde_json::Deserializer::from_slice(&bytes))
				.map_err(|source| TransportError::Decode { source })?;

		envelope.response.players.into_iter().next().ok_or(Error::NoData)
	}
}
