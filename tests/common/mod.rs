//! Shared fixtures for the integration suites.

#![allow(dead_code)]

// std
use std::time::Duration;
// crates.io
use httpmock::MockServer;
// self
use steam_openid_broker::{
	endpoints::SteamEndpoints,
	flows::Authenticator,
	http::ReqwestHttpClient,
	openid::{CallbackParams, OPENID_NS_2_0},
	reqwest::Client as ReqwestClient,
};

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_REALM: &str = "http://localhost:8080";
pub const LOGIN_PATH: &str = "/openid/login";
pub const SUMMARIES_PATH: &str = "/ISteamUser/GetPlayerSummaries/v0002";
pub const STEAM_ID: &str = "76561197960287930";

/// Routes both provider calls to `server`.
pub fn test_endpoints(server: &MockServer) -> SteamEndpoints {
	SteamEndpoints {
		openid_login: server.url(LOGIN_PATH),
		player_summaries: server.url(SUMMARIES_PATH),
	}
}

/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
/// `httpmock` during tests.
pub fn test_reqwest_http_client() -> ReqwestHttpClient {
	let client = ReqwestClient::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");

	ReqwestHttpClient::with_client(client)
}

/// Builds an [`Authenticator`] wired to `server` whose requests give up after `timeout`.
pub fn build_test_authenticator_with_timeout(
	server: &MockServer,
	timeout: Duration,
) -> Authenticator {
	Authenticator::builder(TEST_API_KEY, TEST_REALM)
		.endpoints(test_endpoints(server))
		.http_client(test_reqwest_http_client())
		.timeout(timeout)
		.build()
}

/// Builds an [`Authenticator`] wired to `server`.
pub fn build_test_authenticator(server: &MockServer) -> Authenticator {
	build_test_authenticator_with_timeout(server, Duration::from_secs(5))
}

/// Claimed identifier Steam issues for `steam_id`.
pub fn claimed_id_for(steam_id: &str) -> String {
	format!("https://steamcommunity.com/openid/id/{steam_id}")
}

/// The claimed identifier as it appears inside a form-encoded body.
pub fn encoded_claimed_id_for(steam_id: &str) -> String {
	format!("https%3A%2F%2Fsteamcommunity.com%2Fopenid%2Fid%2F{steam_id}")
}

/// The query Steam appends to the return URL after a successful sign-in.
pub fn positive_assertion(claimed_id: &str) -> CallbackParams {
	CallbackParams::from_iter([
		("openid.ns", OPENID_NS_2_0),
		("openid.mode", "id_res"),
		("openid.op_endpoint", "https://steamcommunity.com/openid/login"),
		("openid.claimed_id", claimed_id),
		("openid.identity", claimed_id),
		("openid.return_to", "http://localhost:8080/auth/steam/callback"),
		("openid.response_nonce", "2026-10-19T12:00:00ZAbCdEf0123456789"),
		("openid.assoc_handle", "1234567890"),
		(
			"openid.signed",
			"signed,op_endpoint,claimed_id,identity,return_to,response_nonce,assoc_handle",
		),
		("openid.sig", "W0u5DRbtHE1GG0ZKXjerUZDUGmc="),
	])
}

/// Confirmation body Steam returns for a genuine assertion.
pub const VALID_BODY: &str = "ns:http://specs.openid.net/auth/2.0\nis_valid:true\n";
/// Confirmation body Steam returns for a forged or replayed assertion.
pub const INVALID_BODY: &str = "ns:http://specs.openid.net/auth/2.0\nis_valid:false\n";

/// A well-formed player object as returned by the summaries endpoint.
pub fn player_json(steam_id: &str, persona_name: &str) -> String {
	serde_json::json!({
		"steamid": steam_id,
		"personaname": persona_name,
		"personastate": 1,
		"profileurl": format!("https://steamcommunity.com/profiles/{steam_id}/"),
		"profilestate": 1,
		"communityvisibilitystate": 3,
		"avatar": "https://avatars.steamstatic.com/a.jpg",
		"avatarmedium": "https://avatars.steamstatic.com/a_medium.jpg",
		"avatarfull": "https://avatars.steamstatic.com/a_full.jpg",
		"avatarhash": "a",
		"lastlogoff": 1_700_000_000,
		"timecreated": 1_063_407_589
	})
	.to_string()
}

/// Wraps player objects in the summaries envelope.
pub fn summaries_envelope(players: &[String]) -> String {
	format!(r#"{{"response":{{"players":[{}]}}}}"#, players.join(","))
}
