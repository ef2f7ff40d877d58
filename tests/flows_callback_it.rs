mod common;

// crates.io
use httpmock::prelude::*;
// self
use common::*;
use steam_openid_broker::{
	endpoints::SteamEndpoints,
	error::{Error, TransportError},
	flows::Authenticator,
	openid::CallbackParams,
};

#[tokio::test]
async fn confirmed_assertion_yields_steam_id() {
	let server = MockServer::start_async().await;
	let authenticator = build_test_authenticator(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path(LOGIN_PATH)
				.header("content-type", "application/x-www-form-urlencoded")
				.body_includes("openid.mode=check_authentication")
				.body_includes(encoded_claimed_id_for(STEAM_ID))
				.body_includes("openid.sig=W0u5DRbtHE1GG0ZKXjerUZDUGmc%3D");
			then.status(200).header("content-type", "text/plain").body(VALID_BODY);
		})
		.await;
	let steam_id = authenticator
		.validate_callback(&positive_assertion(&claimed_id_for(STEAM_ID)))
		.await
		.expect("Confirmed assertion should validate.");

	assert_eq!(steam_id.as_str(), STEAM_ID);
	assert_eq!(steam_id.as_u64(), Some(76_561_197_960_287_930));

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn rejected_assertion_is_invalid_not_transport() {
	let server = MockServer::start_async().await;
	let authenticator = build_test_authenticator(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(LOGIN_PATH);
			then.status(200).body(INVALID_BODY);
		})
		.await;
	let err = authenticator
		.validate_callback(&positive_assertion(&claimed_id_for(STEAM_ID)))
		.await
		.expect_err("Unconfirmed assertion must be rejected.");

	assert!(matches!(err, Error::InvalidAssertion));
	assert!(err.is_rejection());
	assert!(!err.is_transport());

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn body_without_marker_is_invalid() {
	let server = MockServer::start_async().await;
	let authenticator = build_test_authenticator(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(LOGIN_PATH);
			then.status(200).body("<html>maintenance</html>");
		})
		.await;
	let err = authenticator
		.validate_callback(&positive_assertion(&claimed_id_for(STEAM_ID)))
		.await
		.expect_err("A body without the valid marker must be rejected.");

	assert!(matches!(err, Error::InvalidAssertion));

	mock.assert_async().await;
}

#[tokio::test]
async fn cancelled_sign_in_never_reaches_provider() {
	let server = MockServer::start_async().await;
	let authenticator = build_test_authenticator(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(LOGIN_PATH);
			then.status(200).body(VALID_BODY);
		})
		.await;
	let params = CallbackParams::from_query(
		"openid.ns=http%3A%2F%2Fspecs.openid.net%2Fauth%2F2.0&openid.mode=cancel",
	);
	let err = authenticator
		.validate_callback(&params)
		.await
		.expect_err("Negative assertion must be rejected.");

	assert!(matches!(err, Error::ProtocolMismatch { mode: Some(ref mode) } if mode == "cancel"));

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn provider_error_status_is_transport_failure() {
	let server = MockServer::start_async().await;
	let authenticator = build_test_authenticator(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(LOGIN_PATH);
			then.status(503).body("is_valid:true");
		})
		.await;
	let err = authenticator
		.validate_callback(&positive_assertion(&claimed_id_for(STEAM_ID)))
		.await
		.expect_err("Provider outage must surface as a transport error.");

	assert!(matches!(
		err,
		Error::Transport(TransportError::Network { endpoint: "openid_login", .. })
	));
	assert!(err.is_transport());

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn unreachable_provider_is_transport_failure() {
	let authenticator = Authenticator::builder(TEST_API_KEY, TEST_REALM)
		.endpoints(SteamEndpoints {
			openid_login: "http://127.0.0.1:1/openid/login".into(),
			..Default::default()
		})
		.build();
	let err = authenticator
		.validate_callback(&positive_assertion(&claimed_id_for(STEAM_ID)))
		.await
		.expect_err("Connection failures must surface.");

	assert!(err.is_transport());
}

#[tokio::test]
async fn confirmed_assertion_without_claimed_id_is_rejected() {
	let server = MockServer::start_async().await;
	let authenticator = build_test_authenticator(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(LOGIN_PATH);
			then.status(200).body(VALID_BODY);
		})
		.await;
	let params = CallbackParams::from_iter([("openid.mode", "id_res"), ("openid.sig", "abc")]);
	let err = authenticator
		.validate_callback(&params)
		.await
		.expect_err("An identifier must never be fabricated.");

	assert!(matches!(err, Error::MissingClaimedId));

	mock.assert_calls_async(1).await;
}

// Documented edge case: the final path segment is returned as-is once the provider confirms it.
#[tokio::test]
async fn confirmed_non_numeric_segment_passes_through() {
	let server = MockServer::start_async().await;
	let authenticator = build_test_authenticator(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path(LOGIN_PATH);
			then.status(200).body(VALID_BODY);
		})
		.await;
	let steam_id = authenticator
		.validate_callback(&positive_assertion("https://steamcommunity.com/openid/id/vanity-name"))
		.await
		.expect("Confirmed assertion should validate.");

	assert_eq!(steam_id.as_str(), "vanity-name");
	assert_eq!(steam_id.as_u64(), None);

	mock.assert_async().await;
}

#[tokio::test]
async fn authenticate_chains_validation_and_profile() {
	let server = MockServer::start_async().await;
	let authenticator = build_test_authenticator(&server);
	let confirm = server
		.mock_async(|when, then| {
			when.method(POST).path(LOGIN_PATH);
			then.status(200).body(VALID_BODY);
		})
		.await;
	let summaries = server
		.mock_async(|when, then| {
			when.method(GET)
				.path(SUMMARIES_PATH)
				.query_param("key", TEST_API_KEY)
				.query_param("steamids", STEAM_ID);
			then.status(200)
				.header("content-type", "application/json")
				.body(summaries_envelope(&[player_json(STEAM_ID, "Rabscuttle")]));
		})
		.await;
	let (steam_id, summary) = authenticator
		.authenticate(&positive_assertion(&claimed_id_for(STEAM_ID)))
		.await
		.expect("Sign-in should complete.");

	assert_eq!(steam_id.as_str(), STEAM_ID);
	assert_eq!(summary.steam_id, steam_id);
	assert_eq!(summary.persona_name, "Rabscuttle");

	confirm.assert_calls_async(1).await;
	summaries.assert_calls_async(1).await;
}

#[tokio::test]
async fn authenticate_skips_profile_when_rejected() {
	let server = MockServer::start_async().await;
	let authenticator = build_test_authenticator(&server);
	let confirm = server
		.mock_async(|when, then| {
			when.method(POST).path(LOGIN_PATH);
			then.status(200).body(INVALID_BODY);
		})
		.await;
	let summaries = server
		.mock_async(|when, then| {
			when.method(GET).path(SUMMARIES_PATH);
			then.status(200).body(summaries_envelope(&[]));
		})
		.await;
	let err = authenticator
		.authenticate(&positive_assertion(&claimed_id_for(STEAM_ID)))
		.await
		.expect_err("Rejected sign-in must not fetch a profile.");

	assert!(matches!(err, Error::InvalidAssertion));

	confirm.assert_calls_async(1).await;
	summaries.assert_calls_async(0).await;
}
