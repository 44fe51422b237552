//! Integration tests for connecting a LinkedIn channel end to end.
//!
//! These walk through authorization, location selection and the first
//! share, wiring the wizard outcome into the in-memory stores the
//! connector reads from.

use linkedin_channel::auth::oauth::{begin_auth, validate_callback, AuthQuery, OAuthError};
use linkedin_channel::auth::{MemoryApplicationStore, MemoryTokenStore, RESOURCE_OWNER};
use linkedin_channel::model::{company_locations, Activity, Location};
use linkedin_channel::wizard::{ChannelWizard, Transition, WizardEvent, WizardOutcome};
use linkedin_channel::{
    AccessToken, ApiBaseUrl, ApiKey, ApiSecretKey, Application, ConnectionError, Connector,
    LinkedInConfig, Token,
};
use serde_json::json;
use std::collections::HashSet;
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn application() -> Application {
    Application::new(
        ApiKey::new("client-id").unwrap(),
        ApiSecretKey::new("client-secret").unwrap(),
    )
}

fn expect_continue(transition: Transition) -> ChannelWizard {
    match transition {
        Transition::Continue(wizard) => wizard,
        other => panic!("expected Continue, got {other:?}"),
    }
}

/// Runs the wizard for a member who picks their profile and one page.
fn run_wizard(companies: &[serde_json::Value]) -> WizardOutcome {
    let me = Location::user("-aB3x", "Jane Doe");
    let mut offered = vec![me.clone()];
    offered.extend(company_locations(companies));

    let wizard = expect_continue(
        ChannelWizard::new()
            .advance(WizardEvent::LoggedIn {
                user_id: "-aB3x".to_string(),
                token: Token::new(AccessToken::new("member-token").unwrap()),
            })
            .unwrap(),
    );
    let wizard = expect_continue(
        wizard
            .advance(WizardEvent::LocationsFetched {
                locations: offered,
                connected: HashSet::from(["77".to_string()]),
            })
            .unwrap(),
    );
    let wizard = expect_continue(
        wizard
            .advance(WizardEvent::LocationsSelected {
                identifiers: vec!["-aB3x".to_string(), "2414183".to_string()],
            })
            .unwrap(),
    );
    let wizard = expect_continue(
        wizard
            .advance(WizardEvent::LocationConfigured { location: me })
            .unwrap(),
    );
    let page = wizard.current().cloned().unwrap();

    match wizard
        .advance(WizardEvent::LocationConfigured { location: page })
        .unwrap()
    {
        Transition::Finished(outcome) => outcome,
        other => panic!("expected Finished, got {other:?}"),
    }
}

#[test]
fn test_authorization_round_trip() {
    let config = LinkedInConfig::default();
    let started = begin_auth(
        &config,
        &application(),
        "https://chain.example.com/channel/linkedin/login",
        None,
    )
    .unwrap();

    assert!(started
        .auth_url
        .starts_with("https://www.linkedin.com/oauth/v2/authorization?"));

    let callback = format!("code=AQTabc&state={}", urlencoding::encode(started.state.as_ref()));
    let code = validate_callback(&AuthQuery::from_query_string(&callback), &started.state).unwrap();
    assert_eq!(code, "AQTabc");

    let forged = AuthQuery::from_query_string("code=AQTabc&state=forged");
    assert!(matches!(
        validate_callback(&forged, &started.state),
        Err(OAuthError::StateMismatch { .. })
    ));
}

#[test]
fn test_wizard_outcome_lists_new_locations() {
    let outcome = run_wizard(&[
        json!({"id": 2414183, "name": "Acme Inc.", "squareLogoUrl": "https://x/acme.png"}),
        json!({"id": 77, "name": "Already Connected"}),
    ]);

    let names: Vec<&str> = outcome.locations.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Jane Doe", "Acme Inc."]);
    assert_eq!(
        outcome.summary,
        "The following locations are now connected: Jane Doe, Acme Inc."
    );
    assert_eq!(outcome.tokens.len(), 1);
    assert_eq!(
        outcome.tokens[0].location_identifier.as_deref(),
        Some("-aB3x")
    );
}

#[tokio::test]
async fn test_connected_profile_can_share() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/people/~/shares"))
        .and(header("authorization", "Bearer member-token"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "updateKey": "UPDATE-aB3x-1",
            "updateUrl": "https://www.linkedin.com/updates?topic=1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = run_wizard(&[json!({"id": 2414183, "name": "Acme Inc."})]);

    let applications = MemoryApplicationStore::new();
    applications.insert(RESOURCE_OWNER, application()).unwrap();
    let tokens = MemoryTokenStore::new();
    for token in outcome.tokens {
        let location = outcome
            .locations
            .iter()
            .find(|l| Some(l.identifier.as_str()) == token.location_identifier.as_deref())
            .unwrap();
        tokens.insert(location, token).unwrap();
    }

    let config = LinkedInConfig::builder()
        .api_base_url(ApiBaseUrl::new(format!("{}/v1", server.uri())).unwrap())
        .build()
        .unwrap();
    let connector = Connector::new(config, Arc::new(applications), Arc::new(tokens));

    let profile = Activity::new("Hello", outcome.locations[0].clone());
    let api = connector.connect_by_activity(&profile).unwrap();
    let share = api
        .share_on_user_page(&json!({"comment": "Hello network"}))
        .await
        .unwrap();
    assert_eq!(share.get("updateKey"), Some(&json!("UPDATE-aB3x-1")));

    // The page got no token of its own during this run.
    let page = Activity::new("Hello", outcome.locations[1].clone());
    assert!(matches!(
        connector.connect_by_activity(&page),
        Err(ConnectionError::MissingToken { location }) if location == "2414183"
    ));
}
