mod common;

use common::{PASSWORD, WRONG_PASSWORD, create_request};
use org_console_backend::{
    config::app_config::{AppConfig, AuthConfig, BootstrapAdmin},
    errors::ConsoleError,
    types::requests::auth::login_request::LoginRequest,
    utils::{auth_utils::generate_jwt, locale_utils::Messages},
};

fn login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn registered_admin_gets_a_session() {
    let state = common::state();
    let messages = Messages::default();

    state
        .organization_service
        .create_organization(create_request("Acme Corp", "a@x.com"), &messages)
        .await
        .unwrap();

    let auth = state
        .auth_service
        .login(login_request("a@x.com", PASSWORD), &messages)
        .await
        .unwrap();

    assert!(!auth.access_token.is_empty());
    assert_eq!(auth.token_type, "bearer");
    assert_eq!(auth.expires_in, 3600);

    let token = Some(auth.access_token.as_str());
    assert!(state.auth_service.is_authenticated(token).await);

    let session = state.auth_service.authenticate(token, &messages).await.unwrap();
    assert_eq!(session.email, "a@x.com");
    assert_eq!(session.organization_name, "Acme Corp");

    let status = state.auth_service.session_status(token).await;
    assert!(status.authenticated);
    assert_eq!(status.organization_name.as_deref(), Some("Acme Corp"));
}

#[tokio::test]
async fn wrong_password_creates_no_session() {
    let state = common::state();
    let messages = Messages::default();

    state
        .organization_service
        .create_organization(create_request("Acme Corp", "a@x.com"), &messages)
        .await
        .unwrap();

    let result = state
        .auth_service
        .login(login_request("a@x.com", WRONG_PASSWORD), &messages)
        .await;
    assert!(matches!(result, Err(ConsoleError::Unauthorized(_))));

    let unknown = state
        .auth_service
        .login(login_request("nobody@x.com", PASSWORD), &messages)
        .await;
    assert!(matches!(unknown, Err(ConsoleError::Unauthorized(_))));

    assert!(!state.auth_service.is_authenticated(None).await);
    assert!(!state.auth_service.session_status(None).await.authenticated);
}

#[tokio::test]
async fn malformed_login_is_a_validation_error() {
    let state = common::state();

    let result = state
        .auth_service
        .login(login_request("not-an-email", ""), &Messages::default())
        .await;

    match result {
        Err(ConsoleError::Validation { errors, .. }) => {
            let fields = errors.field_errors();
            assert!(fields.contains_key("email"));
            assert!(fields.contains_key("password"));
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn logout_is_idempotent() {
    let state = common::state_with_bootstrap_admin();
    let messages = Messages::default();

    let auth = state
        .auth_service
        .login(login_request("admin@demo.com", "password123"), &messages)
        .await
        .unwrap();
    let token = Some(auth.access_token.as_str());

    state.auth_service.logout(token, &messages).await.unwrap();
    assert!(!state.auth_service.is_authenticated(token).await);

    state.auth_service.logout(token, &messages).await.unwrap();
    state.auth_service.logout(None, &messages).await.unwrap();

    let result = state.auth_service.authenticate(token, &messages).await;
    assert!(matches!(result, Err(ConsoleError::Unauthorized(_))));
}

#[tokio::test]
async fn unknown_or_forged_tokens_are_rejected() {
    let state = common::state_with_bootstrap_admin();
    let messages = Messages::default();

    let missing = state.auth_service.authenticate(None, &messages).await;
    assert!(matches!(missing, Err(ConsoleError::Unauthorized(_))));

    let garbage = state
        .auth_service
        .authenticate(Some("not-a-token"), &messages)
        .await;
    assert!(matches!(garbage, Err(ConsoleError::Unauthorized(_))));

    let forged = generate_jwt("admin@demo.com", "Demo Corp", "some-other-secret", 3600).unwrap();
    assert!(!state.auth_service.is_authenticated(Some(forged.as_str())).await);
}

#[tokio::test]
async fn expired_sessions_are_rejected_when_enforced() {
    let state = common::state_with_config(AppConfig {
        bootstrap_admin: Some(BootstrapAdmin::demo()),
        auth: AuthConfig {
            token_ttl_secs: 0,
            enforce_token_expiry: true,
            ..AuthConfig::default()
        },
        ..AppConfig::default()
    });
    let messages = Messages::default();

    let auth = state
        .auth_service
        .login(login_request("admin@demo.com", "password123"), &messages)
        .await
        .unwrap();

    assert!(
        !state
            .auth_service
            .is_authenticated(Some(auth.access_token.as_str()))
            .await
    );
}
