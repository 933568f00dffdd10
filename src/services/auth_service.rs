use chrono::Utc;
use log::{debug, info};
use std::sync::Arc;

use crate::{
    config::app_config::AuthConfig,
    errors::{ConsoleError, ConsoleResult},
    models::session_model::Session,
    repositories::storage::{SessionStorage, StorageResult},
    services::credential_service::CredentialService,
    types::{
        requests::auth::login_request::LoginRequest,
        responses::auth_response::{AuthResponse, SessionStatusResponse},
    },
    utils::{
        auth_utils::{decode_jwt, generate_jwt},
        locale_utils::Messages,
        validation_utils::validate_login_data,
    },
};

pub struct AuthService {
    session_repository: Arc<dyn SessionStorage>,
    credential_service: Arc<CredentialService>,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(
        session_repository: Arc<dyn SessionStorage>,
        credential_service: Arc<CredentialService>,
        config: AuthConfig,
    ) -> Self {
        Self {
            session_repository,
            credential_service,
            config,
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.config.cookie_name
    }

    pub fn token_ttl_secs(&self) -> u64 {
        self.config.token_ttl_secs
    }

    /// Verifies the pair and stores a new session. Nothing is stored on failure.
    pub async fn login(
        &self,
        data: LoginRequest,
        messages: &Messages,
    ) -> ConsoleResult<AuthResponse> {
        validate_login_data(&data, messages).map_err(|errors| {
            ConsoleError::validation(
                messages.get_validation_message("login.invalid_data", "Invalid login data"),
                errors,
            )
        })?;

        let organization_name = self
            .credential_service
            .verify(&data.email, &data.password, messages)
            .await?;

        let token = generate_jwt(
            &data.email,
            &organization_name,
            &self.config.jwt_secret,
            self.config.token_ttl_secs,
        )
        .map_err(|err| ConsoleError::Internal(format!("Failed to sign session token: {}", err)))?;

        let session = Session::new(
            token,
            &data.email,
            &organization_name,
            Utc::now(),
            self.config.token_ttl_secs,
        );

        self.session_repository
            .insert(session.clone())
            .await
            .map_err(|err| ConsoleError::from_storage(err, messages))?;

        info!(
            "Admin {} logged in for organization '{}'",
            data.email, organization_name
        );

        Ok(AuthResponse {
            access_token: session.token,
            token_type: session.token_type,
            expires_in: self.config.token_ttl_secs,
        })
    }

    /// Unknown or missing tokens are a no-op.
    pub async fn logout(&self, token: Option<&str>, messages: &Messages) -> ConsoleResult<()> {
        let Some(token) = token else {
            return Ok(());
        };

        self.session_repository
            .remove(token)
            .await
            .map_err(|err| ConsoleError::from_storage(err, messages))
    }

    pub async fn is_authenticated(&self, token: Option<&str>) -> bool {
        matches!(self.find_session(token).await, Ok(Some(_)))
    }

    pub async fn authenticate(
        &self,
        token: Option<&str>,
        messages: &Messages,
    ) -> ConsoleResult<Session> {
        if token.is_none() {
            return Err(ConsoleError::Unauthorized(messages.get_auth_message(
                "session.missing",
                "Authentication required, please log in",
            )));
        }

        self.find_session(token)
            .await
            .map_err(|err| ConsoleError::from_storage(err, messages))?
            .ok_or_else(|| {
                ConsoleError::Unauthorized(messages.get_auth_message(
                    "session.invalid",
                    "Session is invalid or has ended, please log in again",
                ))
            })
    }

    pub async fn session_status(&self, token: Option<&str>) -> SessionStatusResponse {
        match self.find_session(token).await {
            Ok(Some(session)) => SessionStatusResponse {
                authenticated: true,
                email: Some(session.email),
                organization_name: Some(session.organization_name),
            },
            _ => SessionStatusResponse::default(),
        }
    }

    async fn find_session(&self, token: Option<&str>) -> StorageResult<Option<Session>> {
        let Some(token) = token else {
            return Ok(None);
        };

        if let Err(err) = decode_jwt(
            token,
            &self.config.jwt_secret,
            self.config.enforce_token_expiry,
        ) {
            debug!("Rejected session token: {}", err);
            return Ok(None);
        }

        let session = self.session_repository.find(token).await?;
        Ok(session.filter(|session| {
            !self.config.enforce_token_expiry || !session.is_expired(Utc::now())
        }))
    }
}
