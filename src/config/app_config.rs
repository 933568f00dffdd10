//! Typed runtime configuration, parsed once at startup from the environment.

use anyhow::{Context, Result, bail};
use log::warn;
use rand::{Rng, distributions::Alphanumeric};
use strum_macros::{Display, EnumString};

use crate::constants::{
    ADMIN_EMAIL, ADMIN_ORGANIZATION_NAME, ADMIN_PASSWORD, ADMINS_COL_NAME, ALLOWED_ORIGIN,
    COOKIE_NAME, DB_NAME, DEMO_ADMIN_EMAIL, DEMO_ADMIN_PASSWORD, DEMO_MODE, ENFORCE_TOKEN_EXPIRY,
    HOST, JWT_SECRET_KEY, MONGODB_URI, ORGANIZATIONS_COL_NAME, PORT, SEED_DEMO_DATA,
    SESSIONS_COL_NAME, STORAGE_BACKEND, TOKEN_TTL_SECS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum StorageBackend {
    #[strum(to_string = "memory", serialize = "in-memory")]
    Memory,
    #[strum(to_string = "mongodb", serialize = "mongo")]
    MongoDb,
}

#[derive(Debug, Clone)]
pub struct MongoSettings {
    pub uri: String,
    pub db_name: String,
    pub organizations_collection: String,
    pub admins_collection: String,
    pub sessions_collection: String,
}

impl Default for MongoSettings {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".into(),
            db_name: "org_console".into(),
            organizations_collection: "organizations".into(),
            admins_collection: "admins".into(),
            sessions_collection: "sessions".into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 signing secret for session tokens.
    pub jwt_secret: String,
    /// Lifetime hint returned to clients as `expires_in`.
    pub token_ttl_secs: u64,
    /// Reject tokens past `exp`; off by default so the TTL stays advisory.
    pub enforce_token_expiry: bool,
    pub cookie_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: random_secret(),
            token_ttl_secs: 3600,
            enforce_token_expiry: false,
            cookie_name: "om_token".into(),
        }
    }
}

/// Configured credential that administers every organization. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapAdmin {
    pub email: String,
    pub password: String,
    pub organization_name: String,
}

impl BootstrapAdmin {
    pub fn demo() -> Self {
        Self {
            email: DEMO_ADMIN_EMAIL.into(),
            password: DEMO_ADMIN_PASSWORD.into(),
            organization_name: "Demo Corp".into(),
        }
    }

    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage_backend: StorageBackend,
    pub mongodb: MongoSettings,
    pub auth: AuthConfig,
    pub bootstrap_admin: Option<BootstrapAdmin>,
    pub seed_demo_data: bool,
    pub allowed_origin: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8000,
            storage_backend: StorageBackend::Memory,
            mongodb: MongoSettings::default(),
            auth: AuthConfig::default(),
            bootstrap_admin: None,
            seed_demo_data: false,
            allowed_origin: "http://localhost:3000".into(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let port = PORT
            .parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got '{}'", *PORT))?;

        let storage_backend = STORAGE_BACKEND.parse::<StorageBackend>().with_context(|| {
            format!(
                "STORAGE_BACKEND must be 'memory' or 'mongodb', got '{}'",
                *STORAGE_BACKEND
            )
        })?;

        let token_ttl_secs = TOKEN_TTL_SECS.parse::<u64>().with_context(|| {
            format!(
                "TOKEN_TTL_SECS must be a positive integer, got '{}'",
                *TOKEN_TTL_SECS
            )
        })?;

        let jwt_secret = if JWT_SECRET_KEY.is_empty() {
            warn!("JWT_SECRET_KEY is not set; sessions will not survive a restart");
            random_secret()
        } else {
            JWT_SECRET_KEY.to_string()
        };

        Ok(Self {
            host: HOST.to_string(),
            port,
            storage_backend,
            mongodb: MongoSettings {
                uri: MONGODB_URI.to_string(),
                db_name: DB_NAME.to_string(),
                organizations_collection: ORGANIZATIONS_COL_NAME.to_string(),
                admins_collection: ADMINS_COL_NAME.to_string(),
                sessions_collection: SESSIONS_COL_NAME.to_string(),
            },
            auth: AuthConfig {
                jwt_secret,
                token_ttl_secs,
                enforce_token_expiry: parse_flag("ENFORCE_TOKEN_EXPIRY", &ENFORCE_TOKEN_EXPIRY)?,
                cookie_name: COOKIE_NAME.to_string(),
            },
            bootstrap_admin: bootstrap_admin_from_env()?,
            seed_demo_data: parse_flag("SEED_DEMO_DATA", &SEED_DEMO_DATA)?,
            allowed_origin: ALLOWED_ORIGIN.to_string(),
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn bootstrap_admin_from_env() -> Result<Option<BootstrapAdmin>> {
    let demo_mode = parse_flag("DEMO_MODE", &DEMO_MODE)?;

    match (ADMIN_EMAIL.is_empty(), ADMIN_PASSWORD.is_empty()) {
        (false, false) => Ok(Some(BootstrapAdmin {
            email: ADMIN_EMAIL.to_string(),
            password: ADMIN_PASSWORD.to_string(),
            organization_name: ADMIN_ORGANIZATION_NAME.to_string(),
        })),
        (false, true) => bail!("ADMIN_EMAIL is set but ADMIN_PASSWORD is empty"),
        (true, false) => bail!("ADMIN_PASSWORD is set but ADMIN_EMAIL is empty"),
        (true, true) if demo_mode => {
            warn!(
                "DEMO_MODE is on: '{}' can administer every organization",
                DEMO_ADMIN_EMAIL
            );
            Ok(Some(BootstrapAdmin {
                organization_name: ADMIN_ORGANIZATION_NAME.to_string(),
                ..BootstrapAdmin::demo()
            }))
        }
        (true, true) => Ok(None),
    }
}

pub fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("{name} must be a boolean flag, got '{other}'"),
    }
}

fn random_secret() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}
