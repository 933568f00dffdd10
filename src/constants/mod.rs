use std::env;
use std::sync::LazyLock;

macro_rules! lazy_env_var {
    ($name:ident, $default:expr) => {
        pub static $name: LazyLock<String> = LazyLock::new(|| {
            let var_name = stringify!($name);
            env::var(var_name).unwrap_or_else(|_| String::from($default))
        });
    };
}

lazy_env_var!(HOST, "127.0.0.1");
lazy_env_var!(PORT, "8000");
lazy_env_var!(STORAGE_BACKEND, "memory");
lazy_env_var!(MONGODB_URI, "mongodb://localhost:27017");
lazy_env_var!(DB_NAME, "org_console");
lazy_env_var!(ORGANIZATIONS_COL_NAME, "organizations");
lazy_env_var!(ADMINS_COL_NAME, "admins");
lazy_env_var!(SESSIONS_COL_NAME, "sessions");
lazy_env_var!(JWT_SECRET_KEY, "");
lazy_env_var!(TOKEN_TTL_SECS, "3600");
lazy_env_var!(ENFORCE_TOKEN_EXPIRY, "false");
lazy_env_var!(COOKIE_NAME, "om_token");
lazy_env_var!(ALLOWED_ORIGIN, "http://localhost:3000");
lazy_env_var!(LOCALES_DIR, "locales");
lazy_env_var!(DEMO_MODE, "false");
lazy_env_var!(SEED_DEMO_DATA, "false");
lazy_env_var!(ADMIN_EMAIL, "");
lazy_env_var!(ADMIN_PASSWORD, "");
lazy_env_var!(ADMIN_ORGANIZATION_NAME, "Demo Corp");

pub const API_PREFIX: &str = "/api/v1";
pub const TOKEN_TYPE: &str = "bearer";
pub const COLLECTION_PREFIX: &str = "org_";

pub const DEMO_ADMIN_EMAIL: &str = "admin@demo.com";
pub const DEMO_ADMIN_PASSWORD: &str = "password123";
