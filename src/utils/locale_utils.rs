use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::constants::LOCALES_DIR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    En,
    Id,
    De,
    Jp,
}

impl Lang {
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "id" => Self::Id,
            "de" => Self::De,
            "jp" | "ja" => Self::Jp,
            _ => Self::En,
        }
    }

    fn folder(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::De => "de",
            Lang::Id => "id",
            Lang::Jp => "ja",
        }
    }
}

fn load_message_file(lang: Lang, namespace: Namespace) -> Value {
    let file_path = Path::new(LOCALES_DIR.as_str())
        .join(lang.folder())
        .join(format!("{}.json", namespace.as_str()));

    match fs::read_to_string(&file_path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(json) => {
                log::debug!("Loaded messages from {:?}", file_path);
                json
            }
            Err(err) => {
                log::error!("Failed to parse JSON from {:?}: {}", file_path, err);
                Value::Null
            }
        },
        Err(err) => {
            log::warn!("Failed to read file {:?}: {}", file_path, err);
            Value::Null
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Namespace {
    Validation,
    Auth,
    Organization,
}

impl Namespace {
    fn as_str(&self) -> &'static str {
        match self {
            Namespace::Validation => "validation",
            Namespace::Auth => "auth",
            Namespace::Organization => "organization",
        }
    }
}

/// Localized message catalog for one request.
///
/// Every lookup carries an English fallback, so a missing or broken locale
/// file degrades to English instead of failing the request.
#[derive(Debug, Default)]
pub struct Messages {
    pub auth: Value,
    pub organization: Value,
    pub validation: Value,
}

impl Messages {
    pub fn new(lang: Lang) -> Self {
        Self {
            auth: load_message_file(lang, Namespace::Auth),
            organization: load_message_file(lang, Namespace::Organization),
            validation: load_message_file(lang, Namespace::Validation),
        }
    }

    pub fn get(&self, namespace: &Namespace, path: &str) -> Option<&Value> {
        let root = match namespace {
            Namespace::Auth => &self.auth,
            Namespace::Organization => &self.organization,
            Namespace::Validation => &self.validation,
        };

        let mut current = root;
        for key in path.split('.') {
            match current.get(key) {
                Some(next) => current = next,
                None => {
                    log::trace!(
                        "Key '{}' not found in path '{}.{}'",
                        key,
                        namespace.as_str(),
                        path
                    );
                    return None;
                }
            }
        }

        Some(current)
    }

    pub fn get_str(&self, namespace: Namespace, path: &str, fallback: &str) -> String {
        self.get(&namespace, path)
            .and_then(Value::as_str)
            .unwrap_or(fallback)
            .to_string()
    }

    pub fn get_validation_message(&self, path: &str, fallback: &str) -> String {
        self.get_str(Namespace::Validation, path, fallback)
    }

    pub fn get_auth_message(&self, path: &str, fallback: &str) -> String {
        self.get_str(Namespace::Auth, path, fallback)
    }

    pub fn get_organization_message(&self, path: &str, fallback: &str) -> String {
        self.get_str(Namespace::Organization, path, fallback)
    }
}

pub fn get_lang(req: &actix_web::HttpRequest) -> Lang {
    req.headers()
        .get("Accept-Language")
        .and_then(|value| value.to_str().ok())
        .and_then(|header| {
            header
                .split(',')
                .next()
                .and_then(|tag| tag.split(['-', ';']).next())
        })
        .map(Lang::from_code)
        .unwrap_or(Lang::En)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use serde_json::json;

    #[test]
    fn picks_primary_language_tag() {
        let req = TestRequest::default()
            .insert_header(("Accept-Language", "de-DE,de;q=0.9,en;q=0.8"))
            .to_http_request();
        assert_eq!(get_lang(&req), Lang::De);
    }

    #[test]
    fn defaults_to_english() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(get_lang(&req), Lang::En);
        assert_eq!(Lang::from_code("fr"), Lang::En);
    }

    #[test]
    fn falls_back_when_key_is_missing() {
        let messages = Messages {
            organization: json!({ "fetch": { "not_found": "Organisation nicht gefunden" } }),
            ..Messages::default()
        };

        assert_eq!(
            messages.get_organization_message("fetch.not_found", "Organization not found"),
            "Organisation nicht gefunden"
        );
        assert_eq!(
            messages.get_auth_message("login.success", "Login successful"),
            "Login successful"
        );
    }

    #[test]
    fn loads_english_catalog_from_disk() {
        let messages = Messages::new(Lang::En);
        assert_eq!(
            messages.get_organization_message("create.duplicate", "fallback"),
            "Organization name already exists"
        );
    }
}
