use regex::Regex;
use std::sync::LazyLock;

use crate::constants::COLLECTION_PREFIX;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is a valid regex"));

/// Backing collection for an organization: lowercased, whitespace runs
/// collapsed to `_`, prefixed with `org_`.
pub fn derive_collection_name(organization_name: &str) -> String {
    let lowered = organization_name.to_lowercase();
    let collapsed = WHITESPACE_RUN.replace_all(&lowered, "_");
    format!("{COLLECTION_PREFIX}{collapsed}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_from_simple_name() {
        assert_eq!(derive_collection_name("Acme Corp"), "org_acme_corp");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(
            derive_collection_name("Globex \t  Corporation"),
            "org_globex_corporation"
        );
    }

    #[test]
    fn keeps_other_characters() {
        assert_eq!(
            derive_collection_name("Stark-Industries & Co."),
            "org_stark-industries_&_co."
        );
    }
}
