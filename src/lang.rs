use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage key for the persisted language preference.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// Display language for the whole site.
///
/// The persisted form is the bare tag (`"en"` / `"id"`). Anything else in
/// storage fails to parse and the storage layer falls back to the default,
/// so a stale or hand-edited value never surfaces as an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    Id,
}

impl Language {
    /// Languages in the fixed order the toggle renders them.
    pub const ALL: [Language; 2] = [Language::En, Language::Id];

    /// The storage/display tag for this language.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Id => "id",
        }
    }

    /// Label shown on the toggle button.
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Id => "ID",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized language tag: {0:?}")]
pub struct ParseLanguageError(String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "id" => Ok(Language::Id),
            other => Err(ParseLanguageError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for lang in Language::ALL {
            let parsed = lang.tag().parse::<Language>();
            assert_eq!(parsed, Ok(lang));
        }
    }

    #[test]
    fn unknown_tags_fail_to_parse() {
        for bad in ["", "EN", "Id", "fr", "en-US", "indonesian"] {
            assert!(bad.parse::<Language>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn toggle_order_is_en_then_id() {
        assert_eq!(Language::ALL, [Language::En, Language::Id]);
    }
}
