//! Locale bootstrap: tag resolution with saved → detected → fallback precedence.
//!
//! Mirrors the web app's start-up rules:
//!
//! 1. A saved preference naming a registered locale wins.
//! 2. Otherwise the system-detected tag is mapped — Chinese-prefixed tags
//!    select Chinese, anything else English.
//! 3. Otherwise the fixed English fallback applies.
//!
//! No translation content lives here; consumers load their own catalogues.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Supported UI locales.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, the fallback locale.
    #[default]
    En,
    /// Simplified Chinese.
    Zh,
}

impl Locale {
    /// The locale used when neither a saved preference nor a detected tag
    /// applies.
    pub const FALLBACK: Self = Self::En;

    /// BCP-47 primary subtag for this locale.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Parses a tag by its primary subtag, `None` for unregistered locales.
    ///
    /// `"zh"`, `"zh-CN"` and `"zh_CN.UTF-8"` all map to [`Locale::Zh`];
    /// matching is case-insensitive.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = primary_subtag(tag);
        if primary.eq_ignore_ascii_case("en") {
            Some(Self::En)
        } else if primary.eq_ignore_ascii_case("zh") {
            Some(Self::Zh)
        } else {
            None
        }
    }

    /// Maps a detected system tag to a locale.
    ///
    /// Detection is binary: Chinese-prefixed tags select Chinese, every
    /// other tag selects English.
    #[must_use]
    pub fn for_detected(tag: &str) -> Self {
        if primary_subtag(tag).eq_ignore_ascii_case("zh") {
            Self::Zh
        } else {
            Self::En
        }
    }

    /// Resolves the start-up locale.
    ///
    /// Precedence: a saved tag naming a registered locale, then a detected
    /// tag via [`Locale::for_detected`], then [`Locale::FALLBACK`].
    #[must_use]
    pub fn resolve(saved: Option<&str>, detected: Option<&str>) -> Self {
        saved
            .and_then(Self::from_tag)
            .or_else(|| detected.map(Self::for_detected))
            .unwrap_or(Self::FALLBACK)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| Error::locale(format!("unknown locale tag '{s}'")))
    }
}

/// Returns the first non-empty locale tag among `LC_ALL`, `LC_MESSAGES`,
/// and `LANG`, skipping the `C` and `POSIX` pseudo-locales.
#[must_use]
pub fn detect_system() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"].into_iter().find_map(|key| {
        std::env::var(key)
            .ok()
            .filter(|v| !v.trim().is_empty() && v != "C" && v != "POSIX")
    })
}

/// Strips region and encoding suffixes: `"zh_CN.UTF-8"` → `"zh"`.
fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_', '.']).next().unwrap_or(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_preference_wins() {
        assert_eq!(Locale::resolve(Some("zh"), Some("en-US")), Locale::Zh);
    }

    #[test]
    fn unregistered_saved_tag_falls_through_to_detection() {
        assert_eq!(Locale::resolve(Some("fr"), Some("zh-CN")), Locale::Zh);
    }

    #[test]
    fn detected_non_chinese_tag_maps_to_english() {
        assert_eq!(Locale::resolve(None, Some("de-DE")), Locale::En);
    }

    #[test]
    fn no_inputs_yield_fallback() {
        assert_eq!(Locale::resolve(None, None), Locale::FALLBACK);
    }

    #[test]
    fn posix_style_tags_parse() {
        assert_eq!(Locale::from_tag("zh_CN.UTF-8"), Some(Locale::Zh));
        assert_eq!(Locale::from_tag("en_GB"), Some(Locale::En));
        assert_eq!(Locale::from_tag("ja_JP"), None);
    }

    #[test]
    fn from_str_rejects_unknown_tags() {
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!("ZH-tw".parse::<Locale>().ok(), Some(Locale::Zh));
    }
}
