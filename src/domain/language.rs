use serde::Deserialize;

/// Display language for preset names and UI labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "en")]
    English,
    #[serde(alias = "de")]
    German,
}

impl Language {
    /// Map a POSIX locale tag such as `de_DE.UTF-8` to a language.
    /// Anything that is not German falls back to English.
    pub fn from_locale(tag: &str) -> Self {
        if tag.get(..2).is_some_and(|prefix| prefix.eq_ignore_ascii_case("de")) {
            Language::German
        } else {
            Language::English
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Language::English => Language::German,
            Language::German => Language::English,
        }
    }
}
