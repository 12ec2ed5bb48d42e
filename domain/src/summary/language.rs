//! Output language of a summary

use serde::{Deserialize, Serialize};

/// Language a summary is written in (Value Object)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ja")]
    Japanese,
    #[default]
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Detect the language of release notes.
    ///
    /// Any CJK punctuation, kana or common kanji marks the text as Japanese.
    pub fn detect(text: &str) -> Self {
        if text.chars().any(is_japanese_char) {
            Language::Japanese
        } else {
            Language::English
        }
    }

    /// Short tag used on the wire and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Japanese => "ja",
            Language::English => "en",
        }
    }

    /// Human-readable name for console output
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Japanese => "日本語",
            Language::English => "English",
        }
    }
}

fn is_japanese_char(c: char) -> bool {
    matches!(
        c,
        '\u{3000}'..='\u{303f}' // CJK symbols and punctuation
            | '\u{3040}'..='\u{309f}' // Hiragana
            | '\u{30a0}'..='\u{30ff}' // Katakana
            | '\u{4e00}'..='\u{9faf}' // Kanji
    )
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ja" | "japanese" => Ok(Language::Japanese),
            "en" | "english" => Ok(Language::English),
            other => Err(format!("Unknown language: {} (expected ja or en)", other)),
        }
    }
}
