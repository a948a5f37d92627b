use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Script the bibliographic fields are requested in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "zh-CN")]
    SimplifiedChinese,
    #[serde(rename = "zh-TW")]
    TraditionalChinese,
}

impl Language {
    /// Locale tag, also the persisted value
    pub fn code(&self) -> &'static str {
        match self {
            Language::SimplifiedChinese => "zh-CN",
            Language::TraditionalChinese => "zh-TW",
        }
    }

    /// Name used inside the model instruction
    pub fn prompt_name(&self) -> &'static str {
        match self {
            Language::SimplifiedChinese => "Simplified Chinese (简体中文)",
            Language::TraditionalChinese => "Traditional Chinese (繁体中文)",
        }
    }

    /// Short toggle label
    pub fn label(&self) -> &'static str {
        match self {
            Language::SimplifiedChinese => "简体",
            Language::TraditionalChinese => "繁體",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::SimplifiedChinese => Language::TraditionalChinese,
            Language::TraditionalChinese => Language::SimplifiedChinese,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language '{0}', expected zh-CN or zh-TW")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh-cn" | "zh_cn" | "cn" | "simplified" | "hans" | "简体" => {
                Ok(Language::SimplifiedChinese)
            }
            "zh-tw" | "zh_tw" | "tw" | "traditional" | "hant" | "繁體" | "繁体" => {
                Ok(Language::TraditionalChinese)
            }
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_aliases() {
        assert_eq!("zh-CN".parse::<Language>(), Ok(Language::SimplifiedChinese));
        assert_eq!("TW".parse::<Language>(), Ok(Language::TraditionalChinese));
        assert_eq!(" traditional ".parse::<Language>(), Ok(Language::TraditionalChinese));
        assert_eq!("繁體".parse::<Language>(), Ok(Language::TraditionalChinese));
        assert!("en".parse::<Language>().is_err());
    }

    #[test]
    fn serializes_as_locale_tag() {
        let json = serde_json::to_string(&Language::TraditionalChinese).unwrap();
        assert_eq!(json, "\"zh-TW\"");

        let lang: Language = serde_json::from_str("\"zh-CN\"").unwrap();
        assert_eq!(lang, Language::SimplifiedChinese);
    }

    #[test]
    fn toggle_switches_script() {
        assert_eq!(
            Language::SimplifiedChinese.toggled(),
            Language::TraditionalChinese
        );
        assert_eq!(
            Language::TraditionalChinese.toggled(),
            Language::SimplifiedChinese
        );
    }
}
