use serde::{Deserialize, Serialize};

/// Display language picked in the header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    Es,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::Es];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Es => "es",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Fr => "FR",
            Language::Es => "ES",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::En => "🇺🇸",
            Language::Fr => "🇨🇦",
            Language::Es => "🇲🇽",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Cad,
    Usd,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Cad, Currency::Usd];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Cad => "CAD",
            Currency::Usd => "USD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Cad => "C$",
            Currency::Usd => "$",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|currency| currency.code() == code)
    }
}

/// Per-user display preferences, read at startup and written on change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub currency: Currency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_english_and_cad() {
        let prefs = Preferences::default();
        assert_eq!(prefs.language, Language::En);
        assert_eq!(prefs.currency, Currency::Cad);
    }

    #[test]
    fn serialises_with_short_codes() {
        let prefs = Preferences {
            language: Language::Fr,
            currency: Currency::Usd,
        };
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(json, r#"{"language":"fr","currency":"USD"}"#);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"language":"es"}"#).unwrap();
        assert_eq!(prefs.language, Language::Es);
        assert_eq!(prefs.currency, Currency::Cad);
    }

    #[test]
    fn codes_round_trip_through_selects() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        for currency in Currency::ALL {
            assert_eq!(Currency::from_code(currency.code()), Some(currency));
        }
        assert_eq!(Language::from_code("de"), None);
    }
}
