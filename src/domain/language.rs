use std::fmt;
use std::str::FromStr;

/// Interface language of a user. Only affects localization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    EnUs,
    FrFr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::EnUs, Language::FrFr];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::EnUs => "en-us",
            Language::FrFr => "fr-fr",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::FrFr => "French",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en-us" => Ok(Language::EnUs),
            "fr-fr" => Ok(Language::FrFr),
            _ => Err(format!(
                "Invalid language: {}. Expected one of: en-us, fr-fr",
                s
            )),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
