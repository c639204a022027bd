//! User-facing notification messages.
//!
//! Rejections are shown to the user as a short notification. Polish is the
//! default locale; English is available for shells that want it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::CalcError;

/// Language of user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Pl,
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Pl => f.write_str("pl"),
            Locale::En => f.write_str("en"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown locale: {0} (expected 'pl' or 'en')")]
pub struct LocaleParseError(pub String);

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pl" => Ok(Locale::Pl),
            "en" => Ok(Locale::En),
            _ => Err(LocaleParseError(s.to_string())),
        }
    }
}

impl CalcError {
    /// The notification shown to the user for this rejection.
    pub fn message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (CalcError::EmptyInput, Locale::Pl) => "Wprowadź obie liczby",
            (CalcError::InvalidNumber, Locale::Pl) => "Niepoprawne liczby",
            (CalcError::DivisionByZero, Locale::Pl) => "Nie można dzielić przez 0",
            (CalcError::Overflow, Locale::Pl) => "Wynik poza zakresem",
            (CalcError::EmptyInput, Locale::En) => "Enter both numbers",
            (CalcError::InvalidNumber, Locale::En) => "Invalid numbers",
            (CalcError::DivisionByZero, Locale::En) => "Cannot divide by 0",
            (CalcError::Overflow, Locale::En) => "Result out of range",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_is_polish() {
        assert_eq!(Locale::default(), Locale::Pl);
    }

    #[test]
    fn test_polish_messages() {
        assert_eq!(CalcError::EmptyInput.message(Locale::Pl), "Wprowadź obie liczby");
        assert_eq!(CalcError::InvalidNumber.message(Locale::Pl), "Niepoprawne liczby");
        assert_eq!(CalcError::DivisionByZero.message(Locale::Pl), "Nie można dzielić przez 0");
    }

    #[test]
    fn test_english_messages() {
        assert_eq!(CalcError::EmptyInput.message(Locale::En), "Enter both numbers");
        assert_eq!(CalcError::Overflow.message(Locale::En), "Result out of range");
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for locale in [Locale::Pl, Locale::En] {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
        assert_eq!(Locale::En.to_string(), "en");
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!("PL".parse::<Locale>().unwrap(), Locale::Pl);
        assert_eq!(" en ".parse::<Locale>().unwrap(), Locale::En);
        assert!("de".parse::<Locale>().is_err());
    }
}
