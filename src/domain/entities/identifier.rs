//! Classification of incoming identifier strings.

use std::fmt;

/// A public identifier, classified once per request.
///
/// Classification is purely syntactic: a string of ASCII digits is a numeric
/// id, anything else is an alias. It does not depend on which resource kind
/// owns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    NumericId(i64),
    Alias(String),
}

impl Identifier {
    /// Classifies a raw path segment.
    ///
    /// Returns `None` for input that cannot name any record: the empty string
    /// and digit strings that overflow `i64`.
    pub fn classify(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        if raw.bytes().all(|b| b.is_ascii_digit()) {
            return raw.parse::<i64>().ok().map(Identifier::NumericId);
        }

        Some(Identifier::Alias(raw.to_string()))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::NumericId(id) => write!(f, "{id}"),
            Identifier::Alias(alias) => f.write_str(alias),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_are_numeric() {
        assert_eq!(Identifier::classify("42"), Some(Identifier::NumericId(42)));
        assert_eq!(
            Identifier::classify("0007"),
            Some(Identifier::NumericId(7))
        );
    }

    #[test]
    fn test_everything_else_is_alias() {
        assert_eq!(
            Identifier::classify("promo"),
            Some(Identifier::Alias("promo".to_string()))
        );
        assert_eq!(
            Identifier::classify("f1000"),
            Some(Identifier::Alias("f1000".to_string()))
        );
        assert_eq!(
            Identifier::classify("-5"),
            Some(Identifier::Alias("-5".to_string()))
        );
        assert_eq!(
            Identifier::classify("12a"),
            Some(Identifier::Alias("12a".to_string()))
        );
    }

    #[test]
    fn test_non_ascii_digits_are_alias() {
        assert_eq!(
            Identifier::classify("١٢"),
            Some(Identifier::Alias("١٢".to_string()))
        );
    }

    #[test]
    fn test_unresolvable_input() {
        assert_eq!(Identifier::classify(""), None);
        assert_eq!(Identifier::classify("99999999999999999999999"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Identifier::NumericId(9).to_string(), "9");
        assert_eq!(Identifier::Alias("x".to_string()).to_string(), "x");
    }
}
