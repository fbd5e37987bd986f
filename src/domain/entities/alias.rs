//! Validated alias newtype.

use std::fmt;

use crate::utils::alias_rules::{AliasRule, check_alias};

/// An alias that passed every rule in [`crate::utils::alias_rules`].
///
/// Aliases are case-sensitive; the normalized form is the candidate itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alias(String);

impl Alias {
    /// Validates a candidate alias.
    ///
    /// # Errors
    ///
    /// Returns the first [`AliasRule`] the candidate violates.
    pub fn parse(candidate: &str) -> Result<Self, AliasRule> {
        check_alias(candidate)?;
        Ok(Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Alias {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_case() {
        let alias = Alias::parse("MyPromo").unwrap();
        assert_eq!(alias.as_str(), "MyPromo");
        assert_eq!(alias.to_string(), "MyPromo");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert_eq!(Alias::parse("123"), Err(AliasRule::AllDigits));
        assert_eq!(Alias::parse("admin"), Err(AliasRule::Reserved));
    }
}
