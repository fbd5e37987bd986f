//! Syntactic and policy rules for user-chosen aliases.
//!
//! Aliases share the public path namespace with numeric identifiers and the
//! service's own routes, so the rules exclude anything that could be mistaken
//! for either.

use regex::Regex;
use std::sync::LazyLock;

/// Maximum alias length in characters.
pub const MAX_ALIAS_LEN: usize = 30;

/// Words that collide with service routes. Compared case-insensitively.
pub const RESERVED_ALIASES: &[&str] = &[
    "api", "about", "database", "admin", "login", "register", "settings", "file", "files",
];

/// Leading letter reserved for file identifier disambiguation.
pub const FILE_PREFIX: char = 'f';

static ALIAS_CHARSET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// The alias rule a candidate violated.
///
/// Rules are checked in declaration order and the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AliasRule {
    #[error("Alias must be 1-30 characters")]
    Length,

    #[error("Alias can only contain letters, digits, hyphens, and underscores")]
    Charset,

    #[error("Alias cannot consist only of digits")]
    AllDigits,

    #[error("This alias is reserved")]
    Reserved,

    #[error("Alias cannot start with 'f'")]
    FilePrefix,
}

impl AliasRule {
    /// Stable rule name reported to API clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            AliasRule::Length => "length",
            AliasRule::Charset => "charset",
            AliasRule::AllDigits => "all_digits",
            AliasRule::Reserved => "reserved",
            AliasRule::FilePrefix => "file_prefix",
        }
    }
}

/// Checks a candidate alias against every rule, in order.
///
/// # Errors
///
/// Returns the first [`AliasRule`] the candidate violates.
///
/// # Examples
///
/// ```ignore
/// assert!(check_alias("my-file_2").is_ok());
/// assert_eq!(check_alias("123"), Err(AliasRule::AllDigits));
/// assert_eq!(check_alias("Admin"), Err(AliasRule::Reserved));
/// assert_eq!(check_alias("f1000"), Err(AliasRule::FilePrefix));
/// ```
pub fn check_alias(candidate: &str) -> Result<(), AliasRule> {
    let len = candidate.chars().count();
    if len == 0 || len > MAX_ALIAS_LEN {
        return Err(AliasRule::Length);
    }

    if !ALIAS_CHARSET.is_match(candidate) {
        return Err(AliasRule::Charset);
    }

    if candidate.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AliasRule::AllDigits);
    }

    if RESERVED_ALIASES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(candidate))
    {
        return Err(AliasRule::Reserved);
    }

    if candidate
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&FILE_PREFIX))
    {
        return Err(AliasRule::FilePrefix);
    }

    Ok(())
}
