//! Helpers for classifying PostgreSQL constraint violations.

/// Constraint names declared in `migrations/`.
pub mod constraints {
    pub const ALIASES_PKEY: &str = "aliases_pkey";
    pub const ALIASES_RESOURCE_ID_KEY: &str = "aliases_resource_id_key";
    pub const LINKS_PKEY: &str = "links_pkey";
    pub const LINKS_ALIAS_KEY: &str = "links_alias_key";
    pub const FILE_ASSETS_PKEY: &str = "file_assets_pkey";
    pub const FILE_ASSETS_ALIAS_KEY: &str = "file_assets_alias_key";
}

/// Returns the violated constraint name if `e` is a unique violation.
pub fn unique_violation(e: &sqlx::Error) -> Option<&str> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    db_err.constraint()
}

/// Returns `true` if `e` is a unique violation on any of `names`.
pub fn is_unique_violation_on(e: &sqlx::Error, names: &[&str]) -> bool {
    unique_violation(e).is_some_and(|c| names.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_not_unique_violation() {
        let err = sqlx::Error::RowNotFound;
        assert!(unique_violation(&err).is_none());
        assert!(!is_unique_violation_on(&err, &[constraints::ALIASES_PKEY]));
    }
}
