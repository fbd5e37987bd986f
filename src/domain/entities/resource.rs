//! Resource kinds sharing the identifier namespace, and resolution outcomes.

use std::fmt;

use super::{FileAsset, Link};

/// The two entity types addressed by public identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Link,
    File,
}

impl ResourceKind {
    /// Value stored in `aliases.resource_kind`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Link => "link",
            ResourceKind::File => "file",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resource an alias claim points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceRef {
    pub kind: ResourceKind,
    pub id: i64,
}

impl ResourceRef {
    pub fn link(id: i64) -> Self {
        Self {
            kind: ResourceKind::Link,
            id,
        }
    }

    pub fn file(id: i64) -> Self {
        Self {
            kind: ResourceKind::File,
            id,
        }
    }
}

/// Outcome of resolving an identifier. `NotFound` is a normal result.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Link(Link),
    File(FileAsset),
    NotFound,
}

impl Resolution {
    /// Label used for logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Resolution::Link(_) => "link",
            Resolution::File(_) => "file",
            Resolution::NotFound => "not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_storage_values() {
        assert_eq!(ResourceKind::Link.as_str(), "link");
        assert_eq!(ResourceKind::File.to_string(), "file");
    }

    #[test]
    fn test_resource_ref_constructors() {
        assert_eq!(ResourceRef::link(3).kind, ResourceKind::Link);
        assert_eq!(ResourceRef::file(4).id, 4);
    }

    #[test]
    fn test_not_found_outcome() {
        assert_eq!(Resolution::NotFound.outcome(), "not_found");
    }
}
