// Collider metadata registry
//
// rapier's collider handles are opaque: the engine hands one back per
// collider and reports contacts in terms of handle pairs. Application data
// lives outside the engine in a handle-keyed side table instead of being
// bolted onto engine types.

use rapier2d::prelude::ColliderHandle;
use std::collections::HashMap;

/// Application-level record attached to a collider
///
/// Currently just a display name; extend with more fields as the demo grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColliderTag {
    /// Human-readable name, used when reporting contacts
    pub name: String,
}

impl ColliderTag {
    /// Create a tag with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Side table mapping collider handles to application records
///
/// Populated during world construction, read during contact resolution.
/// Only touched from the single update thread, so a plain map suffices.
#[derive(Debug, Default)]
pub struct TagRegistry {
    tags: HashMap<ColliderHandle, ColliderTag>,
}

impl TagRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            tags: HashMap::new(),
        }
    }

    /// Insert or overwrite the record for a handle
    pub fn register(&mut self, handle: ColliderHandle, tag: ColliderTag) {
        self.tags.insert(handle, tag);
    }

    /// Look up the record for a handle
    ///
    /// A miss returns `None`: the engine may report contacts for colliders
    /// the application chose not to tag, and that is not an error.
    pub fn get(&self, handle: ColliderHandle) -> Option<&ColliderTag> {
        self.tags.get(&handle)
    }

    /// Number of registered handles
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the registry holds no records
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rapier2d::prelude::{ColliderBuilder, ColliderSet};

    fn two_handles() -> (ColliderHandle, ColliderHandle) {
        let mut colliders = ColliderSet::new();
        let a = colliders.insert(ColliderBuilder::ball(0.5).build());
        let b = colliders.insert(ColliderBuilder::ball(0.5).build());
        (a, b)
    }

    #[test]
    fn test_register_then_get_round_trips() {
        let (a, _) = two_handles();
        let mut registry = TagRegistry::new();

        registry.register(a, ColliderTag::new("ground"));
        assert_eq!(registry.get(a).map(|t| t.name.as_str()), Some("ground"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_miss_returns_none() {
        let (a, b) = two_handles();
        let mut registry = TagRegistry::new();

        registry.register(a, ColliderTag::new("box"));
        assert!(registry.get(b).is_none());
        assert!(registry.get(ColliderHandle::invalid()).is_none());
    }

    #[test]
    fn test_register_overwrites() {
        let (a, _) = two_handles();
        let mut registry = TagRegistry::new();

        registry.register(a, ColliderTag::new("before"));
        registry.register(a, ColliderTag::new("after"));
        assert_eq!(registry.get(a).map(|t| t.name.as_str()), Some("after"));
        assert_eq!(registry.len(), 1, "overwrite must not add a second entry");
    }

    #[test]
    fn test_empty_registry() {
        let registry = TagRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get(ColliderHandle::invalid()).is_none());
    }
}
