use rapier2d::prelude::*;
use std::fmt;
use std::sync::{Arc, Mutex};

use super::registry::{ColliderTag, TagRegistry};

/// Whether a contact is starting or ending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    /// The two colliders started touching this step
    Begin,
    /// The two colliders stopped touching this step
    End,
}

impl fmt::Display for ContactPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactPhase::Begin => write!(f, "begin"),
            ContactPhase::End => write!(f, "end"),
        }
    }
}

/// Engine-level contact notification: two opaque collider handles and a phase
#[derive(Debug, Clone, Copy)]
pub struct RawContact {
    pub phase: ContactPhase,
    pub first: ColliderHandle,
    pub second: ColliderHandle,
}

/// One side of a resolved contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactSide {
    /// The collider was registered; its record is attached
    Tagged(ColliderTag),
    /// The collider carries no record. Untagged geometry touching tagged
    /// geometry is expected, not an error.
    Unknown,
}

impl ContactSide {
    /// Registered name for this side, if any
    pub fn name(&self) -> Option<&str> {
        match self {
            ContactSide::Tagged(tag) => Some(tag.name.as_str()),
            ContactSide::Unknown => None,
        }
    }

    /// Whether this side resolved to no record
    pub fn is_unknown(&self) -> bool {
        matches!(self, ContactSide::Unknown)
    }
}

impl fmt::Display for ContactSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "<unknown>"),
        }
    }
}

/// Application-level contact event with both sides resolved through the
/// registry. Transient: constructed per engine callback, consumed (logged)
/// immediately, not retained across steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEvent {
    pub phase: ContactPhase,
    pub first: ContactSide,
    pub second: ContactSide,
}

impl ContactEvent {
    /// Translate an engine notification into an application event
    ///
    /// Pure and total: a registry miss on either side yields `Unknown` for
    /// that side, and an event with both sides unknown is still well formed.
    pub fn resolve(raw: &RawContact, registry: &TagRegistry) -> Self {
        let side = |handle| match registry.get(handle) {
            Some(tag) => ContactSide::Tagged(tag.clone()),
            None => ContactSide::Unknown,
        };

        Self {
            phase: raw.phase,
            first: side(raw.first),
            second: side(raw.second),
        }
    }

    /// Whether either side resolved to the given name
    pub fn involves(&self, name: &str) -> bool {
        self.first.name() == Some(name) || self.second.name() == Some(name)
    }
}

impl fmt::Display for ContactEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "contact {}: {} <-> {}", self.phase, self.first, self.second)
    }
}

/// Queue collecting engine contact notifications during a physics step
///
/// Installed once as the pipeline's sole event handler. rapier invokes the
/// handler through `&self`, so the buffer sits behind a mutex even though
/// all access stays on the stepping thread.
pub struct ContactQueue {
    raw: Arc<Mutex<Vec<RawContact>>>,
}

impl ContactQueue {
    pub fn new() -> Self {
        Self {
            raw: Arc::new(Mutex::new(Vec::with_capacity(16))),
        }
    }

    /// Clear all notifications (call at the start of each step)
    pub fn clear(&self) {
        if let Ok(mut raw) = self.raw.lock() {
            raw.clear();
        }
    }

    /// Notifications recorded by the most recent step
    pub fn events(&self) -> Vec<RawContact> {
        self.raw
            .lock()
            .map(|raw| raw.clone())
            .unwrap_or_default()
    }

    fn push(&self, contact: RawContact) {
        if let Ok(mut raw) = self.raw.lock() {
            raw.push(contact);
        }
    }
}

impl Default for ContactQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for ContactQueue {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        match event {
            CollisionEvent::Started(first, second, _flags) => {
                self.push(RawContact {
                    phase: ContactPhase::Begin,
                    first,
                    second,
                });
            }
            CollisionEvent::Stopped(first, second, _flags) => {
                self.push(RawContact {
                    phase: ContactPhase::End,
                    first,
                    second,
                });
            }
        }
    }

    fn handle_contact_force_event(
        &self,
        _dt: Real,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: Real,
    ) {
        // Force events are not part of this demo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_handles() -> (ColliderHandle, ColliderHandle) {
        let mut colliders = ColliderSet::new();
        let a = colliders.insert(ColliderBuilder::ball(0.5).build());
        let b = colliders.insert(ColliderBuilder::cuboid(1.0, 1.0).build());
        (a, b)
    }

    #[test]
    fn test_resolve_both_sides_tagged() {
        let (a, b) = two_handles();
        let mut registry = TagRegistry::new();
        registry.register(a, ColliderTag::new("box"));
        registry.register(b, ColliderTag::new("ground"));

        let raw = RawContact {
            phase: ContactPhase::Begin,
            first: a,
            second: b,
        };
        let event = ContactEvent::resolve(&raw, &registry);

        assert_eq!(event.phase, ContactPhase::Begin);
        assert_eq!(event.first.name(), Some("box"));
        assert_eq!(event.second.name(), Some("ground"));
        assert!(event.involves("box") && event.involves("ground"));
    }

    #[test]
    fn test_resolve_total_when_both_sides_unregistered() {
        let (a, b) = two_handles();
        let registry = TagRegistry::new();

        let raw = RawContact {
            phase: ContactPhase::End,
            first: a,
            second: b,
        };
        let event = ContactEvent::resolve(&raw, &registry);

        assert_eq!(event.phase, ContactPhase::End);
        assert!(event.first.is_unknown());
        assert!(event.second.is_unknown());
    }

    #[test]
    fn test_resolve_one_side_unknown() {
        let (a, b) = two_handles();
        let mut registry = TagRegistry::new();
        registry.register(a, ColliderTag::new("circle"));

        let raw = RawContact {
            phase: ContactPhase::Begin,
            first: a,
            second: b,
        };
        let event = ContactEvent::resolve(&raw, &registry);

        assert_eq!(event.first.name(), Some("circle"));
        assert!(event.second.is_unknown());
    }

    #[test]
    fn test_event_display() {
        let (a, b) = two_handles();
        let mut registry = TagRegistry::new();
        registry.register(a, ColliderTag::new("box"));

        let raw = RawContact {
            phase: ContactPhase::Begin,
            first: a,
            second: b,
        };
        let event = ContactEvent::resolve(&raw, &registry);
        assert_eq!(event.to_string(), "contact begin: box <-> <unknown>");
    }

    #[test]
    fn test_queue_records_started_and_stopped() {
        let (a, b) = two_handles();
        let queue = ContactQueue::new();
        let bodies = RigidBodySet::new();
        let colliders = ColliderSet::new();

        queue.handle_collision_event(
            &bodies,
            &colliders,
            CollisionEvent::Started(a, b, CollisionEventFlags::empty()),
            None,
        );
        queue.handle_collision_event(
            &bodies,
            &colliders,
            CollisionEvent::Stopped(a, b, CollisionEventFlags::empty()),
            None,
        );

        let events = queue.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].phase, ContactPhase::Begin);
        assert_eq!(events[1].phase, ContactPhase::End);
        assert_eq!(events[0].first, a);
        assert_eq!(events[0].second, b);
    }

    #[test]
    fn test_queue_clear() {
        let (a, b) = two_handles();
        let queue = ContactQueue::new();
        let bodies = RigidBodySet::new();
        let colliders = ColliderSet::new();

        queue.handle_collision_event(
            &bodies,
            &colliders,
            CollisionEvent::Started(a, b, CollisionEventFlags::empty()),
            None,
        );
        assert_eq!(queue.events().len(), 1);

        queue.clear();
        assert!(queue.events().is_empty());
    }
}
