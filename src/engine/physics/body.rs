use rapier2d::prelude::*;

/// Collision shape of a body, in simulation meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeDesc {
    /// Axis-aligned box given by half extents (before the body's rotation)
    Box {
        half_width: Real,
        half_height: Real,
    },
    /// Circle given by its radius
    Circle { radius: Real },
}

/// Kinematic class of a body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Immovable; participates in collisions but never moves
    Static,
    /// Fully simulated; affected by gravity and contacts
    Dynamic,
}

impl BodyKind {
    fn to_rapier(self) -> RigidBodyType {
        match self {
            BodyKind::Static => RigidBodyType::Fixed,
            BodyKind::Dynamic => RigidBodyType::Dynamic,
        }
    }
}

/// Complete description of one body in the scene configuration table
///
/// Positions and shapes are in simulation meters; callers working in display
/// pixels convert through `UnitScale` before building a descriptor.
#[derive(Debug, Clone)]
pub struct BodyDescriptor {
    /// Name registered for the body's collider
    pub name: &'static str,
    /// Collision shape
    pub shape: ShapeDesc,
    /// Initial position of the body origin, meters
    pub position: [Real; 2],
    /// Initial rotation, radians
    pub angle: Real,
    /// Static or dynamic
    pub kind: BodyKind,
    /// Collider density; mass is derived from it for dynamic bodies
    pub density: Real,
}

impl BodyDescriptor {
    /// Build the rigid body for this descriptor
    pub(crate) fn build_body(&self) -> RigidBody {
        RigidBodyBuilder::new(self.kind.to_rapier())
            .position(Isometry::new(
                vector![self.position[0], self.position[1]],
                self.angle,
            ))
            .build()
    }

    /// Build the collider for this descriptor
    ///
    /// Every collider asks for collision events so contacts involving it
    /// reach the installed event handler.
    pub(crate) fn build_collider(&self) -> Collider {
        let shape = match self.shape {
            ShapeDesc::Box {
                half_width,
                half_height,
            } => SharedShape::cuboid(half_width, half_height),
            ShapeDesc::Circle { radius } => SharedShape::ball(radius),
        };

        ColliderBuilder::new(shape)
            .density(self.density)
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .build()
    }
}
