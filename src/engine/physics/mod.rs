// Physics system using rapier2d

pub mod body;
pub mod contact;
pub mod debug;
pub mod registry;
pub mod world;

pub use body::{BodyDescriptor, BodyKind, ShapeDesc};
pub use contact::ContactEvent;
pub use debug::{DebugLines, LineVertex};
pub use registry::{ColliderTag, TagRegistry};
pub use world::{PhysicsWorld, RigidBodyHandle};

// Re-export for internal use and future expansion
#[allow(unused_imports)]
pub use contact::{ContactPhase, ContactSide, RawContact};
#[allow(unused_imports)]
pub use world::{ColliderHandle, SolverIterations};

// Re-export commonly used rapier types for convenience
#[allow(unused_imports)]
pub use rapier2d::prelude::{nalgebra, Real, Vector};
