use rapier2d::pipeline::{
    DebugRenderBackend, DebugRenderMode, DebugRenderPipeline, DebugRenderStyle,
};
use rapier2d::prelude::*;
use std::num::NonZeroUsize;

use super::body::BodyDescriptor;
use super::contact::{ContactQueue, RawContact};

/// Handle to identify rigid bodies
pub type RigidBodyHandle = rapier2d::prelude::RigidBodyHandle;

/// Handle to identify colliders
pub type ColliderHandle = rapier2d::prelude::ColliderHandle;

/// Default velocity-style solver iterations per step
pub const VELOCITY_ITERATIONS: usize = 3;

/// Default position-style solver iterations per step
pub const POSITION_ITERATIONS: usize = 2;

/// Solver quality knobs, kept configurable rather than hardcoded
///
/// rapier's solver does not expose the classic velocity/position iteration
/// pair directly: `velocity` maps to the main solver iteration count and
/// `position` to the internal PGS passes per iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverIterations {
    pub velocity: usize,
    pub position: usize,
}

impl Default for SolverIterations {
    fn default() -> Self {
        Self {
            velocity: VELOCITY_ITERATIONS,
            position: POSITION_ITERATIONS,
        }
    }
}

impl SolverIterations {
    /// Write the iteration counts into rapier's integration parameters.
    /// Counts below one are clamped; the solver requires at least one pass.
    pub fn apply(&self, params: &mut IntegrationParameters) {
        params.num_solver_iterations =
            NonZeroUsize::new(self.velocity.max(1)).unwrap_or(NonZeroUsize::MIN);
        params.num_internal_pgs_iterations = self.position.max(1);
    }
}

/// Physics world that manages the simulation
///
/// Thin wrapper over rapier's pipeline: owns every engine-side set, steps by
/// an externally supplied elapsed time, collects contact notifications, and
/// emits debug wireframes through an installed draw backend.
pub struct PhysicsWorld {
    /// Gravity vector (demo convention: y-down screen coordinates)
    gravity: Vector<Real>,

    /// Integration parameters; `dt` is rewritten every step
    integration_parameters: IntegrationParameters,

    /// Physics pipeline handles collision detection and solving
    physics_pipeline: PhysicsPipeline,

    /// Island manager for sleeping bodies
    island_manager: IslandManager,

    /// Broad phase collision detection
    broad_phase: DefaultBroadPhase,

    /// Narrow phase collision detection
    narrow_phase: NarrowPhase,

    /// Impulse joint set
    impulse_joint_set: ImpulseJointSet,

    /// Multibody joint set
    multibody_joint_set: MultibodyJointSet,

    /// CCD solver for fast-moving objects
    ccd_solver: CCDSolver,

    /// Rigid body set
    rigid_body_set: RigidBodySet,

    /// Collider set
    collider_set: ColliderSet,

    /// Contact notification sink, installed as the pipeline's event handler
    contact_queue: ContactQueue,

    /// Wireframe emission pass (collider shapes and contact points)
    debug_pipeline: DebugRenderPipeline,
}

impl PhysicsWorld {
    /// Create a new physics world with the demo's default gravity
    pub fn new() -> Self {
        Self::with_gravity(vector![0.0, 9.8])
    }

    /// Create a new physics world with custom gravity
    pub fn with_gravity(gravity: Vector<Real>) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        SolverIterations::default().apply(&mut integration_parameters);

        Self {
            gravity,
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            contact_queue: ContactQueue::new(),
            debug_pipeline: DebugRenderPipeline::new(
                DebugRenderStyle::default(),
                DebugRenderMode::COLLIDER_SHAPES | DebugRenderMode::CONTACTS,
            ),
        }
    }

    /// Override the solver iteration counts
    pub fn set_solver_iterations(&mut self, iterations: SolverIterations) {
        iterations.apply(&mut self.integration_parameters);
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// Contact notifications from the previous step are discarded first, so
    /// `raw_contacts` afterwards reflects exactly this step.
    pub fn step(&mut self, dt: Real) {
        self.contact_queue.clear();
        self.integration_parameters.dt = dt;

        let event_handler = &self.contact_queue;

        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            None,
            &(),
            event_handler,
        );
    }

    /// Insert a body and its collider from a descriptor
    pub fn spawn(&mut self, desc: &BodyDescriptor) -> (RigidBodyHandle, ColliderHandle) {
        let body_handle = self.rigid_body_set.insert(desc.build_body());
        let collider_handle = self.collider_set.insert_with_parent(
            desc.build_collider(),
            body_handle,
            &mut self.rigid_body_set,
        );
        (body_handle, collider_handle)
    }

    /// Contact notifications recorded by the most recent step
    pub fn raw_contacts(&self) -> Vec<RawContact> {
        self.contact_queue.events()
    }

    /// Emit the world's debug wireframes through the given draw backend
    pub fn debug_draw(&mut self, backend: &mut impl DebugRenderBackend) {
        self.debug_pipeline.render(
            backend,
            &self.rigid_body_set,
            &self.collider_set,
            &self.impulse_joint_set,
            &self.multibody_joint_set,
            &self.narrow_phase,
        );
    }

    /// Get a reference to a rigid body
    pub fn rigid_body(&self, handle: RigidBodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(handle)
    }

    /// Get a reference to a collider
    pub fn collider(&self, handle: ColliderHandle) -> Option<&Collider> {
        self.collider_set.get(handle)
    }

    /// Number of rigid bodies in the world
    pub fn body_count(&self) -> usize {
        self.rigid_body_set.len()
    }

    /// Get current gravity
    pub fn gravity(&self) -> Vector<Real> {
        self.gravity
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
