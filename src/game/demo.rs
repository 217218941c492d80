// Demo lifecycle: readiness gate around the physics scene

use log::{debug, info};

use crate::core::units::UnitScale;
use crate::engine::game_loop::FrameClock;
use crate::engine::physics::{ContactEvent, DebugLines};

use super::scene::{Scene, PIXELS_PER_METER};

/// Owns the scene once it exists and ignores frames until then
///
/// The windowing system delivers redraws before GPU setup has finished, so
/// every per-frame entry point treats a missing scene as "not ready yet"
/// and does nothing.
pub struct Demo {
    scene: Option<Scene>,
    clock: FrameClock,
    debug_lines: DebugLines,
}

impl Demo {
    pub fn new() -> Self {
        Self {
            scene: None,
            clock: FrameClock::new(),
            debug_lines: DebugLines::new(UnitScale::new(PIXELS_PER_METER)),
        }
    }

    /// Build the scene and start accepting frames
    ///
    /// Calling this on a running demo does nothing; the existing scene and
    /// its state are kept.
    pub fn start(&mut self) {
        if self.scene.is_some() {
            return;
        }
        let scene = Scene::new();
        info!("Scene ready: {} tagged bodies", scene.registry().len());
        self.scene = Some(scene);
        self.clock = FrameClock::new();
    }

    pub fn is_running(&self) -> bool {
        self.scene.is_some()
    }

    /// Advance one frame by the wall-clock time since the previous frame
    ///
    /// Returns the contact events produced by this step. Before `start`
    /// this is a no-op that returns no events and leaves the clock alone.
    pub fn advance(&mut self) -> Vec<ContactEvent> {
        if self.scene.is_none() {
            return Vec::new();
        }
        let dt = self.clock.tick();
        if self.clock.frame_count() % 60 == 0 {
            debug!("frame {}: {:.1} fps", self.clock.frame_count(), self.clock.fps());
        }
        self.advance_by(dt)
    }

    /// Advance one frame by an explicit timestep
    pub fn advance_by(&mut self, dt: f32) -> Vec<ContactEvent> {
        match self.scene.as_mut() {
            Some(scene) => scene.step(dt),
            None => Vec::new(),
        }
    }

    /// Emit the current wireframes into this frame's debug buffer
    pub fn emit_debug(&mut self) {
        if let Some(scene) = self.scene.as_mut() {
            scene.emit_debug(&mut self.debug_lines);
        }
    }

    /// Debug geometry buffered for the current frame
    pub fn debug_lines(&self) -> &DebugLines {
        &self.debug_lines
    }

    /// Drop this frame's debug geometry once the renderer has consumed it
    pub fn finish_frame(&mut self) {
        self.debug_lines.clear();
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }
}

impl Default for Demo {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_advance_before_start_is_noop() {
        let mut demo = Demo::new();
        assert!(!demo.is_running());

        assert!(demo.advance().is_empty());
        assert!(demo.advance().is_empty());

        demo.emit_debug();
        assert!(demo.debug_lines().is_empty());
    }

    #[test]
    fn test_start_builds_scene() {
        let mut demo = Demo::new();
        demo.start();

        assert!(demo.is_running());
        assert_eq!(demo.scene().map(|s| s.registry().len()), Some(4));
    }

    #[test]
    fn test_start_twice_keeps_existing_scene() {
        let mut demo = Demo::new();
        demo.start();

        for _ in 0..30 {
            demo.advance_by(DT);
        }
        let fallen_y = demo
            .scene()
            .and_then(|s| s.body_named("box"))
            .and_then(|h| demo.scene().and_then(|s| s.world().rigid_body(h)))
            .map(|b| b.translation().y)
            .unwrap();
        assert!(fallen_y > 0.5, "box should have fallen, got y = {fallen_y}");

        demo.start();
        let y_after = demo
            .scene()
            .and_then(|s| s.body_named("box"))
            .and_then(|h| demo.scene().and_then(|s| s.world().rigid_body(h)))
            .map(|b| b.translation().y)
            .unwrap();
        assert_eq!(y_after, fallen_y, "second start must not rebuild the scene");
    }

    #[test]
    fn test_emit_and_finish_frame_cycle_debug_buffer() {
        let mut demo = Demo::new();
        demo.start();

        demo.emit_debug();
        assert!(!demo.debug_lines().is_empty());

        demo.finish_frame();
        assert!(demo.debug_lines().is_empty());
    }
}
