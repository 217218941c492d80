use rapier2d::pipeline::{DebugRenderBackend, DebugRenderObject};
use rapier2d::prelude::*;

use crate::core::units::UnitScale;

/// A single debug vertex in pixel space, ready for GPU upload
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Per-frame buffer of physics wireframe segments
///
/// Receives draw calls from the physics debug pass in meters, converts each
/// endpoint to pixels through the world's unit scale, and holds them until
/// the frame is finished. Callers are expected to `clear` after renderer
/// submission so geometry never carries across frames.
pub struct DebugLines {
    scale: UnitScale,
    vertices: Vec<LineVertex>,
}

impl DebugLines {
    /// Create an empty buffer using the given meter-to-pixel scale
    pub fn new(scale: UnitScale) -> Self {
        Self {
            scale,
            vertices: Vec::new(),
        }
    }

    /// Collected vertices, two per line segment
    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    /// Number of line segments currently buffered
    pub fn line_count(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Drop all buffered segments
    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

impl DebugRenderBackend for DebugLines {
    fn draw_line(
        &mut self,
        _object: DebugRenderObject,
        a: Point<Real>,
        b: Point<Real>,
        color: [f32; 4],
    ) {
        // rapier hands out colors in HSLA
        let rgba = hsla_to_rgba(color);
        self.vertices.push(LineVertex {
            position: [self.scale.to_pixels(a.x), self.scale.to_pixels(a.y)],
            color: rgba,
        });
        self.vertices.push(LineVertex {
            position: [self.scale.to_pixels(b.x), self.scale.to_pixels(b.y)],
            color: rgba,
        });
    }
}

/// Convert an HSLA color (hue in degrees) to straight RGBA
fn hsla_to_rgba(hsla: [f32; 4]) -> [f32; 4] {
    let [h, s, l, a] = hsla;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let sector = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    [r + m, g + m, b + m, a]
}
