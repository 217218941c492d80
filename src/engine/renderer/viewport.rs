// Pixel-space projection for 2D rendering

use glam::Mat4;

/// Fixed orthographic viewport measured in pixels
///
/// Maps pixel coordinates with the origin at the top-left and y growing
/// downward onto clip space, matching the convention the physics scene is
/// authored in.
#[derive(Debug, Clone, Copy)]
pub struct PixelViewport {
    width: f32,
    height: f32,
}

impl PixelViewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Resize the viewport, ignoring degenerate dimensions
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.width = width;
            self.height = height;
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Projection matrix for this viewport
    ///
    /// Top edge is y = 0, bottom edge is y = height.
    pub fn view_proj(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.width, self.height, 0.0, -1.0, 1.0)
    }
}
