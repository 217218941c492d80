// Display/simulation unit conversion

/// Fixed scale factor between display pixels and simulation meters.
///
/// Every position and dimension crossing the display/physics boundary goes
/// through this type, in both directions: scene configuration written in
/// pixels is converted once when descriptors are built, and debug-draw
/// output is converted once when primitives are buffered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitScale {
    pixels_per_meter: f32,
}

impl UnitScale {
    /// Create a scale from a pixels-per-meter factor (must be positive)
    pub fn new(pixels_per_meter: f32) -> Self {
        debug_assert!(pixels_per_meter > 0.0, "scale factor must be positive");
        Self { pixels_per_meter }
    }

    /// The raw pixels-per-meter factor
    pub fn pixels_per_meter(&self) -> f32 {
        self.pixels_per_meter
    }

    /// Convert a display-pixel quantity to simulation meters
    pub fn to_meters(&self, pixels: f32) -> f32 {
        pixels / self.pixels_per_meter
    }

    /// Convert a simulation-meter quantity to display pixels
    pub fn to_pixels(&self, meters: f32) -> f32 {
        meters * self.pixels_per_meter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_meters() {
        let scale = UnitScale::new(30.0);
        assert_relative_eq!(scale.to_meters(150.0), 5.0);
        assert_relative_eq!(scale.to_meters(285.0), 9.5);
        assert_relative_eq!(scale.to_meters(0.0), 0.0);
    }

    #[test]
    fn test_to_pixels() {
        let scale = UnitScale::new(30.0);
        assert_relative_eq!(scale.to_pixels(5.0), 150.0);
        assert_relative_eq!(scale.to_pixels(0.25), 7.5);
    }

    #[test]
    fn test_round_trip() {
        let scale = UnitScale::new(30.0);
        for px in [1.0_f32, 15.0, 60.0, 285.0] {
            assert_relative_eq!(scale.to_pixels(scale.to_meters(px)), px);
        }
    }
}
