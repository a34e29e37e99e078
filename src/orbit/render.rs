//! Platform-agnostic render commands for the orbit scene.
//!
//! The same scene description drives the ratatui canvas, the web
//! dashboard, and the browser canvas: front ends translate commands into
//! their own drawing primitives and never recompute geometry themselves.

use serde::{Deserialize, Serialize};

use crate::orbit::classify::OrbitBand;
use crate::orbit::scale::DisplayGeometry;

/// RGBA color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create new color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Scale brightness by `alpha` in `[0, 1]`, used for trail fade.
    #[must_use]
    pub fn faded(self, alpha: f64) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        Self::rgb(
            (f64::from(self.r) * alpha) as u8,
            (f64::from(self.g) * alpha) as u8,
            (f64::from(self.b) * alpha) as u8,
        )
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    // Scene colors
    pub const EARTH: Self = Self::rgb(100, 149, 237);
    pub const CONTINENT: Self = Self::rgb(34, 139, 34);
    pub const SATELLITE: Self = Self::rgb(255, 215, 0);
    pub const SATELLITE_RING: Self = Self::rgb(220, 20, 60);
    pub const TRAIL: Self = Self::rgb(255, 200, 0);
}

impl OrbitBand {
    /// Badge color used by every front end for this band.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::VeryLow => Color::rgb(255, 71, 87),
            Self::Leo => Color::rgb(46, 213, 115),
            Self::Meo => Color::rgb(255, 165, 2),
            Self::Geo => Color::rgb(55, 66, 250),
            Self::Heo => Color::rgb(140, 122, 230),
        }
    }
}

/// Platform-agnostic render command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Clear the screen.
    Clear { color: Color },

    /// Draw a circle.
    DrawCircle {
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
        filled: bool,
    },

    /// Draw a line.
    DrawLine {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
    },

    /// Draw the trail of past satellite positions, oldest first.
    DrawTrail {
        points: Vec<(f64, f64)>,
        color: Color,
    },

    /// Draw text label.
    DrawText {
        x: f64,
        y: f64,
        text: String,
        color: Color,
    },
}

/// Ring buffer of past screen positions for the satellite trail.
#[derive(Debug, Clone, Default)]
pub struct OrbitTrail {
    points: Vec<(f64, f64)>,
    capacity: usize,
}

impl OrbitTrail {
    /// Create a trail holding at most `capacity` points.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a point, dropping the oldest when full.
    pub fn push(&mut self, x: f64, y: f64) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() >= self.capacity {
            self.points.remove(0);
        }
        self.points.push((x, y));
    }

    /// Grow or shrink the buffer when the orbit geometry changes.
    pub fn resize(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.points.len() > capacity {
            self.points.remove(0);
        }
    }

    /// Stored points, oldest first.
    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Clear the trail.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

/// Satellite screen position on the orbit circle at `angle` radians.
#[must_use]
pub fn satellite_position(
    center: (f64, f64),
    geometry: &DisplayGeometry,
    angle: f64,
) -> (f64, f64) {
    (
        center.0 + geometry.orbit_px * angle.cos(),
        center.1 + geometry.orbit_px * angle.sin(),
    )
}

/// Generate render commands for the orbit scene.
///
/// `center` is the planet's screen position; `angle` the satellite's
/// position on its circle; `band` picks the orbit-path badge color.
#[must_use]
pub fn render_scene(
    center: (f64, f64),
    geometry: &DisplayGeometry,
    angle: f64,
    band: OrbitBand,
    trail: &OrbitTrail,
) -> Vec<RenderCommand> {
    let mut commands = Vec::new();

    commands.push(RenderCommand::Clear { color: Color::BLACK });

    // Planet and rim
    commands.push(RenderCommand::DrawCircle {
        x: center.0,
        y: center.1,
        radius: geometry.earth_px,
        color: Color::EARTH,
        filled: true,
    });
    commands.push(RenderCommand::DrawCircle {
        x: center.0,
        y: center.1,
        radius: geometry.earth_px,
        color: Color::WHITE,
        filled: false,
    });

    // Orbit path
    commands.push(RenderCommand::DrawCircle {
        x: center.0,
        y: center.1,
        radius: geometry.orbit_px,
        color: band.color(),
        filled: false,
    });

    // Trail
    if trail.points().len() > 1 {
        commands.push(RenderCommand::DrawTrail {
            points: trail.points().to_vec(),
            color: Color::TRAIL,
        });
    }

    // Satellite with velocity tick tangent to the circle
    let (sat_x, sat_y) = satellite_position(center, geometry, angle);
    let marker = geometry.satellite_marker_px();
    commands.push(RenderCommand::DrawCircle {
        x: sat_x,
        y: sat_y,
        radius: marker + 2.0,
        color: Color::SATELLITE_RING,
        filled: true,
    });
    commands.push(RenderCommand::DrawCircle {
        x: sat_x,
        y: sat_y,
        radius: marker,
        color: Color::SATELLITE,
        filled: true,
    });

    let tick_len = (geometry.orbit_px / 4.0).min(40.0);
    let tangent = angle + std::f64::consts::FRAC_PI_2;
    commands.push(RenderCommand::DrawLine {
        x1: sat_x,
        y1: sat_y,
        x2: sat_x + tick_len * tangent.cos(),
        y2: sat_y + tick_len * tangent.sin(),
        color: Color::WHITE,
    });

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::scale::ScaleConfig;

    fn geometry() -> DisplayGeometry {
        DisplayGeometry::compute(400.0, &ScaleConfig::default())
    }

    #[test]
    fn test_color_rgb() {
        let c = Color::rgb(255, 128, 0);
        assert_eq!(c.r, 255);
        assert_eq!(c.g, 128);
        assert_eq!(c.a, 255);
    }

    #[test]
    fn test_color_fade() {
        let c = Color::TRAIL.faded(0.5);
        assert_eq!(c.r, 127);
        assert_eq!(c.g, 100);

        let clamped = Color::WHITE.faded(2.0);
        assert_eq!(clamped.r, 255);
    }

    #[test]
    fn test_band_colors_distinct() {
        let bands = [
            OrbitBand::VeryLow,
            OrbitBand::Leo,
            OrbitBand::Meo,
            OrbitBand::Geo,
            OrbitBand::Heo,
        ];
        for (i, a) in bands.iter().enumerate() {
            for b in &bands[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }

    #[test]
    fn test_trail_ring_buffer() {
        let mut trail = OrbitTrail::new(3);
        trail.push(1.0, 1.0);
        trail.push(2.0, 2.0);
        trail.push(3.0, 3.0);
        trail.push(4.0, 4.0);
        assert_eq!(trail.points().len(), 3);
        assert!((trail.points()[0].0 - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_trail_zero_capacity() {
        let mut trail = OrbitTrail::new(0);
        trail.push(1.0, 1.0);
        assert!(trail.points().is_empty());
    }

    #[test]
    fn test_trail_resize_drops_oldest() {
        let mut trail = OrbitTrail::new(4);
        for i in 0..4 {
            trail.push(f64::from(i), 0.0);
        }
        trail.resize(2);
        assert_eq!(trail.points().len(), 2);
        assert!((trail.points()[0].0 - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_satellite_position_on_circle() {
        let geo = geometry();
        let (x, y) = satellite_position((100.0, 100.0), &geo, 0.0);
        assert!((x - (100.0 + geo.orbit_px)).abs() < 1e-9);
        assert!((y - 100.0).abs() < 1e-9);

        let (x, y) = satellite_position((100.0, 100.0), &geo, std::f64::consts::FRAC_PI_2);
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - (100.0 + geo.orbit_px)).abs() < 1e-9);
    }

    #[test]
    fn test_render_scene_command_shape() {
        let geo = geometry();
        let mut trail = OrbitTrail::new(10);
        trail.push(1.0, 1.0);
        trail.push(2.0, 2.0);

        let commands = render_scene((0.0, 0.0), &geo, 0.3, OrbitBand::Leo, &trail);

        assert!(matches!(commands[0], RenderCommand::Clear { .. }));
        let circles = commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::DrawCircle { .. }))
            .count();
        // Planet, rim, orbit path, satellite ring, satellite body
        assert_eq!(circles, 5);
        assert!(commands
            .iter()
            .any(|c| matches!(c, RenderCommand::DrawTrail { .. })));
        assert!(commands
            .iter()
            .any(|c| matches!(c, RenderCommand::DrawLine { .. })));
    }

    #[test]
    fn test_render_scene_skips_empty_trail() {
        let commands = render_scene(
            (0.0, 0.0),
            &geometry(),
            0.0,
            OrbitBand::Geo,
            &OrbitTrail::new(10),
        );
        assert!(!commands
            .iter()
            .any(|c| matches!(c, RenderCommand::DrawTrail { .. })));
    }
}
