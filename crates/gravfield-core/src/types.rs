//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Placement of an entity in the 2D plane.
/// Scale may be non-uniform so field glyphs can stretch along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    pub translation: DVec2,
    pub scale: DVec2,
    /// Radians, counter-clockwise from +x.
    pub rotation: f64,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translation: DVec2::ZERO,
            scale: DVec2::ONE,
            rotation: 0.0,
        }
    }
}

/// Mass and velocity of an entity. Mass is always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RigidBody2D {
    mass: f64,
    pub velocity: DVec2,
}

impl RigidBody2D {
    pub fn new(mass: f64, velocity: DVec2) -> Result<Self, SimError> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(SimError::InvalidMass(mass));
        }
        Ok(Self { mass, velocity })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Linear momentum `m * v`.
    pub fn momentum(&self) -> DVec2 {
        self.mass * self.velocity
    }
}

impl Default for RigidBody2D {
    /// Unit mass at rest. Probes keep this and act as unit test masses.
    fn default() -> Self {
        Self {
            mass: 1.0,
            velocity: DVec2::ZERO,
        }
    }
}

/// Linear RGB color, each channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const RED: Color = Color { r: 1.0, g: 0.0, b: 0.0 };
    pub const BLUE: Color = Color { r: 0.0, g: 0.0, b: 1.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Result<Self, SimError> {
        let in_range = |c: f32| (0.0..=1.0).contains(&c);
        if !(in_range(r) && in_range(g) && in_range(b)) {
            return Err(SimError::InvalidColor(r, g, b));
        }
        Ok(Self { r, g, b })
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Simulation time tracking. Only rendered frames advance it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of frames the simulation has advanced.
    pub frame: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.frame += 1;
        self.elapsed_secs += dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rigid_body_rejects_bad_mass() {
        assert_eq!(
            RigidBody2D::new(0.0, DVec2::ZERO),
            Err(SimError::InvalidMass(0.0))
        );
        assert!(RigidBody2D::new(-2.0, DVec2::ZERO).is_err());
        assert!(RigidBody2D::new(f64::NAN, DVec2::ZERO).is_err());
        assert!(RigidBody2D::new(f64::INFINITY, DVec2::ZERO).is_err());
        assert!(RigidBody2D::new(1e-6, DVec2::ZERO).is_ok());
    }

    #[test]
    fn color_rejects_out_of_range() {
        assert!(Color::new(1.0, 0.5, 0.0).is_ok());
        assert!(Color::new(1.1, 0.0, 0.0).is_err());
        assert!(Color::new(0.0, -0.1, 0.0).is_err());
        assert!(Color::new(0.0, 0.0, f32::NAN).is_err());
    }

    #[test]
    fn sim_time_advances() {
        let mut time = SimTime::default();
        time.advance(0.5);
        time.advance(0.25);
        assert_eq!(time.frame, 2);
        assert!((time.elapsed_secs - 0.75).abs() < 1e-12);
    }
}
