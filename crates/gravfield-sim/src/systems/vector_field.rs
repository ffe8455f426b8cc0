//! Field sampler: turns the net gravity at each probe into a glyph.
//!
//! Runs once per frame after the integrator. Reads massive bodies, writes
//! only probe transforms.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use gravfield_core::constants::{FIELD_BASE_SIZE, FIELD_LOG_NORMALIZER, FIELD_SIZE_RANGE};
use gravfield_core::error::SimError;
use gravfield_core::object::GameObject;

use super::gravity::GravityPhysicsSystem;

/// Presentation tuning for field glyphs. Not physical constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldStyle {
    /// Glyph length at zero field.
    pub base_size: f64,
    /// Extra length reached when the field saturates.
    pub size_range: f64,
    /// `ln(|f| + 1)` at which the glyph saturates.
    pub log_normalizer: f64,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            base_size: FIELD_BASE_SIZE,
            size_range: FIELD_SIZE_RANGE,
            log_normalizer: FIELD_LOG_NORMALIZER,
        }
    }
}

impl FieldStyle {
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.base_size.is_finite()
            && self.size_range.is_finite()
            && self.log_normalizer.is_finite())
        {
            return Err(SimError::InvalidFieldStyle(
                "all parameters must be finite".into(),
            ));
        }
        if self.size_range < 0.0 {
            return Err(SimError::InvalidFieldStyle(format!(
                "size_range must be non-negative, got {}",
                self.size_range
            )));
        }
        if self.log_normalizer <= 0.0 {
            return Err(SimError::InvalidFieldStyle(format!(
                "log_normalizer must be positive, got {}",
                self.log_normalizer
            )));
        }
        Ok(())
    }

    /// Log-compressed glyph length for a field of magnitude `magnitude`.
    /// Always within `[base_size, base_size + size_range]`.
    pub fn glyph_length(&self, magnitude: f64) -> f64 {
        let t = ((magnitude + 1.0).ln() / self.log_normalizer).clamp(0.0, 1.0);
        self.base_size + self.size_range * t
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2FieldSystem {
    style: FieldStyle,
}

impl Vec2FieldSystem {
    pub fn new(style: FieldStyle) -> Result<Self, SimError> {
        style.validate()?;
        Ok(Self { style })
    }

    pub fn style(&self) -> &FieldStyle {
        &self.style
    }

    /// Point every probe along its net force and size it by magnitude.
    ///
    /// A probe with zero net force gets rotation 0.0 (atan2 of a zero vector),
    /// which is finite.
    pub fn update(
        &self,
        gravity: &GravityPhysicsSystem,
        bodies: &[GameObject],
        probes: &mut [GameObject],
    ) {
        for probe in probes.iter_mut() {
            let direction = net_force(gravity, bodies, probe);
            probe.transform.scale.x = self.style.glyph_length(direction.length());
            probe.transform.rotation = direction.y.atan2(direction.x);
        }
    }
}

/// Sum of forces every body exerts on `probe`. Probes are never sources.
pub fn net_force(gravity: &GravityPhysicsSystem, bodies: &[GameObject], probe: &GameObject) -> DVec2 {
    bodies
        .iter()
        .fold(DVec2::ZERO, |acc, body| acc + gravity.compute_force(body, probe))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_matches_constants() {
        let style = FieldStyle::default();
        assert_eq!(style.base_size, 0.005);
        assert_eq!(style.size_range, 0.045);
        assert_eq!(style.log_normalizer, 3.0);
        assert!(style.validate().is_ok());
    }

    #[test]
    fn glyph_length_bounds() {
        let style = FieldStyle::default();
        assert_eq!(style.glyph_length(0.0), style.base_size);
        let max = style.base_size + style.size_range;
        assert!((style.glyph_length(1e12) - max).abs() < 1e-15);
        // ln(e^3 - 1 + 1) / 3 == 1: exactly saturated.
        let saturating = 3.0_f64.exp() - 1.0;
        assert!((style.glyph_length(saturating) - max).abs() < 1e-12);
        let mid = style.glyph_length(1.0);
        assert!(mid > style.base_size && mid < max);
    }

    #[test]
    fn glyph_length_monotonic() {
        let style = FieldStyle::default();
        let mut last = style.glyph_length(0.0);
        for i in 1..50 {
            let next = style.glyph_length(i as f64 * 0.5);
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn rejects_bad_style() {
        let zero_norm = FieldStyle {
            log_normalizer: 0.0,
            ..Default::default()
        };
        assert!(Vec2FieldSystem::new(zero_norm).is_err());

        let negative_range = FieldStyle {
            size_range: -0.01,
            ..Default::default()
        };
        assert!(negative_range.validate().is_err());

        let nan_base = FieldStyle {
            base_size: f64::NAN,
            ..Default::default()
        };
        assert!(nan_base.validate().is_err());
    }
}
