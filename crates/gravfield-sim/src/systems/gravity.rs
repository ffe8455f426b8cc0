//! All-pairs Newtonian gravity with sub-stepped explicit Euler integration.

use glam::DVec2;

use gravfield_core::constants::SINGULARITY_EPSILON;
use gravfield_core::error::SimError;
use gravfield_core::object::GameObject;

/// Gravity integrator. Holds the strength constant and nothing else; the
/// bodies are passed in on every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravityPhysicsSystem {
    strength_gravity: f64,
}

impl GravityPhysicsSystem {
    pub fn new(strength_gravity: f64) -> Result<Self, SimError> {
        if !strength_gravity.is_finite() || strength_gravity < 0.0 {
            return Err(SimError::InvalidStrength(strength_gravity));
        }
        Ok(Self { strength_gravity })
    }

    pub fn strength(&self) -> f64 {
        self.strength_gravity
    }

    /// Force exerted by `from` on `to`, pointing from `to` toward `from`.
    ///
    /// Pairs closer than [`SINGULARITY_EPSILON`] (squared distance) exert no
    /// force at all.
    pub fn compute_force(&self, from: &GameObject, to: &GameObject) -> DVec2 {
        let offset = from.transform.translation - to.transform.translation;
        let distance_squared = offset.dot(offset);

        if distance_squared.abs() < SINGULARITY_EPSILON {
            return DVec2::ZERO;
        }

        let force = self.strength_gravity * to.rigid_body.mass() * from.rigid_body.mass()
            / distance_squared;
        force * offset / distance_squared.sqrt()
    }

    /// Advance `bodies` by `dt` seconds, split into `substeps` equal Euler steps.
    ///
    /// More substeps cost more CPU but keep close encounters stable.
    pub fn update(
        &self,
        bodies: &mut [GameObject],
        dt: f64,
        substeps: u32,
    ) -> Result<(), SimError> {
        if substeps == 0 {
            return Err(SimError::ZeroSubsteps);
        }
        if !dt.is_finite() {
            return Err(SimError::InvalidTimeStep(dt));
        }

        let step_dt = dt / substeps as f64;
        for _ in 0..substeps {
            self.step_simulation(bodies, step_dt);
        }
        Ok(())
    }

    /// One Euler step: every pairwise velocity kick first, then every drift.
    fn step_simulation(&self, bodies: &mut [GameObject], dt: f64) {
        // Each unordered pair (i < j) once; Newton's third law gives B's share.
        for i in 0..bodies.len() {
            let (head, tail) = bodies.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                let force = self.compute_force(a, b);
                a.rigid_body.velocity += dt * -force / a.rigid_body.mass();
                b.rigid_body.velocity += dt * force / b.rigid_body.mass();
            }
        }

        // Positions move only after all velocities for this step are final.
        for body in bodies.iter_mut() {
            body.transform.translation += dt * body.rigid_body.velocity;
        }
    }
}
