//! Conservation monitors over the massive bodies. Read-only.
//!
//! Explicit Euler drifts in energy by construction; these numbers make the
//! drift visible in logs and snapshots rather than correcting it.

use glam::DVec2;

use gravfield_core::constants::SINGULARITY_EPSILON;
use gravfield_core::object::GameObject;
use gravfield_core::state::ConservationView;

use super::gravity::GravityPhysicsSystem;

pub fn total_momentum(bodies: &[GameObject]) -> DVec2 {
    bodies
        .iter()
        .fold(DVec2::ZERO, |acc, b| acc + b.rigid_body.momentum())
}

pub fn kinetic_energy(bodies: &[GameObject]) -> f64 {
    bodies
        .iter()
        .map(|b| 0.5 * b.rigid_body.mass() * b.rigid_body.velocity.length_squared())
        .sum()
}

/// Pairwise `-G m_i m_j / r`. Pairs inside the singularity cutoff exert no
/// force, so they contribute nothing here either.
pub fn potential_energy(gravity: &GravityPhysicsSystem, bodies: &[GameObject]) -> f64 {
    let mut energy = 0.0;
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            let d2 = a
                .transform
                .translation
                .distance_squared(b.transform.translation);
            if d2 < SINGULARITY_EPSILON {
                continue;
            }
            energy -= gravity.strength() * a.rigid_body.mass() * b.rigid_body.mass() / d2.sqrt();
        }
    }
    energy
}

pub fn center_of_mass(bodies: &[GameObject]) -> Option<DVec2> {
    if bodies.is_empty() {
        return None;
    }
    let (weighted, mass) = bodies.iter().fold((DVec2::ZERO, 0.0), |(w, m), b| {
        let bm = b.rigid_body.mass();
        (w + bm * b.transform.translation, m + bm)
    });
    Some(weighted / mass)
}

pub fn measure(gravity: &GravityPhysicsSystem, bodies: &[GameObject]) -> ConservationView {
    ConservationView {
        momentum: total_momentum(bodies),
        kinetic_energy: kinetic_energy(bodies),
        potential_energy: potential_energy(gravity, bodies),
        center_of_mass: center_of_mass(bodies),
    }
}
