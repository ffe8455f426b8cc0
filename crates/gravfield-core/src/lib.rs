//! Core types and definitions for the gravfield simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entities, meshes, render capabilities, snapshots, errors, and constants.
//! It has no dependency on a windowing or graphics framework.

pub mod constants;
pub mod error;
pub mod mesh;
pub mod object;
pub mod render;
pub mod state;
pub mod types;

pub use error::SimError;
pub use object::{GameObject, GameObjectId, ObjectStore};

#[cfg(test)]
mod tests;
