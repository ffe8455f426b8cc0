//! Systems that operate on the simulation state each frame.
//!
//! Systems hold configuration only. All entity state lives in the
//! collections passed to them.

pub mod diagnostics;
pub mod gravity;
pub mod snapshot;
pub mod vector_field;
