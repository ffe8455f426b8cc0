//! Headless gravfield application.
//!
//! Wires the simulation engine to an offscreen frame source, runs the frame
//! loop on its own thread, and reports the final state.

pub mod config;
pub mod game_loop;
pub mod headless;
pub mod state;

pub use gravfield_core as core;
