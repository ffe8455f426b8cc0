//! Capability contracts of the presentation layer.
//!
//! The simulation never talks to a window or a graphics device directly. It
//! asks a [`FrameSource`] for a frame, hands [`DrawItem`]s to a [`DrawSink`],
//! and creates meshes once at scene setup through a [`MeshFactory`].

use glam::Vec2;

use crate::mesh::MeshHandle;
use crate::types::{Color, Transform2D};

/// One entity as the draw sink sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub transform: Transform2D,
    pub color: Color,
    pub mesh: MeshHandle,
}

/// Window/swapchain side of the frame loop.
pub trait FrameSource {
    /// Opaque per-frame handle (command buffer, encoder, ...).
    type Context;

    /// Pump platform events. Called once per loop iteration.
    fn poll_events(&mut self) {}

    /// Close requested by the platform.
    fn should_close(&self) -> bool;

    /// `None` when no frame can be acquired right now (e.g. the swapchain is
    /// being recreated). The caller skips the whole iteration.
    fn begin_frame(&mut self) -> Option<Self::Context>;

    /// Present the frame opened by `begin_frame`.
    fn end_frame(&mut self, ctx: Self::Context);
}

/// Records draw commands into a frame context.
pub trait DrawSink<C> {
    fn submit(&mut self, ctx: &mut C, items: &[DrawItem]);
}

/// Uploads a triangle list and returns a shareable handle to it.
pub trait MeshFactory {
    fn create(&mut self, vertices: &[Vec2]) -> MeshHandle;
}
