//! Messages and results passed between the main thread and the frame loop.

use serde::{Deserialize, Serialize};

use gravfield_core::state::FrameSnapshot;

/// Commands sent from the main thread to the frame loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Stop after the current frame.
    Shutdown,
}

/// Why the frame loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The frame source asked to close.
    SurfaceClosed,
    /// A `Shutdown` command arrived or the sender hung up.
    Shutdown,
}

/// Summary handed back when the frame loop exits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoopReport {
    pub frames_rendered: u64,
    pub frames_skipped: u64,
    pub stop_reason: StopReason,
    /// Observable state after the last rendered frame.
    pub snapshot: FrameSnapshot,
}
