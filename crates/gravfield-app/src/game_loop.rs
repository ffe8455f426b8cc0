//! Frame loop thread. Drives the simulation engine once per presented frame.
//!
//! The engine is created inside this thread and never leaves it.
//! Commands arrive via `mpsc` channel; the final report comes back through the
//! thread's join handle.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use gravfield_core::error::SimError;
use gravfield_core::mesh::MeshArena;
use gravfield_core::render::{DrawSink, FrameSource};
use gravfield_sim::engine::{FrameOutcome, SimConfig, SimulationEngine};

use crate::headless::{DrawRecorder, HeadlessSurface};
use crate::state::{GameLoopCommand, LoopReport, StopReason};

#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Sleep between frames so one frame takes `frame_dt` of wall-clock time.
    pub realtime: bool,
    /// Log conservation diagnostics every this many rendered frames (0 = never).
    pub log_every: u64,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            realtime: false,
            log_every: 60,
        }
    }
}

/// Headless surface settings for [`spawn_game_loop`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceOptions {
    pub frame_limit: Option<u64>,
    pub drop_every: Option<u64>,
}

/// Spawns the frame loop on a headless surface in a new thread.
///
/// Returns the command sender and the handle yielding the final report.
pub fn spawn_game_loop(
    config: SimConfig,
    surface: SurfaceOptions,
    options: LoopOptions,
) -> std::io::Result<(
    mpsc::Sender<GameLoopCommand>,
    JoinHandle<Result<LoopReport, SimError>>,
)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("gravfield-frame-loop".into())
        .spawn(move || {
            let mut meshes = MeshArena::new();
            let mut engine = SimulationEngine::new(config, &mut meshes)?;
            let mut frames =
                HeadlessSurface::new(surface.frame_limit).with_drop_every(surface.drop_every);
            let mut sink = DrawRecorder::new();
            run_game_loop(&mut engine, &mut frames, &mut sink, &cmd_rx, options)
        })?;

    Ok((cmd_tx, handle))
}

/// The frame loop. Runs until the surface closes, a Shutdown command arrives,
/// or the command channel disconnects.
pub fn run_game_loop<F, D>(
    engine: &mut SimulationEngine,
    frames: &mut F,
    sink: &mut D,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    options: LoopOptions,
) -> Result<LoopReport, SimError>
where
    F: FrameSource,
    D: DrawSink<F::Context>,
{
    let frame_duration = Duration::from_secs_f64(engine.config().frame_dt);
    let mut next_frame_time = Instant::now();
    let mut rendered = 0u64;
    let mut skipped = 0u64;

    let stop_reason = loop {
        // 1. Pending commands
        if shutdown_requested(cmd_rx) {
            break StopReason::Shutdown;
        }

        // 2. Platform events, then the close check
        frames.poll_events();
        if frames.should_close() {
            break StopReason::SurfaceClosed;
        }

        // 3. One frame: integrate, sample, draw, present
        match engine.run_frame(frames, sink)? {
            FrameOutcome::Rendered => {
                rendered += 1;
                if options.log_every > 0 && rendered % options.log_every == 0 {
                    log_diagnostics(engine, skipped);
                }
            }
            FrameOutcome::Skipped => {
                skipped += 1;
                debug!(skipped, "frame skipped");
                // Realtime mode sleeps below; otherwise give the core back.
                if !options.realtime {
                    std::thread::yield_now();
                }
            }
        }

        // 4. Sleep until the next frame
        if options.realtime {
            next_frame_time += frame_duration;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > frame_duration * 2 {
                // Too far behind, reset to avoid catch-up spiral
                next_frame_time = now;
            }
        }
    };

    info!(rendered, skipped, ?stop_reason, "frame loop stopped");
    Ok(LoopReport {
        frames_rendered: rendered,
        frames_skipped: skipped,
        stop_reason,
        snapshot: engine.snapshot(),
    })
}

/// Shutdown is the only command, so the first one pending ends the loop.
fn shutdown_requested(cmd_rx: &mpsc::Receiver<GameLoopCommand>) -> bool {
    match cmd_rx.try_recv() {
        Ok(GameLoopCommand::Shutdown) => true,
        Err(mpsc::TryRecvError::Empty) => false,
        Err(mpsc::TryRecvError::Disconnected) => true,
    }
}

fn log_diagnostics(engine: &SimulationEngine, skipped: u64) {
    let snapshot = engine.snapshot();
    let c = &snapshot.conservation;
    info!(
        frame = snapshot.time.frame,
        sim_secs = snapshot.time.elapsed_secs,
        skipped,
        momentum = %c.momentum,
        energy = c.total_energy(),
        max_glyph = snapshot.field.max_glyph_length,
        "diagnostics"
    );
}
