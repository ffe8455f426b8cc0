//! Offscreen presentation: a frame source and draw sink with no window.
//!
//! `HeadlessSurface` hands out frames until its limit and can be told to
//! withhold every n-th frame, the way a minimized window would. Draw calls are
//! tallied per frame instead of rasterized.

use tracing::trace;

use gravfield_core::render::{DrawItem, DrawSink, FrameSource};

/// Per-frame context handed from `begin_frame` to `end_frame`.
#[derive(Debug, Default)]
pub struct HeadlessFrame {
    pub index: u64,
    /// Item count of each submitted batch, in submission order.
    pub batches: Vec<usize>,
}

/// A presented frame, as recorded by the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedFrame {
    pub index: u64,
    pub batches: Vec<usize>,
}

#[derive(Debug)]
pub struct HeadlessSurface {
    /// Close after this many presented frames. `None` runs until told to stop.
    frame_limit: Option<u64>,
    /// Withhold every n-th request, n >= 2. Otherwise never withholds.
    drop_every: Option<u64>,
    requests: u64,
    presented: Vec<PresentedFrame>,
    /// Keep only the most recent presented frame.
    keep_last_only: bool,
    presented_total: u64,
}

impl HeadlessSurface {
    pub fn new(frame_limit: Option<u64>) -> Self {
        Self {
            frame_limit,
            drop_every: None,
            requests: 0,
            presented: Vec::new(),
            keep_last_only: true,
            presented_total: 0,
        }
    }

    /// Withhold every n-th frame request. `n` below 2 is ignored: withholding
    /// every request would mean no frame is ever presented and the frame limit
    /// could never be reached.
    pub fn with_drop_every(mut self, n: Option<u64>) -> Self {
        self.drop_every = n.filter(|&n| n >= 2);
        self
    }

    /// Keep every presented frame instead of only the latest.
    pub fn recording_all(mut self) -> Self {
        self.keep_last_only = false;
        self
    }

    pub fn presented(&self) -> &[PresentedFrame] {
        &self.presented
    }

    pub fn presented_total(&self) -> u64 {
        self.presented_total
    }
}

impl FrameSource for HeadlessSurface {
    type Context = HeadlessFrame;

    fn should_close(&self) -> bool {
        self.frame_limit
            .is_some_and(|limit| self.presented_total >= limit)
    }

    fn begin_frame(&mut self) -> Option<HeadlessFrame> {
        self.requests += 1;
        if let Some(n) = self.drop_every {
            if self.requests % n == 0 {
                trace!(request = self.requests, "withholding frame");
                return None;
            }
        }
        Some(HeadlessFrame {
            index: self.presented_total,
            batches: Vec::new(),
        })
    }

    fn end_frame(&mut self, ctx: HeadlessFrame) {
        self.presented_total += 1;
        if self.keep_last_only {
            self.presented.clear();
        }
        self.presented.push(PresentedFrame {
            index: ctx.index,
            batches: ctx.batches,
        });
    }
}

/// Records batch sizes into the frame context.
#[derive(Debug, Default)]
pub struct DrawRecorder {
    items_total: u64,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items_total(&self) -> u64 {
        self.items_total
    }
}

impl DrawSink<HeadlessFrame> for DrawRecorder {
    fn submit(&mut self, ctx: &mut HeadlessFrame, items: &[DrawItem]) {
        ctx.batches.push(items.len());
        self.items_total += items.len() as u64;
    }
}
