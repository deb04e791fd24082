//! Frame-based time model.
//!
//! # Design
//!
//! The host drives the simulation once per rendered frame and reports the
//! wall-clock seconds elapsed since the previous frame.  `Frame` counts
//! frames; `FrameClock` accumulates elapsed time so observers can label
//! output rows without a datetime library.
//!
//! Frame deltas are variable.  Nothing downstream assumes a fixed step.

use std::fmt;

// ── Frame ────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Frame(pub u64);

impl Frame {
    #[inline]
    pub fn next(self) -> Frame {
        Frame(self.0 + 1)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── FrameClock ───────────────────────────────────────────────────────────────

/// Tracks the current frame and total elapsed seconds.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    /// The frame about to be (or being) processed.
    pub current_frame: Frame,
    /// Seconds accumulated over all completed frames.
    pub elapsed_secs: f64,
    /// Delta reported for the most recent frame, after clamping.
    pub last_delta: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame of `delta_secs` and move to the next frame.
    ///
    /// Negative or NaN deltas are clamped to zero.  Returns the clamped delta
    /// so the caller feeds exactly the same value to the controller.
    pub fn advance(&mut self, delta_secs: f32) -> f32 {
        let dt = sanitize_delta(delta_secs);
        self.last_delta    = dt;
        self.elapsed_secs += dt as f64;
        self.current_frame = self.current_frame.next();
        dt
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3} s)", self.current_frame, self.elapsed_secs)
    }
}

/// Clamp a frame delta to a finite, non-negative value.
#[inline]
pub fn sanitize_delta(delta_secs: f32) -> f32 {
    if delta_secs.is_finite() { delta_secs.max(0.0) } else { 0.0 }
}
