/// What to do with the frame loop after a frame had no surface to draw on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetryDecision {
    /// Skip this frame and try again after `wait_frames` further frames.
    Reschedule { wait_frames: u32 },
    /// Stop retrying.
    GiveUp,
}

/// Skip-and-reschedule policy for frames whose drawing surface or reference
/// element is not available yet.
///
/// The default retries forever on every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_consecutive_skips: Option<u32>,
    pub backoff_frames: u32,
}

#[derive(Clone, Debug, Default)]
pub struct RetryState {
    pub policy: RetryPolicy,
    consecutive_skips: u32,
}

impl RetryState {
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            consecutive_skips: 0,
        }
    }

    pub fn on_missing_surface(&mut self) -> RetryDecision {
        self.consecutive_skips = self.consecutive_skips.saturating_add(1);
        match self.policy.max_consecutive_skips {
            Some(max) if self.consecutive_skips > max => RetryDecision::GiveUp,
            _ => RetryDecision::Reschedule {
                wait_frames: self.policy.backoff_frames,
            },
        }
    }

    /// Resets the skip counter; returns how many frames were skipped before.
    pub fn on_surface_ready(&mut self) -> u32 {
        std::mem::take(&mut self.consecutive_skips)
    }

    pub fn consecutive_skips(&self) -> u32 {
        self.consecutive_skips
    }
}
