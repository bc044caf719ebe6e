//! Synth capability and its owned session.
//!
//! The core only ever writes parameter targets through [`Synth`]; it never
//! reads values back and never sees device specifics.

/// Parameter-setting capability of the small synth graph.
pub trait Synth {
    fn set_oscillator_frequency(&mut self, hz: f32, ramp_sec: f32);
    fn set_modulation_rate(&mut self, hz: f32);
    fn set_modulation_depth(&mut self, value: f32);
    fn set_filter_cutoff(&mut self, hz: f32);
    fn set_gain(&mut self, value: f32, ramp_sec: f32);
    fn start(&mut self);
    fn stop(&mut self);
    fn close(&mut self);

    /// Whether the graph has a filter stage worth driving.
    fn has_filter(&self) -> bool {
        true
    }
}

enum SessionState<S> {
    Idle,
    Running(S),
    Closed,
}

/// Scoped owner of the synth.
///
/// Created idle. The first [`SynthSession::ensure_started`] builds and starts
/// the synth; [`SynthSession::teardown`] stops and closes it once and the
/// session stays closed afterwards.
pub struct SynthSession<S> {
    state: SessionState<S>,
}

impl<S> Default for SynthSession<S> {
    fn default() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }
}

impl<S: Synth> SynthSession<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and start the synth if the session is still idle.
    ///
    /// Returns true only on the call that actually started it. A factory
    /// error is logged and leaves the session idle.
    pub fn ensure_started<E, F>(&mut self, factory: F) -> bool
    where
        F: FnOnce() -> Result<S, E>,
        E: std::fmt::Debug,
    {
        if !matches!(self.state, SessionState::Idle) {
            return false;
        }
        match factory() {
            Ok(mut synth) => {
                synth.start();
                self.state = SessionState::Running(synth);
                log::info!("[synth] session started");
                true
            }
            Err(e) => {
                log::error!("[synth] init error: {:?}", e);
                false
            }
        }
    }

    /// Run `f` against the live synth; no-op unless running.
    pub fn with<R>(&mut self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        match &mut self.state {
            SessionState::Running(s) => Some(f(s)),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SessionState::Running(_))
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, SessionState::Closed)
    }

    /// Stop and close the synth. Safe to call any number of times.
    pub fn teardown(&mut self) {
        match std::mem::replace(&mut self.state, SessionState::Closed) {
            SessionState::Running(mut s) => {
                s.stop();
                s.close();
                log::info!("[synth] session closed");
            }
            SessionState::Idle => log::debug!("[synth] teardown before start"),
            SessionState::Closed => {}
        }
    }
}
