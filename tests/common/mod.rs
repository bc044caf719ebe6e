// Shared test double: a synth that records every call it receives.
#![allow(dead_code)]

use rope_synth::core::Synth;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    OscillatorFrequency(f32, f32),
    ModulationRate(f32),
    ModulationDepth(f32),
    FilterCutoff(f32),
    Gain(f32, f32),
    Start,
    Stop,
    Close,
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

pub struct RecordingSynth {
    pub calls: CallLog,
    pub filter: bool,
}

impl RecordingSynth {
    pub fn new(calls: CallLog) -> Self {
        Self {
            calls,
            filter: true,
        }
    }
}

impl Synth for RecordingSynth {
    fn set_oscillator_frequency(&mut self, hz: f32, ramp_sec: f32) {
        self.calls
            .borrow_mut()
            .push(Call::OscillatorFrequency(hz, ramp_sec));
    }
    fn set_modulation_rate(&mut self, hz: f32) {
        self.calls.borrow_mut().push(Call::ModulationRate(hz));
    }
    fn set_modulation_depth(&mut self, value: f32) {
        self.calls.borrow_mut().push(Call::ModulationDepth(value));
    }
    fn set_filter_cutoff(&mut self, hz: f32) {
        self.calls.borrow_mut().push(Call::FilterCutoff(hz));
    }
    fn set_gain(&mut self, value: f32, ramp_sec: f32) {
        self.calls.borrow_mut().push(Call::Gain(value, ramp_sec));
    }
    fn start(&mut self) {
        self.calls.borrow_mut().push(Call::Start);
    }
    fn stop(&mut self) {
        self.calls.borrow_mut().push(Call::Stop);
    }
    fn close(&mut self) {
        self.calls.borrow_mut().push(Call::Close);
    }
    fn has_filter(&self) -> bool {
        self.filter
    }
}

pub fn count(calls: &CallLog, pred: impl Fn(&Call) -> bool) -> usize {
    calls.borrow().iter().filter(|c| pred(c)).count()
}

pub fn last_gain(calls: &CallLog) -> Option<f32> {
    calls.borrow().iter().rev().find_map(|c| match c {
        Call::Gain(v, _) => Some(*v),
        _ => None,
    })
}
