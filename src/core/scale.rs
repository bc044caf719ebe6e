use super::constants::A_MINOR_PENTATONIC;

/// Ordered set of allowed output pitches in Hz.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    notes: &'static [f32],
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(A_MINOR_PENTATONIC)
    }
}

impl Scale {
    pub const fn new(notes: &'static [f32]) -> Self {
        Self { notes }
    }

    pub fn notes(&self) -> &'static [f32] {
        self.notes
    }

    /// Nearest member of the scale to `hz`. On an exact tie the earlier
    /// (lower) note wins. An empty scale passes `hz` through.
    pub fn snap(&self, hz: f32) -> f32 {
        let mut best = hz;
        let mut best_diff = f32::MAX;
        for &note in self.notes {
            let diff = (hz - note).abs();
            if diff < best_diff {
                best_diff = diff;
                best = note;
            }
        }
        best
    }
}
