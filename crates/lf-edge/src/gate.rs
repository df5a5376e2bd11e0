/// Length of the confirmation window, in pixels.
///
/// A matching run must reach this length to be accepted as an edge, and a
/// non-matching run of this length resets a pending candidate.
pub const NOISE_MAX: usize = 10;

/// Run-length state machine shared by row and column scans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoiseGate {
    matched: usize,
    unmatched: usize,
    candidate: Option<usize>,
}

impl NoiseGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the pixel at position `idx`. Returns the confirmed candidate
    /// position once the window is reached.
    pub fn push(&mut self, idx: usize, matches: bool) -> Option<usize> {
        if matches {
            self.unmatched = 0;
            let candidate = *self.candidate.get_or_insert(idx);
            self.matched += 1;
            if self.matched == NOISE_MAX {
                return Some(candidate);
            }
        } else {
            self.unmatched += 1;
            if self.unmatched >= NOISE_MAX {
                self.matched = 0;
                self.candidate = None;
            }
        }
        None
    }

    pub fn candidate(&self) -> Option<usize> {
        self.candidate
    }
}

/// Runs a fresh gate over `(position, matches)` samples and returns the first
/// confirmed position.
pub fn first_confirmed<I>(samples: I) -> Option<usize>
where
    I: IntoIterator<Item = (usize, bool)>,
{
    let mut gate = NoiseGate::new();
    samples
        .into_iter()
        .find_map(|(idx, matches)| gate.push(idx, matches))
}
