//! 1D edge primitives over binary frames.
//!
//! Coordinates follow the pixel-index convention: sample `line[i]` is located
//! at position `x = i` (or `y = i` for column scans).
//!
//! An edge is only reported once it has been *confirmed*: the first matching
//! pixel after a non-match is latched as a candidate, and the candidate is
//! returned after [`NOISE_MAX`] consecutive matching pixels. A run of
//! [`NOISE_MAX`] non-matching pixels discards the candidate. Matching runs
//! shorter than the window are treated as noise.
//!
//! Scans are anchored at one image border and walk toward the other, see
//! [`ScanDirection`]. A line band is located by two scans: one for the
//! entering edge and one, started from that edge, for the exiting edge.

pub mod column;
pub mod gate;
pub mod midpoint;
pub mod scan1d;

pub use column::vertical_edge;
pub use gate::{NOISE_MAX, NoiseGate};
pub use midpoint::{midpoint, midpoint_from_anchor};
pub use scan1d::{EdgeKind, ScanDirection, find_edge, find_edge_in_row};
