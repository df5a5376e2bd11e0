//! Umbrella crate for the `line-follow` workspace.
//!
//! Re-exports the image primitives, the edge scanners and the decision core
//! so a consumer only needs one dependency.

pub use lf_core::*;
pub use lf_decision::*;
pub use lf_edge::*;
