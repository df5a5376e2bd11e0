//! Foundational primitives for the line-follow decision workspace.
//!
//! ## Binary Frames
//! The decision core consumes single-channel 8-bit frames produced by an
//! upstream filtering stage. A pixel is *line* when it is non-zero and
//! *background* when it is zero; no other intensity information is used.
//!
//! ## Image Views and Stride
//! Images use element stride (not byte stride). `stride` is the distance, in
//! elements, between adjacent row starts and may be greater than `width`.
//! This allows borrowed views over padded transport buffers.
//!
//! ## Coordinates
//! `x` is the column index (left to right) and `y` the row index (top to
//! bottom). Row `height - 1` is the row closest to the vehicle.

mod error;
mod image;

pub use error::Error;
pub use image::{BinaryImage, BinaryView, Image, ImageView, is_line};
