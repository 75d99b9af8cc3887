#![forbid(unsafe_code)]

//! Core primitives for the cascade menu controller: canonical input
//! events and the geometry types used for anchor bounds and hit testing.

pub mod event;
pub mod geometry;
