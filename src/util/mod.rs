//! Small shared utilities.

pub mod frame_timing;
