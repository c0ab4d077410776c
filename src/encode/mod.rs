//! Output encoding for rendered frames.

pub mod png;
