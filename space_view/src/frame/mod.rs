//! Reference frame module
//!
//! Hierarchy of coordinate frames bodies and the camera are placed in.

mod frame;
mod frame_graph;

pub use frame::{Frame, FrameId};
pub use frame_graph::{compose, FrameGraph, FrameReleaseQueue};
