//! Space module
//!
//! The simulated scene handed to the camera each frame.

mod env;
mod space;

pub use env::{Background, EffectRenderer, FrameEnv, NullBackground, NullEffects};
pub use space::Space;
