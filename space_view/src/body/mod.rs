//! Body module
//!
//! Simulated bodies as seen by the camera, plus the star system catalogue
//! data attached to stars and planets.

mod body;
mod system_body;
pub(crate) mod mock_body;

pub use body::{AtmosphericState, Body, BodyFlags, BodyId, BodyType};
pub use system_body::{
    BlackHoleSize, BodySuperType, SpectralClass, StarKind, SystemBody, SystemBodyKind,
    WolfRayetClass,
};
