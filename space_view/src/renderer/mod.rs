//! Renderer contract module
//!
//! The graphics backend is implemented outside this crate. This module
//! defines the trait the camera drives, plus the small value types it
//! exchanges with the backend (colors, lights, materials, vertex batches).

mod color;
mod light;
mod material;
mod renderer;
mod vertex;
pub(crate) mod mock_renderer;

pub use color::Color;
pub use light::{Light, LightType};
pub use material::{BlendMode, Material, MaterialDesc, PrimitiveType, RenderStateDesc};
pub use renderer::Renderer;
pub use vertex::{PointVertex, VertexArray, VertexAttribs};
