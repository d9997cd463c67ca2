/// Renderer trait - the graphics backend as seen by the camera

use std::sync::Arc;
use glam::Mat4;

use crate::error::Result;
use super::light::Light;
use super::material::{Material, MaterialDesc, RenderStateDesc};
use super::vertex::VertexArray;

/// Main renderer trait
///
/// Implemented by the graphics backend. The camera drives it once per
/// frame: clear, background, lights, bodies, billboard batch, effects.
/// Matrix and light state set here is global renderer state that later
/// draw calls observe.
pub trait Renderer: Send + Sync {
    /// Clear color and depth of the current render target
    fn clear_screen(&mut self);

    /// Set the projection matrix
    fn set_projection(&mut self, projection: Mat4);

    /// Current projection matrix
    fn projection(&self) -> Mat4;

    /// Set the model(-view) transform
    fn set_transform(&mut self, transform: Mat4);

    /// Current model(-view) transform
    fn transform(&self) -> Mat4;

    /// Replace the active light set
    ///
    /// # Arguments
    ///
    /// * `lights` - Up to 4 lights; extra entries may be ignored by the backend
    fn set_lights(&mut self, lights: &[Light]);

    /// Create a material
    ///
    /// # Arguments
    ///
    /// * `desc` - Shader and texture description
    /// * `state` - Fixed-function render state
    fn create_material(
        &mut self,
        desc: MaterialDesc,
        state: RenderStateDesc,
    ) -> Result<Arc<dyn Material>>;

    /// Submit a vertex batch in a single draw call
    fn draw_buffer(&mut self, vertices: &VertexArray, material: &dyn Material) -> Result<()>;
}
