/// RenderView - what a body sees of the draw in progress.
///
/// Created by `Camera::draw` and handed to every `Body::render`.
/// Ephemeral: lives for one draw call.

use crate::body::BodyId;
use crate::space::Space;
use super::camera::Camera;
use super::eclipse::Shadow;
use super::light_source::LightSource;

pub struct RenderView<'a> {
    camera: &'a Camera,
    space: &'a Space,
}

impl<'a> RenderView<'a> {
    pub fn new(camera: &'a Camera, space: &'a Space) -> Self {
        Self { camera, space }
    }

    pub fn camera(&self) -> &'a Camera {
        self.camera
    }

    pub fn space(&self) -> &'a Space {
        self.space
    }

    /// Lights active for this draw
    pub fn light_sources(&self) -> &'a [LightSource] {
        self.camera.light_sources()
    }

    /// Fraction of light `light_index` reaching `body`.
    pub fn shadowed_intensity(&self, light_index: usize, body: BodyId) -> f32 {
        self.camera.shadowed_intensity(self.space, light_index, body)
    }

    /// The `n` biggest shadows on `body`, biggest first.
    pub fn principal_shadows(&self, body: BodyId, n: usize) -> Vec<Shadow> {
        self.camera.principal_shadows(self.space, body, n)
    }
}
