/// A scene light and the star it comes from.

use crate::body::BodyId;
use crate::renderer::Light;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSource {
    body: Option<BodyId>,
    light: Light,
}

impl LightSource {
    pub fn new(body: Option<BodyId>, light: Light) -> Self {
        Self { body, light }
    }

    /// Star emitting this light. `None` for the synthesized fallback light.
    pub fn body(&self) -> Option<BodyId> {
        self.body
    }

    pub fn light(&self) -> &Light {
        &self.light
    }
}
