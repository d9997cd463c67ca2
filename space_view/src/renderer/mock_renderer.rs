/// Mock Renderer for unit tests (no GPU required)
///
/// Records every call as a `MockCall` so tests can assert on the exact
/// sequence the camera issues during a frame.

#[cfg(test)]
use std::sync::Arc;
#[cfg(test)]
use glam::Mat4;

#[cfg(test)]
use crate::renderer::{
    Renderer, Light, Material, MaterialDesc, RenderStateDesc, VertexArray, PointVertex,
};
#[cfg(test)]
use crate::error::Result;
#[cfg(test)]
use crate::view_bail;

// ============================================================================
// Mock Material
// ============================================================================

#[cfg(test)]
#[derive(Debug)]
pub struct MockMaterial {
    pub desc: MaterialDesc,
    pub state: RenderStateDesc,
}

#[cfg(test)]
impl Material for MockMaterial {
    fn shader(&self) -> &str {
        &self.desc.shader
    }

    fn render_state(&self) -> RenderStateDesc {
        self.state
    }
}

// ============================================================================
// Mock Renderer
// ============================================================================

/// One recorded renderer call
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    ClearScreen,
    SetProjection(Mat4),
    SetTransform(Mat4),
    SetLights(Vec<Light>),
    CreateMaterial(String),
    DrawBuffer {
        shader: String,
        vertices: Vec<PointVertex>,
        transform: Mat4,
    },
}

#[cfg(test)]
pub struct MockRenderer {
    pub calls: Vec<MockCall>,
    pub projection: Mat4,
    pub transform: Mat4,
    pub lights: Vec<Light>,
    pub fail_material_creation: bool,
    pub fail_draw: bool,
}

#[cfg(test)]
impl MockRenderer {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            projection: Mat4::IDENTITY,
            transform: Mat4::IDENTITY,
            lights: Vec::new(),
            fail_material_creation: false,
            fail_draw: false,
        }
    }

    pub fn draw_buffer_calls(&self) -> Vec<&MockCall> {
        self.calls.iter()
            .filter(|c| matches!(c, MockCall::DrawBuffer { .. }))
            .collect()
    }

    pub fn set_lights_calls(&self) -> Vec<&[Light]> {
        self.calls.iter()
            .filter_map(|c| match c {
                MockCall::SetLights(lights) => Some(lights.as_slice()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl Renderer for MockRenderer {
    fn clear_screen(&mut self) {
        self.calls.push(MockCall::ClearScreen);
    }

    fn set_projection(&mut self, projection: Mat4) {
        self.projection = projection;
        self.calls.push(MockCall::SetProjection(projection));
    }

    fn projection(&self) -> Mat4 {
        self.projection
    }

    fn set_transform(&mut self, transform: Mat4) {
        self.transform = transform;
        self.calls.push(MockCall::SetTransform(transform));
    }

    fn transform(&self) -> Mat4 {
        self.transform
    }

    fn set_lights(&mut self, lights: &[Light]) {
        self.lights = lights.to_vec();
        self.calls.push(MockCall::SetLights(lights.to_vec()));
    }

    fn create_material(
        &mut self,
        desc: MaterialDesc,
        state: RenderStateDesc,
    ) -> Result<Arc<dyn Material>> {
        if self.fail_material_creation {
            view_bail!("spaceview::MockRenderer", "Material creation disabled for '{}'", desc.shader);
        }
        self.calls.push(MockCall::CreateMaterial(desc.shader.clone()));
        Ok(Arc::new(MockMaterial { desc, state }))
    }

    fn draw_buffer(&mut self, vertices: &VertexArray, material: &dyn Material) -> Result<()> {
        if self.fail_draw {
            view_bail!("spaceview::MockRenderer", "Draw submission disabled");
        }
        self.calls.push(MockCall::DrawBuffer {
            shader: material.shader().to_string(),
            vertices: vertices.vertices().to_vec(),
            transform: self.transform,
        });
        Ok(())
    }
}
