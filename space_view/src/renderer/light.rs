/// Light descriptors handed to the renderer.

use glam::Vec3;
use super::color::Color;

/// Light kind. Only directional lights are produced by the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightType {
    Directional,
    Point,
}

/// A renderer light.
///
/// For directional lights `position` is the direction towards the light
/// in camera space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    light_type: LightType,
    position: Vec3,
    diffuse: Color,
    specular: Color,
}

impl Light {
    pub fn new(light_type: LightType, position: Vec3, diffuse: Color, specular: Color) -> Self {
        Self { light_type, position, diffuse, specular }
    }

    /// Directional light with identical diffuse and specular color.
    pub fn directional(direction: Vec3, color: Color) -> Self {
        Self::new(LightType::Directional, direction, color, color)
    }

    pub fn light_type(&self) -> LightType {
        self.light_type
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn diffuse(&self) -> Color {
        self.diffuse
    }

    pub fn specular(&self) -> Color {
        self.specular
    }
}
