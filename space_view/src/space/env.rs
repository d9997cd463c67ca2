/// Collaborators the camera draws through, besides the renderer.

use glam::DMat4;

use crate::frame::{FrameGraph, FrameId};
use crate::renderer::Renderer;
use super::space::Space;

/// Starfield / skybox drawn behind every body
pub trait Background: Send {
    /// Brightness multiplier in 0.0..=1.0, used to fade stars in daylight
    fn set_intensity(&mut self, intensity: f32);

    /// Draw the backdrop.
    ///
    /// `transform` is rotation only: root frame to camera frame.
    fn draw(&mut self, renderer: &mut dyn Renderer, transform: &DMat4);
}

/// Particle and effect rendering, drawn after all bodies
pub trait EffectRenderer: Send {
    fn render_all(
        &mut self,
        renderer: &mut dyn Renderer,
        frames: &FrameGraph,
        root_frame: FrameId,
        camera_frame: FrameId,
    );
}

/// Everything a draw call reads or drives besides the renderer
pub struct FrameEnv<'a> {
    pub space: &'a Space,
    pub background: &'a mut dyn Background,
    pub effects: &'a mut dyn EffectRenderer,
}

impl<'a> FrameEnv<'a> {
    pub fn new(
        space: &'a Space,
        background: &'a mut dyn Background,
        effects: &'a mut dyn EffectRenderer,
    ) -> Self {
        Self { space, background, effects }
    }
}

/// Background that draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBackground;

impl Background for NullBackground {
    fn set_intensity(&mut self, _intensity: f32) {}

    fn draw(&mut self, _renderer: &mut dyn Renderer, _transform: &DMat4) {}
}

/// Effect renderer that draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEffects;

impl EffectRenderer for NullEffects {
    fn render_all(&mut self, _: &mut dyn Renderer, _: &FrameGraph, _: FrameId, _: FrameId) {}
}
