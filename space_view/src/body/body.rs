/// Body trait - a simulated object the camera can see.
///
/// Bodies live in a `Space` and are addressed by `BodyId`. Each kind of
/// body (star, planet, ship, ...) implements `Body` and renders itself.

use bitflags::bitflags;
use glam::{DMat4, DVec3};
use slotmap::new_key_type;

use crate::camera::RenderView;
use crate::frame::FrameId;
use crate::renderer::Renderer;
use super::system_body::SystemBody;

new_key_type! {
    /// Stable handle of a body inside a Space
    pub struct BodyId;
}

bitflags! {
    /// Per-body draw flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BodyFlags: u32 {
        /// Never considered by the camera
        const DRAW_EXCLUDE = 1 << 0;
        /// Drawn after every normally sorted body
        const DRAW_LAST    = 1 << 1;
    }
}

/// Body kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyType {
    Star,
    Planet,
    SpaceStation,
    Ship,
    Missile,
    CargoBody,
}

impl BodyType {
    /// Terrain bodies stay visible as billboards when too small to render.
    pub fn is_terrain(&self) -> bool {
        matches!(self, BodyType::Star | BodyType::Planet)
    }
}

/// Atmosphere sample at some distance from a planet's center
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AtmosphericState {
    /// Pressure in atmospheres
    pub pressure: f64,
    /// Density in kg/m³
    pub density: f64,
}

/// A simulated body
pub trait Body: Send + Sync {
    /// Debug name
    fn label(&self) -> &str;

    fn body_type(&self) -> BodyType;

    /// Frame the body's position is expressed in
    fn frame(&self) -> FrameId;

    fn flags(&self) -> BodyFlags {
        BodyFlags::empty()
    }

    /// Position in the body's own frame at the current tick
    fn position(&self) -> DVec3;

    /// Position in the body's own frame, interpolated for rendering
    fn interp_position(&self) -> DVec3 {
        self.position()
    }

    /// Radius of the bounding sphere used for culling
    fn clip_radius(&self) -> f64;

    /// Physical radius
    fn phys_radius(&self) -> f64;

    /// Catalogue data for stars, planets and starports
    fn system_body(&self) -> Option<&SystemBody> {
        None
    }

    /// Atmosphere at `dist` meters from the body's center. `None` for
    /// bodies without an atmosphere model.
    fn atmospheric_state(&self, _dist: f64) -> Option<AtmosphericState> {
        None
    }

    /// Render the body.
    ///
    /// # Arguments
    ///
    /// * `renderer` - Backend, with projection and lights already set
    /// * `view` - Camera and space of the current draw (lights, eclipses)
    /// * `view_coords` - Body position in camera space
    /// * `view_transform` - Body frame to camera frame transform
    fn render(
        &self,
        renderer: &mut dyn Renderer,
        view: &RenderView<'_>,
        view_coords: DVec3,
        view_transform: &DMat4,
    );
}

#[cfg(test)]
#[path = "body_tests.rs"]
mod tests;
