/// Per-frame draw record of a visible body.

use std::cmp::Ordering;
use glam::{DMat4, DVec3, Vec3};

use crate::body::{BodyFlags, BodyId};
use crate::renderer::Color;

/// Point-sprite stand-in for a body too small to render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Billboard {
    /// Camera-space position, moved along the view ray into the clip range
    pub position: Vec3,
    /// Sprite size in pixels (at least 1)
    pub size: f32,
    pub color: Color,
}

/// One visible body, rebuilt every `Camera::update`
#[derive(Debug, Clone)]
pub struct BodyAttrs {
    pub(crate) body: BodyId,
    pub(crate) view_transform: DMat4,
    pub(crate) view_coords: DVec3,
    pub(crate) cam_dist: f64,
    pub(crate) flags: BodyFlags,
    pub(crate) billboard: Option<Billboard>,
}

impl BodyAttrs {
    pub fn body(&self) -> BodyId {
        self.body
    }

    /// Body frame to camera frame transform
    pub fn view_transform(&self) -> &DMat4 {
        &self.view_transform
    }

    /// Body position in camera space
    pub fn view_coords(&self) -> DVec3 {
        self.view_coords
    }

    pub fn cam_dist(&self) -> f64 {
        self.cam_dist
    }

    pub fn flags(&self) -> BodyFlags {
        self.flags
    }

    pub fn is_billboard(&self) -> bool {
        self.billboard.is_some()
    }

    pub fn billboard(&self) -> Option<&Billboard> {
        self.billboard.as_ref()
    }

    /// Draw order: far to near, with DRAW_LAST bodies after all others.
    pub fn draw_order(&self, other: &BodyAttrs) -> Ordering {
        let a_last = self.flags.contains(BodyFlags::DRAW_LAST);
        let b_last = other.flags.contains(BodyFlags::DRAW_LAST);
        match (a_last, b_last) {
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            _ => other.cam_dist.total_cmp(&self.cam_dist),
        }
    }
}

/// Stable sort into draw order.
pub fn sort_for_draw(bodies: &mut [BodyAttrs]) {
    bodies.sort_by(BodyAttrs::draw_order);
}

#[cfg(test)]
#[path = "body_attrs_tests.rs"]
mod tests;
