/// CameraContext - projection parameters and camera placement.
///
/// Owns the transient camera frame: created in `begin_frame`, destroyed
/// in `end_frame`. At most one camera frame exists per context.

use glam::{DMat3, DVec3, Mat4};

use crate::frame::{FrameGraph, FrameId, FrameReleaseQueue};
use crate::renderer::Renderer;
use crate::{view_debug, view_warn};
use super::frustum::Frustum;

pub struct CameraContext {
    width: f32,
    height: f32,
    fov_deg: f32,
    z_near: f32,
    z_far: f32,
    frustum: Frustum,

    frame: Option<FrameId>,
    position: DVec3,
    orient: DMat3,

    camera_frame: Option<FrameId>,
    release_queue: Option<FrameReleaseQueue>,
}

impl CameraContext {
    /// Create a camera context.
    ///
    /// # Arguments
    ///
    /// * `width`, `height` - Viewport size in pixels
    /// * `fov_deg` - Vertical field of view in degrees
    /// * `z_near`, `z_far` - Clip distances
    pub fn new(width: f32, height: f32, fov_deg: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            width,
            height,
            fov_deg,
            z_near,
            z_far,
            frustum: Frustum::new(width, height, fov_deg, z_near, z_far),
            frame: None,
            position: DVec3::ZERO,
            orient: DMat3::IDENTITY,
            camera_frame: None,
            release_queue: None,
        }
    }

    // ===== PLACEMENT =====

    /// Attach the camera to a reference frame.
    pub fn set_frame(&mut self, frame: Option<FrameId>) {
        self.frame = frame;
    }

    /// Camera position relative to the attached frame
    pub fn set_position(&mut self, position: DVec3) {
        self.position = position;
    }

    /// Camera orientation relative to the attached frame
    pub fn set_orient(&mut self, orient: DMat3) {
        self.orient = orient;
    }

    // ===== CAMERA FRAME =====

    /// Create the camera frame for this render.
    ///
    /// # Panics
    ///
    /// Panics if no frame is attached or a camera frame is already active.
    pub fn begin_frame(&mut self, frames: &mut FrameGraph, time: f64) {
        let Some(parent) = self.frame else {
            panic!("CameraContext::begin_frame: no reference frame attached");
        };
        assert!(frames.contains(parent), "CameraContext::begin_frame: attached frame no longer exists");
        assert!(self.camera_frame.is_none(), "CameraContext::begin_frame: camera frame already active");

        let camera_frame = frames.create_camera_frame(parent);
        frames.set_orient(camera_frame, self.orient, time);
        frames.set_position(camera_frame, self.position);

        // No movement to interpolate: interpolated pose is the current pose
        frames.clear_movement(camera_frame);
        frames.update_interp_transform(camera_frame, 1.0);

        self.camera_frame = Some(camera_frame);
        self.release_queue = Some(frames.release_queue());
        view_debug!("spaceview::CameraContext", "Camera frame {:?} created under {:?}", camera_frame, parent);
    }

    /// Destroy the camera frame.
    ///
    /// # Panics
    ///
    /// Panics if no camera frame is active.
    pub fn end_frame(&mut self, frames: &mut FrameGraph) {
        let Some(camera_frame) = self.camera_frame.take() else {
            panic!("CameraContext::end_frame: no active camera frame");
        };
        self.release_queue = None;

        frames.delete_camera_frame(camera_frame);
        view_debug!("spaceview::CameraContext", "Camera frame {:?} destroyed", camera_frame);
    }

    /// Push the projection (infinite far plane) and an identity model
    /// transform to the renderer.
    pub fn apply_draw_transforms(&self, renderer: &mut dyn Renderer) {
        let aspect = self.width / self.height.max(1.0);
        renderer.set_projection(Mat4::perspective_infinite_rh(
            self.fov_deg.to_radians(),
            aspect,
            self.z_near,
        ));
        renderer.set_transform(Mat4::IDENTITY);
    }

    // ===== ACCESSORS =====

    /// Frame the camera is attached to
    pub fn frame(&self) -> Option<FrameId> {
        self.frame
    }

    /// Active camera frame, between `begin_frame` and `end_frame`
    pub fn camera_frame(&self) -> Option<FrameId> {
        self.camera_frame
    }

    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// Vertical field of view in degrees
    pub fn fov(&self) -> f32 {
        self.fov_deg
    }

    /// Screen-space size of one unit at unit distance: 2·tan(fov/2)
    pub fn fov_factor(&self) -> f64 {
        2.0 * ((self.fov_deg as f64).to_radians() * 0.5).tan()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn orient(&self) -> DMat3 {
        self.orient
    }
}

/// Dropping mid-frame cannot reach the graph, so the camera frame is only
/// queued. It is deleted at the graph's next structural change or
/// `FrameGraph::purge_released`; until then it is still listed under its
/// parent.
impl Drop for CameraContext {
    fn drop(&mut self) {
        if let Some(camera_frame) = self.camera_frame.take() {
            view_warn!(
                "spaceview::CameraContext",
                "Dropped with camera frame {:?} still active, queued for release",
                camera_frame
            );
            if let Some(queue) = &self.release_queue {
                queue.release(camera_frame);
            }
        }
    }
}

#[cfg(test)]
#[path = "camera_context_tests.rs"]
mod tests;
