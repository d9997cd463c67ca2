/// A single node of the reference-frame hierarchy.
///
/// Position and orientation are expressed relative to the parent frame:
/// a point `p` in this frame is `orient * p + position` in the parent.

use glam::{DMat3, DQuat, DVec3};
use slotmap::new_key_type;
use crate::body::BodyId;

new_key_type! {
    /// Stable handle of a frame inside a FrameGraph.
    ///
    /// Handles stay valid until their own frame is deleted; a deleted
    /// handle is never reused for a different frame.
    pub struct FrameId;
}

/// Reference frame record
#[derive(Debug, Clone)]
pub struct Frame {
    pub(crate) parent: Option<FrameId>,
    pub(crate) children: Vec<FrameId>,
    pub(crate) body: Option<BodyId>,
    pub(crate) label: String,
    pub(crate) rotating: bool,
    pub(crate) temporary: bool,

    pub(crate) position: DVec3,
    pub(crate) orient: DMat3,
    pub(crate) init_orient: DMat3,
    /// Radians per second around local Y (rotating frames only)
    pub(crate) ang_speed: f64,

    pub(crate) old_position: DVec3,
    pub(crate) old_orient: DMat3,
    pub(crate) interp_position: DVec3,
    pub(crate) interp_orient: DMat3,
}

impl Frame {
    pub(crate) fn new(
        parent: Option<FrameId>,
        label: impl Into<String>,
        rotating: bool,
        temporary: bool,
    ) -> Self {
        Self {
            parent,
            children: Vec::new(),
            body: None,
            label: label.into(),
            rotating,
            temporary,
            position: DVec3::ZERO,
            orient: DMat3::IDENTITY,
            init_orient: DMat3::IDENTITY,
            ang_speed: 0.0,
            old_position: DVec3::ZERO,
            old_orient: DMat3::IDENTITY,
            interp_position: DVec3::ZERO,
            interp_orient: DMat3::IDENTITY,
        }
    }

    pub fn parent(&self) -> Option<FrameId> {
        self.parent
    }

    pub fn children(&self) -> &[FrameId] {
        &self.children
    }

    /// Body anchoring this frame, if any
    pub fn body(&self) -> Option<BodyId> {
        self.body
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the frame rotates with its anchoring body
    pub fn is_rot_frame(&self) -> bool {
        self.rotating
    }

    /// Whether this is a transient camera frame
    pub fn is_camera_frame(&self) -> bool {
        self.temporary
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn orient(&self) -> DMat3 {
        self.orient
    }

    pub fn angular_speed(&self) -> f64 {
        self.ang_speed
    }

    pub fn interp_position(&self) -> DVec3 {
        self.interp_position
    }

    pub fn interp_orient(&self) -> DMat3 {
        self.interp_orient
    }

    /// Set orientation at simulation time `time`.
    ///
    /// Rotating frames keep `orient` as their initial orientation and spin
    /// around local Y at `ang_speed`.
    pub(crate) fn set_orient(&mut self, orient: DMat3, time: f64) {
        self.init_orient = orient;
        self.orient = if self.rotating && self.ang_speed != 0.0 {
            orient * DMat3::from_rotation_y(self.ang_speed * time)
        } else {
            orient
        };
    }

    /// Forget the previous tick: interpolation starts and ends at the
    /// current pose.
    pub(crate) fn clear_movement(&mut self) {
        self.old_position = self.position;
        self.old_orient = self.orient;
        self.interp_position = self.position;
        self.interp_orient = self.orient;
    }

    /// Blend previous and current pose. `alpha` = 0 is the previous tick,
    /// 1 the current one.
    pub(crate) fn update_interp(&mut self, alpha: f64) {
        if alpha >= 1.0 {
            self.interp_position = self.position;
            self.interp_orient = self.orient;
            return;
        }

        self.interp_position = self.old_position.lerp(self.position, alpha);

        let from = DQuat::from_mat3(&self.old_orient);
        let to = DQuat::from_mat3(&self.orient);
        self.interp_orient = DMat3::from_quat(from.slerp(to, alpha));
    }
}
