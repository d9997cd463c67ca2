/// FrameGraph - arena of hierarchical reference frames.
///
/// Frames are addressed by `FrameId` handles; parent/child links are
/// handles, never owning pointers. Relative transforms are resolved by
/// composing each frame's pose up to the root.

use std::sync::{Arc, Mutex};
use glam::{DMat3, DMat4, DVec3};
use slotmap::SlotMap;
use crate::body::BodyId;
use crate::{view_debug, view_warn};
use super::frame::{Frame, FrameId};

/// Shared queue of camera frames whose owner went away while the frame
/// was still attached.
///
/// Queued frames stay in the graph (and in `children`/`len`) until the
/// next `create_frame`, `create_camera_frame`, `delete_camera_frame`,
/// `Space::add_body`/`remove_body` or an explicit
/// `FrameGraph::purge_released`.
#[derive(Debug, Clone, Default)]
pub struct FrameReleaseQueue {
    pending: Arc<Mutex<Vec<FrameId>>>,
}

impl FrameReleaseQueue {
    /// Queue a camera frame for deletion.
    pub fn release(&self, id: FrameId) {
        match self.pending.lock() {
            Ok(mut pending) => pending.push(id),
            Err(_) => view_warn!("spaceview::FrameGraph", "Release queue poisoned, frame {:?} leaked", id),
        }
    }

    fn take(&self) -> Vec<FrameId> {
        match self.pending.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => Vec::new(),
        }
    }

    pub fn pending_count(&self) -> usize {
        self.pending.lock().map(|p| p.len()).unwrap_or(0)
    }
}

/// Which pose a query composes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pose {
    /// Pose at the current physics tick
    Current,
    /// Sub-step interpolated pose used for rendering
    Interpolated,
}

/// Arena of reference frames.
pub struct FrameGraph {
    frames: SlotMap<FrameId, Frame>,
    release_queue: FrameReleaseQueue,
}

impl FrameGraph {
    pub fn new() -> Self {
        Self {
            frames: SlotMap::with_key(),
            release_queue: FrameReleaseQueue::default(),
        }
    }

    // ===== STRUCTURE =====

    /// Create a frame.
    ///
    /// # Arguments
    ///
    /// * `parent` - Parent frame, `None` for a root
    /// * `label` - Debug name
    /// * `rotating` - Whether the frame rotates with its anchoring body
    ///
    /// A parent handle that is not in the graph yields a root frame.
    pub fn create_frame(
        &mut self,
        parent: Option<FrameId>,
        label: impl Into<String>,
        rotating: bool,
    ) -> FrameId {
        self.purge_released();
        self.insert(parent, label, rotating, false)
    }

    /// Create a transient camera frame as a child of `parent`.
    pub fn create_camera_frame(&mut self, parent: FrameId) -> FrameId {
        self.purge_released();
        debug_assert!(self.frames.contains_key(parent), "camera frame parent must exist");
        self.insert(Some(parent), "camera", false, true)
    }

    fn insert(
        &mut self,
        parent: Option<FrameId>,
        label: impl Into<String>,
        rotating: bool,
        temporary: bool,
    ) -> FrameId {
        let parent = parent.filter(|p| self.frames.contains_key(*p));
        let id = self.frames.insert(Frame::new(parent, label, rotating, temporary));
        if let Some(parent_frame) = parent.and_then(|p| self.frames.get_mut(p)) {
            parent_frame.children.push(id);
        }
        id
    }

    /// Delete a camera frame created by `create_camera_frame`, then purge
    /// any frames queued for release.
    ///
    /// Returns false if the handle is stale.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a camera frame.
    pub fn delete_camera_frame(&mut self, id: FrameId) -> bool {
        let removed = self.remove_camera_frame(id);
        self.purge_released();
        removed
    }

    fn remove_camera_frame(&mut self, id: FrameId) -> bool {
        let Some(frame) = self.frames.get(id) else {
            return false;
        };
        assert!(frame.temporary, "delete_camera_frame called on non-camera frame '{}'", frame.label);
        assert!(frame.children.is_empty(), "camera frame must not have children");

        if let Some(parent) = frame.parent.and_then(|p| self.frames.get_mut(p)) {
            parent.children.retain(|&c| c != id);
        }
        self.frames.remove(id);
        true
    }

    /// Handle to the release queue, for owners that cannot reach the graph
    /// when they are dropped.
    pub fn release_queue(&self) -> FrameReleaseQueue {
        self.release_queue.clone()
    }

    /// Delete every camera frame queued for release. Returns how many were removed.
    pub fn purge_released(&mut self) -> usize {
        let mut purged = 0;
        for id in self.release_queue.take() {
            if self.remove_camera_frame(id) {
                purged += 1;
            }
        }
        if purged > 0 {
            view_debug!("spaceview::FrameGraph", "Purged {} released camera frame(s)", purged);
        }
        purged
    }

    // ===== ACCESS =====

    pub fn frame(&self, id: FrameId) -> Option<&Frame> {
        self.frames.get(id)
    }

    pub fn contains(&self, id: FrameId) -> bool {
        self.frames.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn parent(&self, id: FrameId) -> Option<FrameId> {
        self.frames.get(id).and_then(|f| f.parent)
    }

    pub fn children(&self, id: FrameId) -> &[FrameId] {
        self.frames.get(id).map(|f| f.children.as_slice()).unwrap_or(&[])
    }

    pub fn is_rot_frame(&self, id: FrameId) -> bool {
        self.frames.get(id).is_some_and(|f| f.rotating)
    }

    pub fn body(&self, id: FrameId) -> Option<BodyId> {
        self.frames.get(id).and_then(|f| f.body)
    }

    // ===== MUTATION =====

    /// Set position relative to the parent. Returns false if the key is invalid.
    pub fn set_position(&mut self, id: FrameId, position: DVec3) -> bool {
        if let Some(frame) = self.frames.get_mut(id) {
            frame.position = position;
            true
        } else {
            false
        }
    }

    /// Set orientation relative to the parent at simulation time `time`.
    pub fn set_orient(&mut self, id: FrameId, orient: DMat3, time: f64) -> bool {
        if let Some(frame) = self.frames.get_mut(id) {
            frame.set_orient(orient, time);
            true
        } else {
            false
        }
    }

    /// Set the spin rate of a rotating frame (radians per second around local Y).
    pub fn set_angular_speed(&mut self, id: FrameId, ang_speed: f64) -> bool {
        if let Some(frame) = self.frames.get_mut(id) {
            frame.ang_speed = ang_speed;
            true
        } else {
            false
        }
    }

    /// Attach the body anchoring this frame.
    pub fn set_body(&mut self, id: FrameId, body: Option<BodyId>) -> bool {
        if let Some(frame) = self.frames.get_mut(id) {
            frame.body = body;
            true
        } else {
            false
        }
    }

    /// Advance a rotating frame's orientation to simulation time `time`.
    pub fn update_rotation(&mut self, id: FrameId, time: f64) -> bool {
        if let Some(frame) = self.frames.get_mut(id) {
            let init = frame.init_orient;
            frame.set_orient(init, time);
            true
        } else {
            false
        }
    }

    /// Make previous pose equal to the current one (no movement to interpolate).
    pub fn clear_movement(&mut self, id: FrameId) -> bool {
        if let Some(frame) = self.frames.get_mut(id) {
            frame.clear_movement();
            true
        } else {
            false
        }
    }

    /// Recompute interpolated poses for `id` and its whole subtree.
    pub fn update_interp_transform(&mut self, id: FrameId, alpha: f64) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(frame) = self.frames.get_mut(current) {
                frame.update_interp(alpha);
                stack.extend(frame.children.iter().copied());
            }
        }
    }

    // ===== RELATIVE TRANSFORMS =====

    /// Pose of `id` relative to the root of its tree: (orientation, position).
    fn root_pose(&self, id: FrameId, pose: Pose) -> Option<(DMat3, DVec3)> {
        let mut frame = self.frames.get(id)?;
        let (mut orient, mut position) = match pose {
            Pose::Current => (frame.orient, frame.position),
            Pose::Interpolated => (frame.interp_orient, frame.interp_position),
        };

        while let Some(parent_id) = frame.parent {
            frame = self.frames.get(parent_id)?;
            let (parent_orient, parent_position) = match pose {
                Pose::Current => (frame.orient, frame.position),
                Pose::Interpolated => (frame.interp_orient, frame.interp_position),
            };
            position = parent_orient * position + parent_position;
            orient = parent_orient * orient;
        }

        Some((orient, position))
    }

    /// Orientation and origin of `id` expressed in `relative_to` coordinates.
    fn relative_pose(
        &self,
        id: FrameId,
        relative_to: FrameId,
        pose: Pose,
    ) -> Option<(DMat3, DVec3)> {
        if id == relative_to {
            self.frames.get(id)?;
            return Some((DMat3::IDENTITY, DVec3::ZERO));
        }
        let (orient, position) = self.root_pose(id, pose)?;
        let (rel_orient, rel_position) = self.root_pose(relative_to, pose)?;
        let inv = rel_orient.transpose();
        Some((inv * orient, inv * (position - rel_position)))
    }

    /// Origin of `id` in `relative_to` coordinates.
    pub fn position_rel_to(&self, id: FrameId, relative_to: FrameId) -> Option<DVec3> {
        self.relative_pose(id, relative_to, Pose::Current).map(|(_, p)| p)
    }

    /// Orientation of `id` in `relative_to` coordinates.
    pub fn orient_rel_to(&self, id: FrameId, relative_to: FrameId) -> Option<DMat3> {
        self.relative_pose(id, relative_to, Pose::Current).map(|(o, _)| o)
    }

    /// Interpolated origin of `id` in `relative_to` coordinates.
    pub fn interp_position_rel_to(&self, id: FrameId, relative_to: FrameId) -> Option<DVec3> {
        self.relative_pose(id, relative_to, Pose::Interpolated).map(|(_, p)| p)
    }

    /// Interpolated orientation of `id` in `relative_to` coordinates.
    pub fn interp_orient_rel_to(&self, id: FrameId, relative_to: FrameId) -> Option<DMat3> {
        self.relative_pose(id, relative_to, Pose::Interpolated).map(|(o, _)| o)
    }

    /// Matrix mapping `from` coordinates into `to` coordinates.
    pub fn frame_transform(&self, from: FrameId, to: FrameId) -> Option<DMat4> {
        self.relative_pose(from, to, Pose::Current)
            .map(|(orient, position)| compose(orient, position))
    }

    /// Interpolated matrix mapping `from` coordinates into `to` coordinates.
    pub fn interp_frame_transform(&self, from: FrameId, to: FrameId) -> Option<DMat4> {
        self.relative_pose(from, to, Pose::Interpolated)
            .map(|(orient, position)| compose(orient, position))
    }
}

impl Default for FrameGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Build an affine matrix from a rotation and a translation.
pub fn compose(orient: DMat3, position: DVec3) -> DMat4 {
    let mut m = DMat4::from_mat3(orient);
    m.w_axis = position.extend(1.0);
    m
}

#[cfg(test)]
#[path = "frame_graph_tests.rs"]
mod tests;
