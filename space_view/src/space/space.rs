/// Space - the simulated bodies, their frame graph and the player.

use glam::DVec3;
use slotmap::SlotMap;

use crate::body::{Body, BodyId};
use crate::error::{Error, Result};
use crate::frame::{FrameGraph, FrameId};
use crate::view_debug;

pub struct Space {
    frames: FrameGraph,
    bodies: SlotMap<BodyId, Box<dyn Body>>,
    root: FrameId,
    player: Option<BodyId>,
    time: f64,
}

impl Space {
    /// Create an empty space with a single non-rotating root frame.
    pub fn new() -> Self {
        let mut frames = FrameGraph::new();
        let root = frames.create_frame(None, "root", false);
        Self {
            frames,
            bodies: SlotMap::with_key(),
            root,
            player: None,
            time: 0.0,
        }
    }

    // ===== FRAMES =====

    pub fn frames(&self) -> &FrameGraph {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut FrameGraph {
        &mut self.frames
    }

    pub fn root_frame(&self) -> FrameId {
        self.root
    }

    // ===== BODIES =====

    /// Add a body. Its frame must already be in the graph.
    pub fn add_body(&mut self, body: Box<dyn Body>) -> Result<BodyId> {
        self.frames.purge_released();
        if !self.frames.contains(body.frame()) {
            return Err(Error::InvalidFrame(format!(
                "body '{}' references frame {:?}, not in the graph",
                body.label(),
                body.frame()
            )));
        }
        let label = body.label().to_string();
        let id = self.bodies.insert(body);
        view_debug!("spaceview::Space", "Added body '{}'", label);
        Ok(id)
    }

    /// Remove a body. Frames anchored to it lose their anchor.
    pub fn remove_body(&mut self, id: BodyId) -> Option<Box<dyn Body>> {
        self.frames.purge_released();
        let body = self.bodies.remove(id)?;
        if let Some(frame) = self.frames.frame(body.frame()) {
            if frame.body() == Some(id) {
                self.frames.set_body(body.frame(), None);
            }
        }
        if self.player == Some(id) {
            self.player = None;
        }
        Some(body)
    }

    pub fn body(&self, id: BodyId) -> Option<&dyn Body> {
        self.bodies.get(id).map(|b| b.as_ref())
    }

    pub fn contains_body(&self, id: BodyId) -> bool {
        self.bodies.contains_key(id)
    }

    /// All bodies, in slot order.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &dyn Body)> + '_ {
        self.bodies.iter().map(|(id, b)| (id, b.as_ref()))
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    // ===== PLAYER / TIME =====

    /// Set or clear the player. A stale id leaves the player unchanged.
    pub fn set_player(&mut self, player: Option<BodyId>) -> Result<()> {
        if let Some(id) = player {
            if !self.bodies.contains_key(id) {
                return Err(Error::InvalidBody(format!("player {:?} is not in the space", id)));
            }
        }
        self.player = player;
        Ok(())
    }

    pub fn player(&self) -> Option<BodyId> {
        self.player
    }

    /// Simulation time in seconds
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn set_time(&mut self, time: f64) {
        self.time = time;
    }

    // ===== POSITIONS =====

    /// Position of `body` relative to `relative_to`, in the frame of
    /// `relative_to` (current tick, not interpolated).
    pub fn body_position_rel_to(&self, body: BodyId, relative_to: BodyId) -> Option<DVec3> {
        let a = self.bodies.get(body)?;
        let b = self.bodies.get(relative_to)?;
        let orient = self.frames.orient_rel_to(a.frame(), b.frame())?;
        let offset = self.frames.position_rel_to(a.frame(), b.frame())?;
        Some(orient * a.position() + offset - b.position())
    }

    /// Interpolated position of `body` in `frame` coordinates.
    pub fn body_interp_position_rel_to_frame(&self, body: BodyId, frame: FrameId) -> Option<DVec3> {
        let a = self.bodies.get(body)?;
        let orient = self.frames.interp_orient_rel_to(a.frame(), frame)?;
        let offset = self.frames.interp_position_rel_to(a.frame(), frame)?;
        Some(orient * a.interp_position() + offset)
    }
}

impl Default for Space {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "space_tests.rs"]
mod tests;
