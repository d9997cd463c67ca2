/// Mock Body for unit tests
///
/// Renders nothing; each `render` call sets the view transform on the
/// renderer and appends the body label to a shared log, so tests can
/// check which bodies were drawn and in which order.

#[cfg(test)]
use std::sync::{Arc, Mutex};
#[cfg(test)]
use glam::{DMat4, DVec3};

#[cfg(test)]
use crate::body::{AtmosphericState, Body, BodyFlags, BodyType, SystemBody};
#[cfg(test)]
use crate::camera::RenderView;
#[cfg(test)]
use crate::frame::FrameId;
#[cfg(test)]
use crate::renderer::Renderer;

#[cfg(test)]
pub type RenderLog = Arc<Mutex<Vec<String>>>;

#[cfg(test)]
pub struct MockBody {
    pub label: String,
    pub body_type: BodyType,
    pub frame: FrameId,
    pub flags: BodyFlags,
    pub position: DVec3,
    pub clip_radius: f64,
    pub phys_radius: f64,
    pub system_body: Option<SystemBody>,
    pub atmosphere: Option<AtmosphericState>,
    pub render_log: RenderLog,
}

#[cfg(test)]
impl MockBody {
    pub fn new(label: &str, body_type: BodyType, frame: FrameId, position: DVec3, radius: f64) -> Self {
        Self {
            label: label.to_string(),
            body_type,
            frame,
            flags: BodyFlags::empty(),
            position,
            clip_radius: radius,
            phys_radius: radius,
            system_body: None,
            atmosphere: None,
            render_log: RenderLog::default(),
        }
    }

    pub fn with_flags(mut self, flags: BodyFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_system_body(mut self, system_body: SystemBody) -> Self {
        self.system_body = Some(system_body);
        self
    }

    pub fn with_atmosphere(mut self, atmosphere: AtmosphericState) -> Self {
        self.atmosphere = Some(atmosphere);
        self
    }

    pub fn with_log(mut self, log: &RenderLog) -> Self {
        self.render_log = Arc::clone(log);
        self
    }
}

#[cfg(test)]
impl Body for MockBody {
    fn label(&self) -> &str {
        &self.label
    }

    fn body_type(&self) -> BodyType {
        self.body_type
    }

    fn frame(&self) -> FrameId {
        self.frame
    }

    fn flags(&self) -> BodyFlags {
        self.flags
    }

    fn position(&self) -> DVec3 {
        self.position
    }

    fn clip_radius(&self) -> f64 {
        self.clip_radius
    }

    fn phys_radius(&self) -> f64 {
        self.phys_radius
    }

    fn system_body(&self) -> Option<&SystemBody> {
        self.system_body.as_ref()
    }

    fn atmospheric_state(&self, _dist: f64) -> Option<AtmosphericState> {
        self.atmosphere
    }

    fn render(
        &self,
        renderer: &mut dyn Renderer,
        _view: &RenderView<'_>,
        _view_coords: DVec3,
        view_transform: &DMat4,
    ) {
        renderer.set_transform(view_transform.as_mat4());
        if let Ok(mut log) = self.render_log.lock() {
            log.push(self.label.clone());
        }
    }
}
