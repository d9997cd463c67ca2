//! Camera module - visibility, lighting and eclipses.
//!
//! `CameraContext` holds the projection and the camera pose, `Camera`
//! turns a `Space` into draw calls once per frame, and `eclipse` holds the
//! analytic shadow math both use.

mod body_attrs;
mod camera;
mod camera_context;
mod config;
pub mod eclipse;
mod frustum;
mod light_source;
mod render_view;

pub use body_attrs::{sort_for_draw, Billboard, BodyAttrs};
pub use camera::Camera;
pub use camera_context::CameraContext;
pub use config::CameraConfig;
pub use eclipse::{disc_covered, Shadow};
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use light_source::LightSource;
pub use render_view::RenderView;
