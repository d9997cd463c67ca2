/// Camera - per-frame visibility, lighting and draw.
///
/// `update` builds the sorted list of visible bodies, `draw` picks the
/// lights, dims the background in atmospheres and issues every draw call.
/// Both must run between `CameraContext::begin_frame` and `end_frame`.

use std::sync::{Arc, Mutex};
use glam::{DMat3, DMat4, DVec3, Mat4, Vec3};

use crate::body::{BodyFlags, BodyId, BodyType};
use crate::error::{Error, Result};
use crate::frame::{compose, FrameGraph, FrameId};
use crate::renderer::{
    BlendMode, Color, Light, Material, MaterialDesc, PrimitiveType, RenderStateDesc, Renderer,
    VertexArray, VertexAttribs,
};
use crate::space::{FrameEnv, Space};
use crate::{view_debug, view_err, view_error, view_trace};
use super::body_attrs::{sort_for_draw, Billboard, BodyAttrs};
use super::camera_context::CameraContext;
use super::config::CameraConfig;
use super::eclipse::{self, Shadow};
use super::frustum::Frustum;
use super::light_source::LightSource;
use super::render_view::RenderView;

/// Smallest camera distance used when estimating a body's pixel size
const MIN_CAM_DIST: f64 = 1.0e-6;

pub struct Camera {
    context: Arc<Mutex<CameraContext>>,
    renderer: Arc<Mutex<dyn Renderer>>,
    billboard_material: Arc<dyn Material>,
    config: CameraConfig,
    sorted_bodies: Vec<BodyAttrs>,
    light_sources: Vec<LightSource>,
}

impl Camera {
    /// Create a camera with the default configuration.
    pub fn new(
        context: Arc<Mutex<CameraContext>>,
        renderer: Arc<Mutex<dyn Renderer>>,
    ) -> Result<Self> {
        Self::with_config(context, renderer, CameraConfig::default())
    }

    /// Create a camera.
    ///
    /// # Errors
    ///
    /// Fails with `Error::InitializationFailed` if the renderer cannot
    /// create the billboard material.
    pub fn with_config(
        context: Arc<Mutex<CameraContext>>,
        renderer: Arc<Mutex<dyn Renderer>>,
        config: CameraConfig,
    ) -> Result<Self> {
        let desc = MaterialDesc {
            shader: "billboards".to_string(),
            textures: 1,
            texture0: Some(config.billboard_texture.clone()),
        };
        let state = RenderStateDesc {
            blend_mode: BlendMode::AlphaOne,
            depth_write: false,
            primitive_type: PrimitiveType::Points,
            ..RenderStateDesc::default()
        };

        let billboard_material = {
            let mut r = renderer.lock()
                .map_err(|_| view_err!("spaceview::Camera", "Renderer lock poisoned"))?;
            r.create_material(desc, state).map_err(|e| {
                view_error!("spaceview::Camera", "Billboard material creation failed: {}", e);
                Error::InitializationFailed(format!("billboard material: {}", e))
            })?
        };

        Ok(Self {
            context,
            renderer,
            billboard_material,
            config,
            sorted_bodies: Vec::new(),
            light_sources: Vec::new(),
        })
    }

    // ===== ACCESSORS =====

    pub fn context(&self) -> &Arc<Mutex<CameraContext>> {
        &self.context
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Visible bodies from the last `update`, in draw order
    pub fn sorted_bodies(&self) -> &[BodyAttrs] {
        &self.sorted_bodies
    }

    /// Lights from the last `draw`
    pub fn light_sources(&self) -> &[LightSource] {
        &self.light_sources
    }

    pub fn billboard_material(&self) -> &Arc<dyn Material> {
        &self.billboard_material
    }

    // ===== UPDATE =====

    /// Rebuild the sorted list of visible bodies.
    ///
    /// # Panics
    ///
    /// Panics if no camera frame is active.
    pub fn update(&mut self, space: &Space) -> Result<()> {
        let (camera_frame, frustum, screen_height, fov_factor) = {
            let ctx = self.context.lock()
                .map_err(|_| view_err!("spaceview::Camera", "Camera context lock poisoned"))?;
            let Some(camera_frame) = ctx.camera_frame() else {
                panic!("Camera::update: no active camera frame");
            };
            (camera_frame, *ctx.frustum(), ctx.height() as f64, ctx.fov_factor())
        };

        let frames = space.frames();
        self.sorted_bodies.clear();

        for (id, body) in space.bodies() {
            let flags = body.flags();
            if flags.contains(BodyFlags::DRAW_EXCLUDE) {
                continue;
            }

            // Interpolated poses, so bodies stay consistent between physics ticks
            let (Some(orient), Some(offset)) = (
                frames.interp_orient_rel_to(body.frame(), camera_frame),
                frames.interp_position_rel_to(body.frame(), camera_frame),
            ) else {
                continue;
            };
            let view_transform = compose(orient, offset);
            let view_coords = view_transform.transform_point3(body.interp_position());

            let rad = body.clip_radius();
            if !frustum.test_point_infinite(view_coords, rad) {
                continue;
            }

            let cam_dist = view_coords.length();
            // Approximate on-screen diameter in pixels
            let pix_size = (screen_height * 2.0 * rad / (cam_dist.max(MIN_CAM_DIST) * fov_factor)) as f32;

            let body_type = body.body_type();
            let mut billboard = None;
            if body_type.is_terrain() {
                if pix_size < self.config.billboard_pixel_threshold {
                    billboard = Some(self.billboard_for(&frustum, view_coords, pix_size, body_type, body.system_body()));
                }
            } else if pix_size < self.config.hidden_pixel_threshold {
                continue;
            }

            self.sorted_bodies.push(BodyAttrs {
                body: id,
                view_transform,
                view_coords,
                cam_dist,
                flags,
                billboard,
            });
        }

        sort_for_draw(&mut self.sorted_bodies);

        view_trace!(
            "spaceview::Camera",
            "{} visible bodies, {} billboards",
            self.sorted_bodies.len(),
            self.sorted_bodies.iter().filter(|b| b.is_billboard()).count()
        );
        Ok(())
    }

    fn billboard_for(
        &self,
        frustum: &Frustum,
        view_coords: DVec3,
        pix_size: f32,
        body_type: BodyType,
        system_body: Option<&crate::body::SystemBody>,
    ) -> Billboard {
        let position = frustum.translate_point(view_coords).unwrap_or(view_coords);

        let mut color = match (body_type, system_body) {
            (BodyType::Star, Some(sb)) => sb.star_kind().map_or(Color::WHITE, |k| k.real_color()),
            (BodyType::Planet, Some(sb)) => sb.albedo(),
            _ => Color::WHITE,
        };

        // Tint with the main star, except for the star itself
        if body_type != BodyType::Star {
            if let Some(main) = self.light_sources.first() {
                color *= main.light().diffuse();
            }
        }

        Billboard {
            position: position.as_vec3(),
            size: pix_size.max(1.0),
            color: color.with_alpha(255),
        }
    }

    // ===== DRAW =====

    /// Draw the scene.
    ///
    /// # Arguments
    ///
    /// * `env` - Space, background and effects for this frame
    /// * `exclude` - Body to skip, usually the player's own craft
    ///
    /// # Panics
    ///
    /// Panics if no camera frame is active.
    pub fn draw(&mut self, env: &mut FrameEnv<'_>, exclude: Option<BodyId>) -> Result<()> {
        let space = env.space;
        let frames = space.frames();
        let root = space.root_frame();
        let camera_frame = {
            let ctx = self.context.lock()
                .map_err(|_| view_err!("spaceview::Camera", "Camera context lock poisoned"))?;
            let Some(camera_frame) = ctx.camera_frame() else {
                panic!("Camera::draw: no active camera frame");
            };
            camera_frame
        };

        // Background only needs the rotation
        let to_camera = frames.frame_transform(root, camera_frame).unwrap_or(DMat4::IDENTITY);
        let trans2bg = DMat4::from_mat3(DMat3::from_mat4(to_camera));

        self.light_sources.clear();
        collect_system_lights(space, camera_frame, root, self.config.max_lights, &mut self.light_sources);
        if self.light_sources.is_empty() {
            view_debug!("spaceview::Camera", "No star lights, using fallback light");
            self.light_sources.push(LightSource::new(
                None,
                Light::directional(Vec3::ZERO, Color::WHITE),
            ));
        }

        let bg_intensity = self.background_intensity(space, camera_frame);

        let renderer = Arc::clone(&self.renderer);
        let mut r = renderer.lock()
            .map_err(|_| view_err!("spaceview::Camera", "Renderer lock poisoned"))?;

        r.clear_screen();

        env.background.set_intensity(bg_intensity);
        env.background.draw(&mut *r, &trans2bg);

        let lights: Vec<Light> = self.light_sources.iter().map(|l| *l.light()).collect();
        r.set_lights(&lights);

        let mut billboards = VertexArray::new(VertexAttribs::POSITION | VertexAttribs::NORMAL);
        let view = RenderView::new(self, space);

        for attrs in &self.sorted_bodies {
            if exclude == Some(attrs.body) {
                continue;
            }

            match &attrs.billboard {
                Some(billboard) => {
                    billboards.add(billboard.position, Vec3::new(0.0, 0.0, billboard.size));
                }
                None => {
                    if let Some(body) = space.body(attrs.body) {
                        body.render(&mut *r, &view, attrs.view_coords, &attrs.view_transform);
                    }
                }
            }
        }

        if !billboards.is_empty() {
            let saved = r.transform();
            r.set_transform(Mat4::IDENTITY);
            let result = r.draw_buffer(&billboards, self.billboard_material.as_ref());
            r.set_transform(saved);
            if let Err(e) = result {
                view_error!("spaceview::Camera", "Billboard batch of {} failed: {}", billboards.len(), e);
                return Err(e);
            }
        }

        env.effects.render_all(&mut *r, frames, root, camera_frame);
        Ok(())
    }

    /// Background brightness: dimmed when the camera sits inside a lit
    /// planetary atmosphere.
    fn background_intensity(&self, space: &Space, camera_frame: FrameId) -> f32 {
        let frames = space.frames();
        let Some(parent) = frames.parent(camera_frame) else {
            return 1.0;
        };
        if !frames.is_rot_frame(parent) {
            return 1.0;
        }
        let Some(planet_id) = frames.body(parent) else {
            return 1.0;
        };
        let Some(planet) = space.body(planet_id).filter(|b| b.body_type() == BodyType::Planet) else {
            return 1.0;
        };
        let Some(relpos) = space.body_interp_position_rel_to_frame(planet_id, camera_frame) else {
            return 1.0;
        };
        let relpos = relpos.as_vec3();
        let Some(atmosphere) = planet.atmospheric_state(relpos.length() as f64) else {
            return 1.0;
        };
        if atmosphere.pressure < self.config.min_atmosphere_pressure {
            return 1.0;
        }

        // Up vector: planet centre to camera
        let up = (-relpos).normalize_or_zero();
        let player = space.player();

        let mut intensity = 0.0f32;
        for (i, source) in self.light_sources.iter().enumerate() {
            let light = source.light();
            let shadow = player.map_or(1.0, |p| self.shadowed_intensity(space, i, p));
            let light_dir = light.position().normalize_or_zero();
            intensity += shadow * light_dir.dot(up).max(0.0) * (light.diffuse().luminance() / 255.0);
        }
        let intensity = intensity.clamp(0.0, 1.0);

        let density = atmosphere.density as f32;
        (1.0 - density.powf(0.25).min(1.0) * (0.3 + intensity.powf(0.25))).clamp(0.0, 1.0)
    }

    // ===== ECLIPSES =====

    /// Append the shadows cast on `body` for light `light_index` to `out`.
    pub fn calc_shadows(&self, space: &Space, light_index: usize, body: BodyId, out: &mut Vec<Shadow>) {
        eclipse::calc_shadows(
            space,
            &self.light_sources,
            light_index,
            body,
            self.config.eclipse_negligible_ratio,
            out,
        );
    }

    /// Fraction of light `light_index` reaching `body`.
    pub fn shadowed_intensity(&self, space: &Space, light_index: usize, body: BodyId) -> f32 {
        eclipse::shadowed_intensity(
            space,
            &self.light_sources,
            light_index,
            body,
            self.config.eclipse_negligible_ratio,
        )
    }

    /// The `n` biggest shadows on `body`, biggest first.
    pub fn principal_shadows(&self, space: &Space, body: BodyId, n: usize) -> Vec<Shadow> {
        eclipse::principal_shadows(
            space,
            &self.light_sources,
            body,
            n,
            self.config.max_lights,
            self.config.eclipse_negligible_ratio,
        )
    }
}

/// Depth-first walk from `frame` collecting star lights.
///
/// Only non-rotating frames anchored to a star count, so a star with both
/// a rotating and a non-rotating frame lights the scene once.
fn collect_system_lights(
    space: &Space,
    camera_frame: FrameId,
    frame: FrameId,
    max_lights: usize,
    lights: &mut Vec<LightSource>,
) {
    if lights.len() >= max_lights {
        return;
    }
    let frames: &FrameGraph = space.frames();
    let Some(f) = frames.frame(frame) else {
        return;
    };

    if !f.is_rot_frame() {
        if let Some(light) = star_light(space, frame, camera_frame) {
            lights.push(light);
        }
    }

    for &child in f.children() {
        collect_system_lights(space, camera_frame, child, max_lights, lights);
    }
}

fn star_light(space: &Space, frame: FrameId, camera_frame: FrameId) -> Option<LightSource> {
    let body_id = space.frames().body(frame)?;
    let star = space.body(body_id)?.system_body()?.star_kind()?;
    let direction = space.frames().position_rel_to(frame, camera_frame)?.normalize_or_zero();
    let color = star.real_color().with_alpha(0);
    Some(LightSource::new(
        Some(body_id),
        Light::directional(direction.as_vec3(), color),
    ))
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
