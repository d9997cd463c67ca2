/// Analytic eclipse shadows.
///
/// All bodies are spheres and the light source is treated as being at
/// infinity (parallel rays). Lengths are normalized so that the shadowed
/// body has radius 1.

use std::cmp::Ordering;
use std::f64::consts::PI;
use glam::DVec3;

use crate::body::{BodyId, BodyType};
use crate::space::Space;
use super::light_source::LightSource;

/// One occluder's shadow on a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    /// Occluder centre projected on the plane perpendicular to the light,
    /// relative to the shadowed body's centre
    pub centre: DVec3,
    /// Occluder radius
    pub srad: f32,
    /// Apparent radius of the light disc at the occluder's distance
    pub lrad: f32,
}

impl Shadow {
    /// Occluder size relative to the light disc. Bigger is more significant.
    pub fn significance(&self) -> f32 {
        self.srad / self.lrad
    }

    /// Order by significance, least significant first.
    pub fn cmp_significance(&self, other: &Shadow) -> Ordering {
        self.significance().total_cmp(&other.significance())
    }

    /// Fraction of the light that still gets through at the body's centre.
    pub fn transmittance(&self) -> f32 {
        let dist = self.centre.length() as f32 / self.lrad;
        1.0 - disc_covered(dist, self.srad / self.lrad)
    }
}

/// Above this radius the occluder's edge is treated as a straight line
const HALF_PLANE_RADIUS: f64 = 1.0e4;

/// Fraction of a unit disc covered by a disc of radius `rad` whose centre
/// is `dist` away.
///
/// Separation, containment of the unit disc and containment of the second
/// disc are decided up front in the caller's precision, so those cases are
/// exact. Partial overlaps sum the two circular segments in f64. The result
/// is finite and within 0.0..=1.0 for any finite non-negative inputs.
pub fn disc_covered(dist: f32, rad: f32) -> f32 {
    if dist >= 1.0 + rad {
        return 0.0;
    }
    if rad >= dist + 1.0 {
        return 1.0;
    }
    if dist + rad <= 1.0 {
        return rad * rad;
    }

    let (dist, rad) = (f64::from(dist), f64::from(rad));
    if rad > HALF_PLANE_RADIUS {
        // Unit disc cut by the line x = dist - rad
        let h = (dist - rad).clamp(-1.0, 1.0);
        let area = h.acos() - h * (1.0 - h * h).max(0.0).sqrt();
        return (area / PI).clamp(0.0, 1.0) as f32;
    }

    let radsq = rad * rad;
    // Distance from the unit disc centre to the chord through both intersections
    let xl = ((dist * dist + 1.0 - radsq) / (2.0 * dist)).clamp(-1.0, 1.0);
    // Same, measured from the second disc and normalized by its radius
    let xs = ((dist - xl) / rad).clamp(-1.0, 1.0);
    // Half chord length
    let d = (1.0 - xl * xl).max(0.0).sqrt();

    let th = xl.acos();
    let th2 = xs.acos();

    debug_assert!(!d.is_nan() && !th.is_nan() && !th2.is_nan());

    ((th + radsq * th2 - dist * d) / PI).clamp(0.0, 1.0) as f32
}

/// Radius used for the body being shadowed.
fn shadowed_radius(space: &Space, body: BodyId) -> Option<f64> {
    let b = space.body(body)?;
    if b.body_type().is_terrain() {
        Some(b.system_body().map_or(b.phys_radius(), |sb| sb.radius()))
    } else {
        Some(b.phys_radius())
    }
}

/// Collect the shadows cast on `body` by planets and stars between it and
/// light `light_index`.
///
/// Lights without a star (the fallback light) and lights with no physical
/// extent cast no shadows. Results are appended to `out`.
pub fn calc_shadows(
    space: &Space,
    lights: &[LightSource],
    light_index: usize,
    body: BodyId,
    negligible_ratio: f64,
    out: &mut Vec<Shadow>,
) {
    let Some(light_body) = lights.get(light_index).and_then(|l| l.body()) else {
        return;
    };
    let Some(light) = space.body(light_body) else {
        return;
    };
    let light_radius = light.phys_radius();
    let Some(b_radius) = shadowed_radius(space, body) else {
        return;
    };
    if light_radius <= 0.0 || b_radius <= 0.0 {
        return;
    }

    let Some(b_light_pos) = space.body_position_rel_to(light_body, body) else {
        return;
    };
    let light_dist = b_light_pos.length();
    if light_dist <= 0.0 {
        return;
    }
    let light_dir = b_light_pos / light_dist;

    for (id, occluder) in space.bodies() {
        if id == body || id == light_body {
            continue;
        }
        if !matches!(occluder.body_type(), BodyType::Planet | BodyType::Star) {
            continue;
        }

        let b2_radius = occluder.system_body().map_or(occluder.phys_radius(), |sb| sb.radius());
        let Some(b2_pos) = space.body_position_rel_to(id, body) else {
            continue;
        };
        let perp_dist = light_dir.dot(b2_pos);

        // Occluder must lie between the body and the light
        if perp_dist <= 0.0 || perp_dist > light_dist {
            continue;
        }

        let srad = b2_radius / b_radius;
        let lrad = (light_radius / light_dist) * perp_dist / b_radius;
        if srad / lrad < negligible_ratio {
            continue;
        }

        let projected_centre = (b2_pos - perp_dist * light_dir) / b_radius;
        if projected_centre.length() < 1.0 + srad + lrad {
            out.push(Shadow {
                centre: projected_centre,
                srad: srad as f32,
                lrad: lrad as f32,
            });
        }
    }
}

/// Light intensity reaching `body` from light `light_index`, in 0.0..=1.0.
///
/// Each shadow attenuates independently; overlapping shadows are not merged.
pub fn shadowed_intensity(
    space: &Space,
    lights: &[LightSource],
    light_index: usize,
    body: BodyId,
    negligible_ratio: f64,
) -> f32 {
    let mut shadows = Vec::with_capacity(16);
    calc_shadows(space, lights, light_index, body, negligible_ratio, &mut shadows);
    shadows.iter().map(Shadow::transmittance).product()
}

/// The `n` most significant shadows on `body` across the first
/// `max_lights` lights, most significant first.
pub fn principal_shadows(
    space: &Space,
    lights: &[LightSource],
    body: BodyId,
    n: usize,
    max_lights: usize,
    negligible_ratio: f64,
) -> Vec<Shadow> {
    let mut shadows = Vec::with_capacity(16);
    for light_index in 0..lights.len().min(max_lights) {
        calc_shadows(space, lights, light_index, body, negligible_ratio, &mut shadows);
    }
    shadows.sort_by(|a, b| b.cmp_significance(a));
    shadows.truncate(n);
    shadows
}

#[cfg(test)]
#[path = "eclipse_tests.rs"]
mod tests;
