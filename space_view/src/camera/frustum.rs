/// Frustum - six clipping planes in camera space.
///
/// Each plane is a DVec4 (A, B, C, D):
/// - (A, B, C) is the inward-pointing unit normal
/// - D is the signed distance
/// - A point P is inside if dot(plane, P_homogeneous) >= 0 for all planes
///
/// Planes are expressed in camera space (right-handed, looking down −Z),
/// so no view matrix is involved.

use glam::{DMat4, DVec3, DVec4};

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Camera-space view volume.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [DVec4; 6],
    z_near: f64,
    z_far: f64,
}

impl Frustum {
    /// Build the frustum of a perspective camera.
    ///
    /// # Arguments
    ///
    /// * `width`, `height` - Viewport size in pixels (aspect ratio only)
    /// * `fov_deg` - Vertical field of view in degrees
    /// * `z_near`, `z_far` - Clip distances
    pub fn new(width: f32, height: f32, fov_deg: f32, z_near: f32, z_far: f32) -> Self {
        let aspect = width as f64 / (height as f64).max(1.0);
        let projection = DMat4::perspective_rh_gl(
            (fov_deg as f64).to_radians(),
            aspect,
            z_near as f64,
            z_far as f64,
        );
        Self::from_projection(&projection, z_near as f64, z_far as f64)
    }

    /// Extract frustum planes from a projection matrix (Gribb & Hartmann).
    pub fn from_projection(projection: &DMat4, z_near: f64, z_far: f64) -> Self {
        let m = projection.to_cols_array_2d();

        let mut planes = [
            // Left:   row3 + row0
            DVec4::new(m[0][3] + m[0][0], m[1][3] + m[1][0], m[2][3] + m[2][0], m[3][3] + m[3][0]),
            // Right:  row3 - row0
            DVec4::new(m[0][3] - m[0][0], m[1][3] - m[1][0], m[2][3] - m[2][0], m[3][3] - m[3][0]),
            // Bottom: row3 + row1
            DVec4::new(m[0][3] + m[0][1], m[1][3] + m[1][1], m[2][3] + m[2][1], m[3][3] + m[3][1]),
            // Top:    row3 - row1
            DVec4::new(m[0][3] - m[0][1], m[1][3] - m[1][1], m[2][3] - m[2][1], m[3][3] - m[3][1]),
            // Near:   row3 + row2
            DVec4::new(m[0][3] + m[0][2], m[1][3] + m[1][2], m[2][3] + m[2][2], m[3][3] + m[3][2]),
            // Far:    row3 - row2
            DVec4::new(m[0][3] - m[0][2], m[1][3] - m[1][2], m[2][3] - m[2][2], m[3][3] - m[3][2]),
        ];

        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes, z_near, z_far }
    }

    /// Signed distance from a plane to a point (positive inside).
    pub fn distance_to_plane(&self, plane: usize, point: DVec3) -> f64 {
        let p = self.planes[plane];
        p.truncate().dot(point) + p.w
    }

    /// Test a sphere against every plane except the far plane.
    ///
    /// Returns `true` if the sphere is (potentially) visible.
    pub fn test_point_infinite(&self, point: DVec3, radius: f64) -> bool {
        (0..6)
            .filter(|&i| i != PLANE_FAR)
            .all(|i| self.distance_to_plane(i, point) >= -radius)
    }

    /// Test a sphere against all six planes.
    pub fn test_point(&self, point: DVec3, radius: f64) -> bool {
        (0..6).all(|i| self.distance_to_plane(i, point) >= -radius)
    }

    /// Slide a point along its view ray to a fixed depth inside the frustum.
    ///
    /// Keeps the point's screen position while bringing it within the clip
    /// range, so distant billboards are not lost to the far plane. Returns
    /// `None` for points at or behind the camera plane.
    pub fn translate_point(&self, point: DVec3) -> Option<DVec3> {
        if point.z >= 0.0 {
            return None;
        }
        let depth = 0.5 * (self.z_near + self.z_far);
        Some(point * (depth / -point.z))
    }

    pub fn z_near(&self) -> f64 {
        self.z_near
    }

    pub fn z_far(&self) -> f64 {
        self.z_far
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
