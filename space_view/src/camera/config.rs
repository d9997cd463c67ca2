/// Camera tunables.

/// Thresholds and limits used by `Camera`.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Terrain bodies smaller than this (pixels) are drawn as billboards
    pub billboard_pixel_threshold: f32,
    /// Non-terrain bodies smaller than this (pixels) are not drawn at all
    pub hidden_pixel_threshold: f32,
    /// Renderer light limit
    pub max_lights: usize,
    /// Occluders whose size relative to the light disc is below this ratio
    /// cast no shadow
    pub eclipse_negligible_ratio: f64,
    /// Below this pressure (atm) the sky does not dim the background
    pub min_atmosphere_pressure: f64,
    /// Point-sprite texture for billboards
    pub billboard_texture: String,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            billboard_pixel_threshold: 8.0,
            hidden_pixel_threshold: 2.0,
            max_lights: 4,
            eclipse_negligible_ratio: 0.01,
            min_atmosphere_pressure: 0.001,
            billboard_texture: "textures/planet_billboard.dds".to_string(),
        }
    }
}
