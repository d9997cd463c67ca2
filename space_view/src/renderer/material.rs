/// Material creation descriptors.
///
/// The renderer owns shader and texture management; the camera only asks
/// for a material by description and keeps the returned handle.

/// Blend mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    #[default]
    Solid,
    Alpha,
    /// Additive with source alpha (`src * a + dst`)
    AlphaOne,
    Additive,
}

/// Primitive topology for draw submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimitiveType {
    Points,
    Lines,
    #[default]
    Triangles,
}

/// Fixed-function render state bound with a material
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStateDesc {
    pub blend_mode: BlendMode,
    pub depth_test: bool,
    pub depth_write: bool,
    pub primitive_type: PrimitiveType,
}

impl Default for RenderStateDesc {
    fn default() -> Self {
        Self {
            blend_mode: BlendMode::Solid,
            depth_test: true,
            depth_write: true,
            primitive_type: PrimitiveType::Triangles,
        }
    }
}

/// Material descriptor
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterialDesc {
    /// Shader program name (e.g. "billboards")
    pub shader: String,
    /// Number of texture units used by the shader
    pub textures: u32,
    /// Texture bound to unit 0, resolved by the renderer's asset loader
    pub texture0: Option<String>,
}

/// Material handle returned by the renderer
pub trait Material: Send + Sync {
    /// Shader name this material was created with
    fn shader(&self) -> &str;

    /// Render state this material was created with
    fn render_state(&self) -> RenderStateDesc;
}
