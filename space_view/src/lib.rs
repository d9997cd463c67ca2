/*!
# Space View

Scene camera, visibility and lighting for a 3D space simulation.

Once per frame this crate decides which simulated bodies are visible from a
moving camera, whether each one is drawn in full or as a point-sprite
billboard, which stars light the scene, and how much of a body is hidden in
eclipse shadow cast by other bodies.

## Architecture

- **CameraContext**: projection parameters plus the camera pose, and the
  transient camera frame attached to the reference-frame graph for the
  duration of one render
- **Camera**: the per-frame visibility / lighting / draw engine
- **eclipse**: analytic disc-overlap shadow math
- **FrameGraph**: arena of hierarchical reference frames
- **Space**: the simulated bodies, the frame graph and the player
- **Renderer**: trait implemented by the graphics backend

The renderer, background starfield, effects and bodies' own mesh rendering
are collaborators implemented outside this crate.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod body;
pub mod camera;
pub mod frame;
pub mod renderer;
pub mod space;

// Main spaceview namespace module
pub mod spaceview {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger registry
    pub use crate::engine::Diagnostics;

    // Renderer trait
    pub use crate::renderer::Renderer;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Reference frame sub-module
    pub mod frame {
        pub use crate::frame::*;
    }

    // Body sub-module
    pub mod body {
        pub use crate::body::*;
    }

    // Space sub-module
    pub mod space {
        pub use crate::space::*;
    }

    // Render sub-module
    pub mod render {
        pub use crate::renderer::*;
    }
}

// Re-export math library at crate root
pub use glam;
