pub mod builders;
pub mod camera;
pub mod mesh;
pub mod picking;

pub use builders::{
    build_chair, build_desk, build_mallet, build_notebook_panel, build_puck, build_stand,
};
pub use camera::Camera;
pub use mesh::{DrawSpan, GeneratedMesh, MeshBuilder, MeshError, PrimitiveKind, Vertex};
pub use picking::screen_to_world_ray;

// Re-export glam types for consistent version usage
pub use glam;
