pub mod controller;
pub mod input;
pub mod render;

// Re-exports
pub use controller::AirHockey;
pub use input::{InputQueue, TouchEvent};
pub use render::{
    FrameDraw, LightRig, RenderItem, SceneMeshes, SceneObject, SceneTextures, ShaderProgram,
    TextureId, dispatch_frame,
};
