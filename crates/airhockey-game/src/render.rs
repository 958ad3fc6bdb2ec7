//! Scene meshes, the per-frame draw list, and the renderer-facing
//! dispatch seam
//!
//! The host framework owns the GPU; this module hands it plain data
//! (interleaved vertex buffers, draw spans, model-view-projection
//! matrices, texture handles) and one generic dispatch routine.

use glam::{Mat4, Vec3, Vec4};

use airhockey_core::{Cuboid, Cylinder, GameConfig};
use airhockey_scene::{
    GeneratedMesh, MeshBuilder, MeshError, PrimitiveKind, build_chair, build_desk, build_mallet,
    build_notebook_panel, build_puck, build_stand,
};

/// Handle to a texture owned by the host renderer
pub type TextureId = u32;

/// Thickness of the table's top slab
const TABLE_TOP_THICKNESS: f32 = 0.02;

/// Every drawable object in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneObject {
    Table,
    Puck,
    BlueMallet,
    RedMallet,
    Desk,
    Chair,
    Stand,
    NotebookKeyboard,
    NotebookLid,
    Background,
}

/// Meshes built once during surface setup; the mallet mesh is shared
/// by both players and positioned per draw
#[derive(Debug, Clone)]
pub struct SceneMeshes {
    pub table: GeneratedMesh,
    pub puck: GeneratedMesh,
    pub mallet: GeneratedMesh,
    pub desk: GeneratedMesh,
    pub chair: GeneratedMesh,
    pub stand: GeneratedMesh,
    pub notebook_keyboard: GeneratedMesh,
    pub notebook_lid: GeneratedMesh,
    pub background: GeneratedMesh,
}

impl SceneMeshes {
    /// Build every mesh from the configured dimensions
    pub fn build(config: &GameConfig) -> Result<Self, MeshError> {
        let puck = build_puck(
            &Cylinder::new(Vec3::ZERO, config.puck_radius, config.puck_height),
            config.segments,
        )?;
        let mallet = build_mallet(
            Vec3::ZERO,
            config.mallet_radius,
            config.mallet_height,
            config.segments,
        )?;
        let desk = build_desk(Vec3::ZERO, 1.0, 1.0, 1.0)?;
        let chair = build_chair(Vec3::ZERO, 1.0, 1.0, 1.0)?;
        let stand = build_stand(Vec3::ZERO, 1.0, 1.0, config.stand_segments)?;
        let notebook_keyboard = build_notebook_panel(Vec3::ZERO, 0.4, 0.01, 0.3)?;
        let notebook_lid = build_notebook_panel(Vec3::ZERO, 0.4, 0.3, 0.01)?;

        // Table surface: a thin slab spanning the play bounds, its top
        // face flush with the y = 0 plane the pucks slide on.
        let bounds = config.bounds;
        let mut table_builder = MeshBuilder::new();
        table_builder.append_cuboid(&Cuboid::new(
            Vec3::new(0.0, -TABLE_TOP_THICKNESS / 2.0, 0.0),
            bounds.right - bounds.left,
            TABLE_TOP_THICKNESS,
            bounds.near - bounds.far,
        ))?;
        let table = table_builder.build();

        // Room backdrop: a unit slab scaled up at draw time.
        let mut backdrop_builder = MeshBuilder::new();
        backdrop_builder.append_cuboid(&Cuboid::new(Vec3::ZERO, 1.0, 1.0, 0.01))?;
        let background = backdrop_builder.build();

        Ok(Self {
            table,
            puck,
            mallet,
            desk,
            chair,
            stand,
            notebook_keyboard,
            notebook_lid,
            background,
        })
    }

    pub fn mesh(&self, object: SceneObject) -> &GeneratedMesh {
        match object {
            SceneObject::Table => &self.table,
            SceneObject::Puck => &self.puck,
            SceneObject::BlueMallet | SceneObject::RedMallet => &self.mallet,
            SceneObject::Desk => &self.desk,
            SceneObject::Chair => &self.chair,
            SceneObject::Stand => &self.stand,
            SceneObject::NotebookKeyboard => &self.notebook_keyboard,
            SceneObject::NotebookLid => &self.notebook_lid,
            SceneObject::Background => &self.background,
        }
    }
}

/// Directional key light plus three colored point lights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightRig {
    pub vector_to_light: Vec4,
    pub point_light_positions: [Vec4; 3],
    pub point_light_colors: [Vec3; 3],
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            vector_to_light: Vec4::new(0.30, 0.35, -0.89, 0.0),
            point_light_positions: [
                Vec4::new(-3.0, 4.0, 5.0, 1.0),
                Vec4::new(0.0, 1.0, 0.0, 1.0),
                Vec4::new(1.0, 1.0, 0.0, 1.0),
            ],
            point_light_colors: [
                Vec3::new(1.0, 1.0, 0.878),
                Vec3::new(0.02, 0.25, 0.02),
                Vec3::new(0.02, 0.20, 1.0),
            ],
        }
    }
}

/// Host textures for the scene objects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneTextures {
    pub background: TextureId,
    pub wood: TextureId,
    pub chair: TextureId,
    pub stand: TextureId,
    pub keyboard: TextureId,
    pub screen: TextureId,
    pub table: TextureId,
    pub mallet: TextureId,
    pub puck: TextureId,
}

impl SceneTextures {
    pub fn for_object(&self, object: SceneObject) -> TextureId {
        match object {
            SceneObject::Background => self.background,
            SceneObject::Desk => self.wood,
            SceneObject::Chair => self.chair,
            SceneObject::Stand => self.stand,
            SceneObject::NotebookKeyboard => self.keyboard,
            SceneObject::NotebookLid => self.screen,
            SceneObject::Table => self.table,
            SceneObject::BlueMallet | SceneObject::RedMallet => self.mallet,
            SceneObject::Puck => self.puck,
        }
    }
}

/// One object instance in a frame's draw list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderItem {
    pub object: SceneObject,
    pub mvp: Mat4,
}

/// Ordered draw list for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameDraw {
    pub items: Vec<RenderItem>,
}

/// Capability the host rendering framework provides: one textured,
/// lit shader program plus array draws from the bound vertex buffer.
pub trait ShaderProgram {
    fn use_program(&mut self);
    fn set_uniforms(&mut self, mvp: Mat4, texture: TextureId, lights: &LightRig);
    fn draw_arrays(&mut self, kind: PrimitiveKind, first_vertex: u32, vertex_count: u32);
}

/// Issue a whole frame through the host shader program: one uniform
/// set per object, one draw call per span.
pub fn dispatch_frame<P: ShaderProgram>(
    frame: &FrameDraw,
    meshes: &SceneMeshes,
    textures: &SceneTextures,
    lights: &LightRig,
    program: &mut P,
) {
    program.use_program();
    for item in &frame.items {
        program.set_uniforms(item.mvp, textures.for_object(item.object), lights);
        for span in meshes.mesh(item.object).spans() {
            program.draw_arrays(span.kind, span.start_vertex, span.vertex_count);
        }
    }
}
