//! Procedural mesh generation
//!
//! Builds flat interleaved vertex buffers (position, uv, normal) plus
//! an ordered list of draw spans, one per appended primitive. The
//! external renderer uploads the buffer once and issues one draw call
//! per span.

use std::f32::consts::TAU;

use bytemuck::{Pod, Zeroable};
use glam::{EulerRot, Mat3, Vec3};
use thiserror::Error;
use wgpu::{BufferAddress, VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use airhockey_core::{Circle, Cuboid, Cylinder};

/// Interleaved vertex: position, texture coordinate, normal.
/// The stride is 8 floats (32 bytes) for every mesh.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn new(position: Vec3, uv: [f32; 2], normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            uv,
            normal: normal.to_array(),
        }
    }

    /// Vertex buffer layout for the external renderer
    pub fn desc() -> VertexBufferLayout<'static> {
        VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as BufferAddress,
            step_mode: VertexStepMode::Vertex,
            attributes: &[
                // position
                VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: VertexFormat::Float32x3,
                },
                // uv
                VertexAttribute {
                    offset: std::mem::size_of::<[f32; 3]>() as BufferAddress,
                    shader_location: 1,
                    format: VertexFormat::Float32x2,
                },
                // normal
                VertexAttribute {
                    offset: std::mem::size_of::<[f32; 5]>() as BufferAddress,
                    shader_location: 2,
                    format: VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Primitive topology of one draw span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    TriangleFan,
    TriangleStrip,
    TriangleList,
}

/// A contiguous vertex range drawn with one topology. Plain data; the
/// renderer turns each span into a single draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawSpan {
    pub kind: PrimitiveKind,
    pub start_vertex: u32,
    pub vertex_count: u32,
}

/// Mesh generation parameter errors, reported at build time
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    #[error("segment count {0} is too small, a tessellated shape needs at least 3")]
    InvalidSegmentCount(u32),
    #[error("{name} must be positive, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },
}

/// Immutable generated mesh: interleaved vertices plus draw spans
#[derive(Debug, Clone)]
pub struct GeneratedMesh {
    vertices: Vec<Vertex>,
    spans: Vec<DrawSpan>,
}

impl GeneratedMesh {
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn spans(&self) -> &[DrawSpan] {
        &self.spans
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Raw interleaved buffer for upload by the external renderer
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Accumulates vertices and draw spans for one mesh
#[derive(Debug, Default)]
pub struct MeshBuilder {
    vertices: Vec<Vertex>,
    spans: Vec<DrawSpan>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a flat disk as a triangle fan: one center vertex plus
    /// `segments + 1` rim vertices; the first and last rim vertex
    /// coincide to close the fan. All normals point +Y and the uv is
    /// pinned to (0, 0), a flat-disk approximation.
    pub fn append_circle(&mut self, circle: &Circle, segments: u32) -> Result<(), MeshError> {
        validate_segments(segments)?;
        validate_dimension("radius", circle.radius)?;

        let start = self.vertices.len() as u32;
        self.vertices.push(Vertex::new(circle.center, [0.0, 0.0], Vec3::Y));
        for i in 0..=segments {
            let angle = i as f32 / segments as f32 * TAU;
            let rim = circle.center
                + Vec3::new(circle.radius * angle.cos(), 0.0, circle.radius * angle.sin());
            self.vertices.push(Vertex::new(rim, [0.0, 0.0], Vec3::Y));
        }
        self.push_span(PrimitiveKind::TriangleFan, start);
        Ok(())
    }

    /// Append the side wall of a cylinder as a triangle strip: a
    /// bottom/top vertex pair per angle step, `2 * (segments + 1)`
    /// vertices in total. Positions are rotated by the Euler angles
    /// (degrees, X then Y then Z) about the cylinder's own center;
    /// normals stay radial and unrotated, a straight-walled
    /// approximation that is only visible on the rotated lamp arms.
    pub fn append_open_cylinder(
        &mut self,
        cylinder: &Cylinder,
        segments: u32,
        rot_x: f32,
        rot_y: f32,
        rot_z: f32,
    ) -> Result<(), MeshError> {
        validate_segments(segments)?;
        validate_dimension("radius", cylinder.radius)?;
        validate_dimension("height", cylinder.height)?;

        let start = self.vertices.len() as u32;
        let rotation = Mat3::from_euler(
            EulerRot::XYZ,
            rot_x.to_radians(),
            rot_y.to_radians(),
            rot_z.to_radians(),
        );
        let y_bottom = cylinder.center.y - cylinder.height / 2.0;
        let y_top = cylinder.center.y + cylinder.height / 2.0;

        for i in 0..=segments {
            let angle = i as f32 / segments as f32 * TAU;
            let (sin, cos) = angle.sin_cos();
            let x = cylinder.center.x + cylinder.radius * cos;
            let z = cylinder.center.z + cylinder.radius * sin;
            // Radial direction off the unrotated axis, already unit length.
            let normal = Vec3::new(cos, 0.0, sin);

            let bottom = rotate_about(Vec3::new(x, y_bottom, z), cylinder.center, &rotation);
            let top = rotate_about(Vec3::new(x, y_top, z), cylinder.center, &rotation);
            self.vertices.push(Vertex::new(bottom, [0.0, 0.0], normal));
            self.vertices.push(Vertex::new(top, [0.0, 0.0], normal));
        }
        self.push_span(PrimitiveKind::TriangleStrip, start);
        Ok(())
    }

    /// Append an axis-aligned cuboid as an independent triangle list:
    /// 6 faces, 2 triangles each, 36 vertices, with a constant outward
    /// normal per face and uv corners (0,0)/(0,1)/(1,1)/(1,0).
    pub fn append_cuboid(&mut self, cuboid: &Cuboid) -> Result<(), MeshError> {
        validate_dimension("width", cuboid.width)?;
        validate_dimension("height", cuboid.height)?;
        validate_dimension("thickness", cuboid.thickness)?;

        let start = self.vertices.len() as u32;
        let c = cuboid.center;
        let half = Vec3::new(cuboid.width, cuboid.height, cuboid.thickness) / 2.0;
        let corner = |sx: f32, sy: f32, sz: f32| c + Vec3::new(sx * half.x, sy * half.y, sz * half.z);

        // Corners run counter-clockwise seen from outside the face,
        // starting at the top-left.
        #[rustfmt::skip]
        let faces = [
            // front (+Z)
            ([corner(-1.0,  1.0,  1.0), corner(-1.0, -1.0,  1.0), corner( 1.0, -1.0,  1.0), corner( 1.0,  1.0,  1.0)], Vec3::Z),
            // back (-Z)
            ([corner( 1.0,  1.0, -1.0), corner( 1.0, -1.0, -1.0), corner(-1.0, -1.0, -1.0), corner(-1.0,  1.0, -1.0)], Vec3::NEG_Z),
            // left (-X)
            ([corner(-1.0,  1.0, -1.0), corner(-1.0, -1.0, -1.0), corner(-1.0, -1.0,  1.0), corner(-1.0,  1.0,  1.0)], Vec3::NEG_X),
            // right (+X)
            ([corner( 1.0,  1.0,  1.0), corner( 1.0, -1.0,  1.0), corner( 1.0, -1.0, -1.0), corner( 1.0,  1.0, -1.0)], Vec3::X),
            // top (+Y)
            ([corner(-1.0,  1.0, -1.0), corner(-1.0,  1.0,  1.0), corner( 1.0,  1.0,  1.0), corner( 1.0,  1.0, -1.0)], Vec3::Y),
            // bottom (-Y)
            ([corner(-1.0, -1.0,  1.0), corner(-1.0, -1.0, -1.0), corner( 1.0, -1.0, -1.0), corner( 1.0, -1.0,  1.0)], Vec3::NEG_Y),
        ];
        for (corners, normal) in faces {
            self.push_face(corners, normal);
        }
        self.push_span(PrimitiveKind::TriangleList, start);
        Ok(())
    }

    /// Consume the builder into an immutable mesh
    pub fn build(self) -> GeneratedMesh {
        GeneratedMesh {
            vertices: self.vertices,
            spans: self.spans,
        }
    }

    /// Two triangles for one quad face; corners ordered top-left,
    /// bottom-left, bottom-right, top-right
    fn push_face(&mut self, corners: [Vec3; 4], normal: Vec3) {
        const UV: [[f32; 2]; 4] = [[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]];
        for i in [0usize, 1, 2, 0, 2, 3] {
            self.vertices.push(Vertex::new(corners[i], UV[i], normal));
        }
    }

    /// Close the span started at `start`. Start offsets are always the
    /// running vertex count, i.e. floats emitted so far / stride.
    fn push_span(&mut self, kind: PrimitiveKind, start: u32) {
        self.spans.push(DrawSpan {
            kind,
            start_vertex: start,
            vertex_count: self.vertices.len() as u32 - start,
        });
    }
}

fn rotate_about(point: Vec3, pivot: Vec3, rotation: &Mat3) -> Vec3 {
    pivot + *rotation * (point - pivot)
}

fn validate_segments(segments: u32) -> Result<(), MeshError> {
    if segments < 3 {
        return Err(MeshError::InvalidSegmentCount(segments));
    }
    Ok(())
}

fn validate_dimension(name: &'static str, value: f32) -> Result<(), MeshError> {
    // The negated comparison also rejects NaN.
    if !(value > 0.0) {
        return Err(MeshError::InvalidDimension { name, value });
    }
    Ok(())
}
