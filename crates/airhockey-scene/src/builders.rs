//! Fixed recipes assembling the table-top scene objects
//!
//! Each recipe bakes proportional constants into a single mesh with
//! one draw span per primitive. Overall width/height/thickness/radius
//! and the segment count are the only knobs.

use glam::Vec3;

use airhockey_core::{Circle, Cuboid, Cylinder};

use crate::mesh::{GeneratedMesh, MeshBuilder, MeshError};

/// Leg footprint of desks and chairs, 10% of each dimension
const LEG_SIZE: f32 = 0.1;

/// Puck: top disk plus side wall
pub fn build_puck(puck: &Cylinder, segments: u32) -> Result<GeneratedMesh, MeshError> {
    let mut builder = MeshBuilder::new();
    builder.append_circle(&puck.top(), segments)?;
    builder.append_open_cylinder(puck, segments, 0.0, 0.0, 0.0)?;
    Ok(builder.build())
}

/// Mallet: a squat base topped by a narrower handle, each a disk over
/// a cylinder wall. The base takes the bottom quarter of the height.
pub fn build_mallet(
    center: Vec3,
    radius: f32,
    height: f32,
    segments: u32,
) -> Result<GeneratedMesh, MeshError> {
    let mut builder = MeshBuilder::new();

    let base_height = height * 0.25;
    let base_circle = Circle::new(center, radius).translate_y(-base_height);
    let base_cylinder = Cylinder::new(
        base_circle.center + Vec3::Y * (-base_height / 2.0),
        radius,
        base_height,
    );
    builder.append_circle(&base_circle, segments)?;
    builder.append_open_cylinder(&base_cylinder, segments, 0.0, 0.0, 0.0)?;

    let handle_height = height * 0.75;
    let handle_radius = radius / 3.0;
    let handle_circle = Circle::new(center, handle_radius).translate_y(height * 0.5);
    let handle_cylinder = Cylinder::new(
        handle_circle.center + Vec3::Y * (-handle_height / 2.0),
        handle_radius,
        handle_height,
    );
    builder.append_circle(&handle_circle, segments)?;
    builder.append_open_cylinder(&handle_cylinder, segments, 0.0, 0.0, 0.0)?;

    Ok(builder.build())
}

/// Desk under the table: a wide top slab on four legs. 5 spans.
pub fn build_desk(
    center: Vec3,
    width: f32,
    height: f32,
    thickness: f32,
) -> Result<GeneratedMesh, MeshError> {
    let width = width * 2.0;
    let height = height * 0.8;

    let leg_x = width * 0.5 - width * LEG_SIZE * 0.5;
    let leg_z = thickness * 0.5 - thickness * LEG_SIZE;
    let leg_width = width * LEG_SIZE * 0.8;
    let leg_thickness = thickness * LEG_SIZE;

    let mut builder = MeshBuilder::new();
    builder.append_cuboid(&Cuboid::new(
        center + Vec3::Y * (height * 0.5),
        width,
        height * 0.08,
        thickness,
    ))?;
    for (sx, sz) in [(-1.0_f32, 1.0_f32), (1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)] {
        builder.append_cuboid(&Cuboid::new(
            center + Vec3::new(sx * leg_x, 0.0, sz * leg_z),
            leg_width,
            height,
            leg_thickness,
        ))?;
    }
    Ok(builder.build())
}

/// Chair behind the desk: seat, four legs (the rear pair runs on up to
/// carry the backrest) and the backrest itself. 6 spans.
pub fn build_chair(
    center: Vec3,
    width: f32,
    height: f32,
    thickness: f32,
) -> Result<GeneratedMesh, MeshError> {
    const SCALE: f32 = 0.8;
    let height = height * 0.6 * SCALE;
    let width = width * 0.8 * SCALE;
    let thickness = thickness * 0.8 * SCALE;

    let leg_x = width * 0.5 - width * LEG_SIZE * 0.5;
    let leg_z = thickness * 0.5 - thickness * LEG_SIZE;
    let leg_width = width * LEG_SIZE * 0.8;
    let leg_thickness = thickness * LEG_SIZE;

    let mut builder = MeshBuilder::new();
    // seat
    builder.append_cuboid(&Cuboid::new(
        center + Vec3::Y * (height * 0.5),
        width,
        height * 0.08,
        thickness,
    ))?;
    // rear pair, raised and doubled to reach the backrest
    for sx in [-1.0_f32, 1.0] {
        builder.append_cuboid(&Cuboid::new(
            center + Vec3::new(sx * leg_x, height * 0.5, leg_z),
            leg_width,
            height * 2.0,
            leg_thickness,
        ))?;
    }
    // front pair
    for sx in [-1.0_f32, 1.0] {
        builder.append_cuboid(&Cuboid::new(
            center + Vec3::new(sx * leg_x, 0.0, -leg_z),
            leg_width,
            height,
            leg_thickness,
        ))?;
    }
    // backrest
    builder.append_cuboid(&Cuboid::new(
        center + Vec3::new(0.0, height * 1.3, leg_z),
        width,
        height * 0.5,
        leg_thickness,
    ))?;
    Ok(builder.build())
}

/// Desk lamp: a weighted base and a three-segment articulated arm,
/// the upper segments tilted over by their Euler rotation. 5 spans.
pub fn build_stand(
    center: Vec3,
    radius: f32,
    height: f32,
    segments: u32,
) -> Result<GeneratedMesh, MeshError> {
    let radius = radius * 0.3;
    let height = height * 0.3;

    let base_height = height * 0.25;
    let base_circle = Circle::new(center, radius * 0.7).translate_y(-base_height);
    let base_cylinder = Cylinder::new(
        base_circle.center + Vec3::Y * (-base_height / 2.0),
        radius * 0.7,
        base_height,
    );

    let neck_radius = radius / 4.0;
    let neck_top = center + Vec3::Y * (height * 0.5);
    let lower = Cylinder::new(neck_top + Vec3::Y * (-height / 2.0), neck_radius, height);
    let middle = Cylinder::new(neck_top + Vec3::new(-0.05, 0.1, 0.0), neck_radius, height);
    let upper = Cylinder::new(
        neck_top + Vec3::new(-0.35, 0.05, 0.0),
        neck_radius,
        height * 1.2,
    );

    let mut builder = MeshBuilder::new();
    builder.append_circle(&base_circle, segments)?;
    builder.append_open_cylinder(&base_cylinder, segments, 0.0, 0.0, 0.0)?;
    builder.append_open_cylinder(&lower, segments, 0.0, 0.0, 0.0)?;
    builder.append_open_cylinder(&middle, segments, 0.0, 0.0, -20.0)?;
    builder.append_open_cylinder(&upper, segments, 0.0, 0.0, -90.0)?;
    Ok(builder.build())
}

/// Thin slab standing on its base line; the notebook lid and keyboard
/// are both one of these, as are the table top and the room backdrop.
pub fn build_notebook_panel(
    center: Vec3,
    width: f32,
    height: f32,
    thickness: f32,
) -> Result<GeneratedMesh, MeshError> {
    let mut builder = MeshBuilder::new();
    builder.append_cuboid(&Cuboid::new(
        center + Vec3::Y * (height * 0.5),
        width,
        height,
        thickness,
    ))?;
    Ok(builder.build())
}
