//! Built-in starship geometry and its material table.
//!
//! The ship is a stylized 22-triangle model authored directly as a triangle
//! list: a diamond-profile hull with a canopy ridge, a wing group (two delta
//! wings, a rear stabilizer and a keel fin) and a vertical tail fin. Normals
//! are not stored here; the engine derives flat per-face normals when the
//! buffers are built.
//!
//! Each group of triangles is drawn with its own material, described by the
//! [`STARSHIP_SEGMENTS`] table. The table is ordinary `const` data so its
//! ranges can be checked against the vertex list.

use crate::data_structures::model::{MaterialSegment, PositionVertex};

const fn v(x: f32, y: f32, z: f32) -> PositionVertex {
    PositionVertex {
        position: [x, y, z],
    }
}

// Hull profile: nose point, a rhombus cross-section and a tail point.
const NOSE: PositionVertex = v(0.0, 0.0, -2.0);
const RING_TOP: PositionVertex = v(0.0, 0.45, 0.2);
const RING_RIGHT: PositionVertex = v(0.6, 0.0, 0.2);
const RING_BOTTOM: PositionVertex = v(0.0, -0.45, 0.2);
const RING_LEFT: PositionVertex = v(-0.6, 0.0, 0.2);
const TAIL: PositionVertex = v(0.0, 0.0, 1.6);

// Canopy ridge on top of the front hull, visible from both sides.
const CANOPY_LEFT: PositionVertex = v(-0.18, 0.28, -0.9);
const CANOPY_RIGHT: PositionVertex = v(0.18, 0.28, -0.9);
const CANOPY_PEAK: PositionVertex = v(0.0, 0.5, -0.35);

// Right wing plate corners, mirrored for the left wing.
const R_ROOT_FRONT: PositionVertex = v(0.5, 0.0, -0.5);
const R_ROOT_BACK: PositionVertex = v(0.55, 0.0, 0.6);
const R_TIP_BACK: PositionVertex = v(2.0, 0.0, 0.9);
const R_TIP_FRONT: PositionVertex = v(1.6, 0.0, 0.35);
const L_ROOT_FRONT: PositionVertex = v(-0.5, 0.0, -0.5);
const L_ROOT_BACK: PositionVertex = v(-0.55, 0.0, 0.6);
const L_TIP_BACK: PositionVertex = v(-2.0, 0.0, 0.9);
const L_TIP_FRONT: PositionVertex = v(-1.6, 0.0, 0.35);

// Rear stabilizer plate and the keel fin below the hull.
const STAB_LEFT: PositionVertex = v(-0.9, 0.0, 1.3);
const STAB_RIGHT: PositionVertex = v(0.9, 0.0, 1.3);
const STAB_FRONT: PositionVertex = v(0.0, 0.0, 0.7);
const KEEL_FRONT: PositionVertex = v(0.0, -0.45, 0.3);
const KEEL_BACK: PositionVertex = v(0.0, -0.45, 1.2);
const KEEL_TIP: PositionVertex = v(0.0, -0.9, 1.0);

// Vertical tail fin.
const FIN_FRONT: PositionVertex = v(0.0, 0.45, 0.35);
const FIN_BACK: PositionVertex = v(0.0, 0.45, 1.3);
const FIN_TIP: PositionVertex = v(0.0, 1.1, 1.15);

/// The full triangle list, counter-clockwise when seen from outside.
///
/// The order matters: [`STARSHIP_SEGMENTS`] addresses consecutive spans of
/// this array.
#[rustfmt::skip]
pub const STARSHIP_POSITIONS: [PositionVertex; 66] = [
    // Hull, 10 triangles.
    NOSE, RING_TOP, RING_RIGHT,
    NOSE, RING_RIGHT, RING_BOTTOM,
    NOSE, RING_BOTTOM, RING_LEFT,
    NOSE, RING_LEFT, RING_TOP,
    TAIL, RING_RIGHT, RING_TOP,
    TAIL, RING_BOTTOM, RING_RIGHT,
    TAIL, RING_LEFT, RING_BOTTOM,
    TAIL, RING_TOP, RING_LEFT,
    CANOPY_LEFT, CANOPY_PEAK, CANOPY_RIGHT,
    CANOPY_LEFT, CANOPY_RIGHT, CANOPY_PEAK,
    // Wing group, 11 triangles.
    R_ROOT_FRONT, R_ROOT_BACK, R_TIP_BACK,
    R_ROOT_FRONT, R_TIP_BACK, R_TIP_FRONT,
    R_ROOT_FRONT, R_TIP_BACK, R_ROOT_BACK,
    R_ROOT_FRONT, R_TIP_FRONT, R_TIP_BACK,
    L_ROOT_FRONT, L_TIP_BACK, L_ROOT_BACK,
    L_ROOT_FRONT, L_TIP_FRONT, L_TIP_BACK,
    L_ROOT_FRONT, L_ROOT_BACK, L_TIP_BACK,
    L_ROOT_FRONT, L_TIP_BACK, L_TIP_FRONT,
    STAB_LEFT, STAB_RIGHT, STAB_FRONT,
    STAB_LEFT, STAB_FRONT, STAB_RIGHT,
    KEEL_FRONT, KEEL_BACK, KEEL_TIP,
    // Tail fin, 1 triangle.
    FIN_FRONT, FIN_TIP, FIN_BACK,
];

/// Which span of [`STARSHIP_POSITIONS`] is drawn with which material.
pub const STARSHIP_SEGMENTS: [MaterialSegment; 3] = [
    MaterialSegment {
        diffuse: [0.55, 0.57, 0.65],
        specular: [0.25, 0.25, 0.25],
        first: 0,
        count: 30,
    },
    MaterialSegment {
        diffuse: [0.7, 0.12, 0.12],
        specular: [0.25, 0.25, 0.25],
        first: 30,
        count: 33,
    },
    MaterialSegment {
        diffuse: [0.9, 0.75, 0.2],
        specular: [0.4, 0.4, 0.4],
        first: 63,
        count: 3,
    },
];
