use cgmath::{InnerSpace, Vector3};
use sky_orbit::data_structures::model::MaterialSegment;
use sky_orbit::data_structures::starship::{STARSHIP_POSITIONS, STARSHIP_SEGMENTS};
use sky_orbit::resources::mesh::{compute_flat_normals, validate_segments};

#[test]
fn material_table_covers_every_vertex() {
    let total: u32 = STARSHIP_SEGMENTS.iter().map(|segment| segment.count).sum();
    assert_eq!(total, STARSHIP_POSITIONS.len() as u32);
    validate_segments(&STARSHIP_SEGMENTS, STARSHIP_POSITIONS.len() as u32)
        .expect("the built-in table must tile its buffer");
}

#[test]
fn material_table_is_contiguous() {
    let mut next = 0;
    for segment in STARSHIP_SEGMENTS {
        assert_eq!(segment.first, next);
        next += segment.count;
    }
}

#[test]
fn segments_hold_whole_triangles() {
    for segment in STARSHIP_SEGMENTS {
        assert!(segment.count > 0);
        assert_eq!(segment.count % 3, 0);
    }
}

#[test]
fn triangles_are_not_degenerate() {
    for triangle in STARSHIP_POSITIONS.chunks_exact(3) {
        let p0: Vector3<f32> = triangle[0].position.into();
        let p1: Vector3<f32> = triangle[1].position.into();
        let p2: Vector3<f32> = triangle[2].position.into();
        let double_area = (p1 - p0).cross(p2 - p0).magnitude();
        assert!(
            double_area > 1e-4,
            "triangle {:?} has (almost) no area",
            triangle
        );
    }
}

#[test]
fn flat_normals_are_unit_length_and_perpendicular() {
    let normals = compute_flat_normals(&STARSHIP_POSITIONS);
    assert_eq!(normals.len(), STARSHIP_POSITIONS.len());

    for (triangle, normal_triangle) in STARSHIP_POSITIONS
        .chunks_exact(3)
        .zip(normals.chunks_exact(3))
    {
        let normal: Vector3<f32> = normal_triangle[0].normal.into();
        // Flat shading: all three vertices of a face share one normal.
        assert_eq!(normal_triangle[0], normal_triangle[1]);
        assert_eq!(normal_triangle[1], normal_triangle[2]);

        assert!((normal.magnitude() - 1.0).abs() < 1e-5);

        let p0: Vector3<f32> = triangle[0].position.into();
        let p1: Vector3<f32> = triangle[1].position.into();
        let p2: Vector3<f32> = triangle[2].position.into();
        assert!(normal.dot(p1 - p0).abs() < 1e-4);
        assert!(normal.dot(p2 - p0).abs() < 1e-4);
    }
}

#[test]
fn rejects_a_table_with_gaps() {
    let table = [
        MaterialSegment {
            diffuse: [1.0, 1.0, 1.0],
            specular: [0.0, 0.0, 0.0],
            first: 0,
            count: 3,
        },
        MaterialSegment {
            diffuse: [1.0, 1.0, 1.0],
            specular: [0.0, 0.0, 0.0],
            first: 6,
            count: 3,
        },
    ];
    assert!(validate_segments(&table, 9).is_err());
}

#[test]
fn rejects_a_table_that_underruns_the_buffer() {
    let table = [MaterialSegment {
        diffuse: [1.0, 1.0, 1.0],
        specular: [0.0, 0.0, 0.0],
        first: 0,
        count: 3,
    }];
    assert!(validate_segments(&table, 9).is_err());
}

#[test]
fn rejects_partial_triangles() {
    let table = [MaterialSegment {
        diffuse: [1.0, 1.0, 1.0],
        specular: [0.0, 0.0, 0.0],
        first: 0,
        count: 4,
    }];
    assert!(validate_segments(&table, 4).is_err());
}

#[test]
fn degenerate_triangles_still_produce_unit_normals() {
    use sky_orbit::data_structures::model::PositionVertex;

    let squashed = [
        PositionVertex {
            position: [1.0, 2.0, 3.0],
        };
        3
    ];
    let normals = compute_flat_normals(&squashed);
    let normal: Vector3<f32> = normals[0].normal.into();
    assert!((normal.magnitude() - 1.0).abs() < 1e-5);
}
