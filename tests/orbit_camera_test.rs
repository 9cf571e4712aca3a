use std::time::Duration;

use cgmath::{InnerSpace, Point3};
use sky_orbit::camera::{Camera, OrbitController, OrbitPath, orbit_radius};

const EPSILON: f32 = 1e-5;

fn assert_close(actual: Point3<f32>, expected: Point3<f32>) {
    let distance = (actual - expected).magnitude();
    assert!(
        distance < EPSILON,
        "expected {:?} but got {:?} (off by {})",
        expected,
        actual,
        distance
    );
}

const SAMPLE_ANGLES: [f32; 8] = [
    0.0,
    0.25,
    0.5,
    1.0,
    std::f32::consts::FRAC_PI_2,
    2.0,
    std::f32::consts::PI,
    5.5,
];

#[test]
fn eye_follows_the_documented_orbit() {
    let path = OrbitPath::default();
    for theta in SAMPLE_ANGLES {
        let expected = Point3::new(-5.0 * theta.sin(), -5.0, -5.0 * theta.cos());
        assert_close(path.eye_at(theta), expected);
    }
}

#[test]
fn target_bobs_on_the_vertical_axis() {
    let path = OrbitPath::default();
    for theta in SAMPLE_ANGLES {
        let expected = Point3::new(0.0, 1.5 - 5.0 * (0.3 * theta).sin(), 0.0);
        assert_close(path.target_at(theta), expected);
    }
}

#[test]
fn orbit_radius_is_constant() {
    let path = OrbitPath::default();
    for step in 0..256 {
        let theta = step as f32 * 0.05;
        let radius = orbit_radius(&path, theta);
        assert!(
            (radius - 5.0).abs() < EPSILON,
            "radius drifted to {} at angle {}",
            radius,
            theta
        );
    }
}

#[test]
fn starting_pose_matches_angle_zero() {
    let path = OrbitPath::default();
    assert_close(path.eye_at(0.0), Point3::new(0.0, -5.0, -5.0));
    assert_close(path.target_at(0.0), Point3::new(0.0, 1.5, 0.0));
}

#[test]
fn controller_advances_the_camera_with_time() {
    let mut controller = OrbitController::default();
    let mut camera = Camera::new(
        controller.path.eye_at(controller.angle()),
        controller.path.target_at(controller.angle()),
    );

    controller.update(&mut camera, Duration::from_millis(500));

    // 0.6 rad/s for half a second lands at 0.3 rad.
    assert!((controller.angle() - 0.3).abs() < EPSILON);
    assert_close(camera.eye, controller.path.eye_at(0.3));
    assert_close(camera.target, controller.path.target_at(0.3));
}

#[test]
fn controller_accumulates_over_frames() {
    let mut controller = OrbitController::default();
    let mut camera = Camera::new(
        controller.path.eye_at(controller.angle()),
        controller.path.target_at(controller.angle()),
    );

    for _ in 0..60 {
        controller.update(&mut camera, Duration::from_micros(16_667));
    }

    // One second of 60Hz frames is one second of orbit.
    assert!((controller.angle() - 0.6).abs() < 1e-3);
    assert!((orbit_radius(&controller.path, controller.angle()) - 5.0).abs() < EPSILON);
}

#[test]
fn sky_view_carries_no_translation() {
    let path = OrbitPath::default();
    for theta in SAMPLE_ANGLES {
        let camera = Camera::new(path.eye_at(theta), path.target_at(theta));
        let sky_view = camera.sky_view_matrix();
        // The last column is the translation; moving the eye must never
        // translate the sky.
        assert!(sky_view.w.x.abs() < EPSILON);
        assert!(sky_view.w.y.abs() < EPSILON);
        assert!(sky_view.w.z.abs() < EPSILON);
        assert!((sky_view.w.w - 1.0).abs() < EPSILON);
    }
}

#[test]
fn sky_view_keeps_the_viewing_rotation() {
    let path = OrbitPath::default();
    let camera = Camera::new(path.eye_at(1.2), path.target_at(1.2));
    let view = camera.view_matrix();
    let sky_view = camera.sky_view_matrix();
    // Rotation columns agree with the full view transform.
    for (full, sky) in [(view.x, sky_view.x), (view.y, sky_view.y), (view.z, sky_view.z)] {
        assert!((full - sky).magnitude() < EPSILON);
    }
}
