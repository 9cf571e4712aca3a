//! Camera types, the orbit controller and view/projection uniforms.
//!
//! The camera model is a classic eye/target/up view transform. Instead of a
//! free-fly controller the engine drives the camera along an [`OrbitPath`], a
//! deterministic sinusoidal orbit around the scene centre. The path is pure
//! math and independent of any GPU state, so it can be evaluated (and tested)
//! for arbitrary angles.

use cgmath::{EuclideanSpace, InnerSpace, Matrix4, Point3, Rad, Vector3, perspective};
use instant::Duration;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// A view transform defined by eye position, look-at target and up vector.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
}

impl Camera {
    pub fn new<E: Into<Point3<f32>>, T: Into<Point3<f32>>>(eye: E, target: T) -> Self {
        Self {
            eye: eye.into(),
            target: target.into(),
            up: Vector3::unit_y(),
        }
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.eye, self.target, self.up)
    }

    /// The view transform with the translation removed.
    ///
    /// Used by the sky pass so the skybox stays centred on the eye: only the
    /// viewing direction rotates the sky, moving the camera never parallaxes
    /// against it.
    pub fn sky_view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_to_rh(Point3::origin(), self.target - self.eye, self.up)
    }
}

/// The fixed orbit the camera travels each frame.
///
/// For an orbit angle `theta` the eye sits at
/// `(-radius * sin(theta), height, -radius * cos(theta))` while the look-at
/// target bobs on the vertical axis at
/// `(0, target_height - bob_amplitude * sin(bob_rate * theta), 0)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitPath {
    /// Horizontal distance from the orbit axis to the eye.
    pub radius: f32,
    /// Fixed eye height, i.e. the y of the orbit centre.
    pub height: f32,
    /// Resting y of the look-at target.
    pub target_height: f32,
    /// How far the target bobs up and down.
    pub bob_amplitude: f32,
    /// Frequency of the target bob relative to the orbit angle.
    pub bob_rate: f32,
}

impl OrbitPath {
    pub fn eye_at(&self, angle: f32) -> Point3<f32> {
        Point3::new(
            -self.radius * angle.sin(),
            self.height,
            -self.radius * angle.cos(),
        )
    }

    pub fn target_at(&self, angle: f32) -> Point3<f32> {
        Point3::new(
            0.0,
            self.target_height - self.bob_amplitude * (self.bob_rate * angle).sin(),
            0.0,
        )
    }

    /// The point the orbit circles around.
    pub fn centre(&self) -> Point3<f32> {
        Point3::new(0.0, self.height, 0.0)
    }
}

impl Default for OrbitPath {
    fn default() -> Self {
        Self {
            radius: 5.0,
            height: -5.0,
            target_height: 1.5,
            bob_amplitude: 5.0,
            bob_rate: 0.3,
        }
    }
}

/// Advances the orbit angle over time and moves the camera along the path.
#[derive(Clone, Debug)]
pub struct OrbitController {
    pub path: OrbitPath,
    /// Orbit speed in radians per second.
    pub turn_rate: f32,
    angle: f32,
}

impl OrbitController {
    pub fn new(path: OrbitPath, turn_rate: f32) -> Self {
        Self {
            path,
            turn_rate,
            angle: 0.0,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn update(&mut self, camera: &mut Camera, dt: Duration) {
        self.angle += self.turn_rate * dt.as_secs_f32();
        camera.eye = self.path.eye_at(self.angle);
        camera.target = self.path.target_at(self.angle);
    }
}

impl Default for OrbitController {
    fn default() -> Self {
        // 0.6 rad/s matches one hundredth of a radian per frame at 60Hz.
        Self::new(OrbitPath::default(), 0.6)
    }
}

/// Perspective projection onto the surface.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

/// The camera data as it is stored on the GPU.
///
/// `sky_view_proj` is the translation-free variant consumed by the skybox
/// shader, `view_position` feeds the specular term of the lighting shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_position: [f32; 4],
    view_proj: [[f32; 4]; 4],
    sky_view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        use cgmath::SquareMatrix;
        Self {
            view_position: [0.0; 4],
            view_proj: Matrix4::identity().into(),
            sky_view_proj: Matrix4::identity().into(),
        }
    }

    pub fn update_view_proj(&mut self, camera: &Camera, projection: &Projection) {
        let proj = projection.calc_matrix();
        self.view_position = camera.eye.to_homogeneous().into();
        self.view_proj = (proj * camera.view_matrix()).into();
        self.sky_view_proj = (proj * camera.sky_view_matrix()).into();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the engine holds onto for the camera: the camera itself, its
/// controller, and the GPU-side uniform with its buffer and bind group.
#[derive(Debug)]
pub struct CameraResources {
    pub camera: Camera,
    pub controller: OrbitController,
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

/// Distance of the eye from the orbit centre, useful for sanity checks.
pub fn orbit_radius(path: &OrbitPath, angle: f32) -> f32 {
    (path.eye_at(angle) - path.centre()).magnitude()
}
