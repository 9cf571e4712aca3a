//! sky-orbit
//!
//! A lightweight, cross-platform rendering engine for skybox scenes, focused
//! on native and WASM compatibility. This crate exposes a small surface for
//! constructing GPU resources, rendering pipelines and scene data. The design
//! emphasizes a fixed, predictable frame sequence: a cube-mapped sky drawn
//! behind everything, static models drawn in per-material segments, and a
//! camera driven along a deterministic orbit path.
//!
//! High-level modules
//! - `camera`: camera types, orbit controller and uniforms for view/projection
//! - `context`: central GPU and window context that owns device/queue/pipelines
//! - `data_structures`: engine data models (static models, segments, textures)
//! - `flow`: high level flow control (scenes / update loops)
//! - `pipelines`: definitions for the render pipelines (model, skybox, light)
//! - `resources`: helpers to load cube maps and create GPU resources
//! - `render`: render composition for efficient pipeline reuse
//!

pub mod camera;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod pipelines;
pub mod resources;
pub mod render;

// Re-exports commonly used types for convenience in downstream code.
pub use winit::dpi::PhysicalPosition;
pub use cgmath::*;
pub use winit::event::DeviceEvent;
pub use winit::event::WindowEvent;
pub use wgpu::*;
