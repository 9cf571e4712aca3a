//! Engine data structures: static models, segments, textures and geometry.
//!
//! This module contains the core data types for scene representation:
//!
//! - `model` contains vertex layouts, material segments and static models
//! - `texture` contains the GPU texture wrapper and creation utilities
//! - `starship` is the built-in demo geometry with its material table

pub mod model;
pub mod starship;
pub mod texture;
