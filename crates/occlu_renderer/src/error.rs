//! Error types for the renderer.
//!
//! Geometric and sampling degeneracies never show up here: they are
//! absorbed as "no hit" or a zero vector. Only problems that stop a render
//! from starting are reported.

use thiserror::Error;

/// A render configuration that fails its precondition check.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("image resolution must be non-zero, got {width}x{height}")]
    ZeroResolution { width: u32, height: u32 },

    #[error("ambient sample count per axis must be non-zero")]
    ZeroAmbientSamples,

    #[error("horizontal field of view must be in (0, 180) degrees, got {0}")]
    FieldOfView(f32),

    #[error("ambient distance normalization must be positive, got {0}")]
    AmbientDistance(f32),

    #[error("depth range must be positive, got {0}")]
    DepthRange(f32),
}

/// Errors that can occur while setting up or running a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid render configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("failed to allocate a {width}x{height} pixel buffer")]
    Allocation { width: u32, height: u32 },
}

pub type RenderResult<T> = Result<T, RenderError>;
