//! Core types shared by the vignette crates:
//! - spatial transforms and their renderer-facing matrix form
//! - the frame clock that paces the host loop

pub mod clock;
pub mod transform;

pub use clock::*;
pub use transform::*;

// Re-export commonly used math types
pub use glam::{Mat4, Quat, Vec3};
