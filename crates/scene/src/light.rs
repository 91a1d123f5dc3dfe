//! Light objects and the mode-selected lighting rig.

use glam::{Mat4, Vec3};

/// Non-directional fill light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight {
    pub color: Vec3,
    pub intensity: f32,
}

/// Infinitely distant light aimed from `position` toward the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

impl DirectionalLight {
    /// Normalized direction the light travels in.
    pub fn direction(&self) -> Vec3 {
        (-self.position).normalize_or_zero()
    }
}

/// The point a spotlight is oriented toward, independent of the light's own
/// position.
///
/// The world matrix is cached: movers must call [`AimTarget::refresh_world`]
/// for the beam direction to pick up a new position, otherwise the light
/// keeps aiming at the stale point until something else refreshes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimTarget {
    pub position: Vec3,
    world: Mat4,
}

impl AimTarget {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            world: Mat4::from_translation(position),
        }
    }

    /// Recompute the cached world matrix from the current position.
    pub fn refresh_world(&mut self) {
        self.world = Mat4::from_translation(self.position);
    }

    /// Position according to the cached world matrix.
    pub fn world_position(&self) -> Vec3 {
        self.world.w_axis.truncate()
    }
}

/// Cone light with an explicit aim target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    pub color: Vec3,
    pub intensity: f32,
    pub distance: f32,
    pub angle: f32,
    pub position: Vec3,
    pub target: AimTarget,
}

impl SpotLight {
    /// White spotlight at the origin aiming at a ground-level target.
    pub fn new(intensity: f32, distance: f32, angle: f32) -> Self {
        Self {
            color: Vec3::ONE,
            intensity,
            distance,
            angle,
            position: Vec3::ZERO,
            target: AimTarget::new(Vec3::ZERO),
        }
    }

    /// Beam direction toward the target's cached world position.
    pub fn direction(&self) -> Vec3 {
        (self.target.world_position() - self.position).normalize_or_zero()
    }
}

/// The lights present in the scene. Exactly one rig exists at a time,
/// selected by the day/night mode and replaced wholesale on a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lighting {
    Day {
        ambient: AmbientLight,
        sun: DirectionalLight,
    },
    Night {
        spot: SpotLight,
    },
}

impl Lighting {
    /// Daylight rig: soft ambient fill plus an overhead sun.
    pub fn day() -> Self {
        Self::Day {
            ambient: AmbientLight {
                color: Vec3::ONE,
                intensity: 0.1,
            },
            sun: DirectionalLight {
                position: Vec3::new(5.0, 10.0, 0.0),
                color: Vec3::ONE,
                intensity: 0.4,
            },
        }
    }

    /// Night rig: a single searchlight, parameters from the debug panel.
    pub fn night(intensity: f32, distance: f32, angle: f32) -> Self {
        Self::Night {
            spot: SpotLight::new(intensity, distance, angle),
        }
    }

    pub fn is_night(&self) -> bool {
        matches!(self, Self::Night { .. })
    }

    /// The spotlight, when the night rig is active.
    pub fn spot_mut(&mut self) -> Option<&mut SpotLight> {
        match self {
            Self::Night { spot } => Some(spot),
            Self::Day { .. } => None,
        }
    }
}
