//! Day/night mode and the scene changes a transition applies.

use glam::Vec3;
use scene::{Lighting, Material, Scene};

use crate::panel::SpotParams;
use crate::state::HelicopterRig;

/// Daylight backdrop (sky blue).
const DAY_SKY: Vec3 = Vec3::new(135.0 / 255.0, 206.0 / 255.0, 235.0 / 255.0);
/// Night backdrop (dark navy).
const NIGHT_SKY: Vec3 = Vec3::new(0.0, 0.0, 34.0 / 255.0);

/// Base color standing in for the helicopter's hull texture.
const HULL: Vec3 = Vec3::new(0.35, 0.38, 0.33);

/// The vignette's two lighting worlds. UI state: only an explicit host
/// toggle changes it, never the animation core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Backdrop color for this mode.
    pub fn background(self) -> Vec3 {
        match self {
            Self::Light => DAY_SKY,
            Self::Dark => NIGHT_SKY,
        }
    }

    /// Shading variant the helicopter meshes use in this mode: lit hull by
    /// day, flat silhouette by night.
    pub fn material(self) -> Material {
        match self {
            Self::Light => Material::standard(HULL),
            Self::Dark => Material::unlit(),
        }
    }
}

/// Apply a mode's rig, backdrop, and materials to the scene. Runs once per
/// transition (and once at startup), not per tick; the rig swap is a whole
/// scene diff, so exactly one rig is ever present.
pub fn apply(scene: &mut Scene, rig: &HelicopterRig, mode: Mode, spot: SpotParams) {
    scene.background = mode.background();
    scene.lighting = match mode {
        Mode::Light => Lighting::day(),
        Mode::Dark => Lighting::night(spot.intensity, spot.distance, spot.angle),
    };
    for part in [rig.body, rig.main_rotor, rig.tail_rotor].into_iter().flatten() {
        scene.set_material(part, mode.material());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene::rgb;

    #[test]
    fn toggle_alternates_and_round_trips() {
        let mode = Mode::default();
        assert_eq!(mode, Mode::Light);
        assert_eq!(mode.toggle(), Mode::Dark);
        assert_eq!(mode.toggle().toggle(), Mode::Light);
    }

    #[test]
    fn backdrop_matches_the_mode() {
        assert_eq!(Mode::Light.background(), rgb(0x87, 0xCE, 0xEB));
        assert_eq!(Mode::Dark.background(), rgb(0x00, 0x00, 0x22));
    }

    /// Day renders lit hulls, night renders flat silhouettes.
    #[test]
    fn materials_swap_with_the_mode() {
        assert!(Mode::Light.material().is_lit());
        assert!(!Mode::Dark.material().is_lit());
    }
}
