//! Debug control panel: grouped sliders read as one snapshot per tick.

use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};

/// One adjustable value with its UI range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    pub value: f32,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl Slider {
    pub fn new(value: f32, min: f32, max: f32, step: f32) -> Self {
        Self {
            value,
            min,
            max,
            step,
        }
    }

    /// Set the value, clamped to the slider's range.
    pub fn set(&mut self, value: f32) {
        self.value = value.clamp(self.min, self.max);
    }
}

/// Camera pose sliders: position plus XYZ euler rotation.
#[derive(Debug, Clone)]
pub struct CameraSliders {
    pub pos_x: Slider,
    pub pos_y: Slider,
    pub pos_z: Slider,
    pub rot_x: Slider,
    pub rot_y: Slider,
    pub rot_z: Slider,
}

/// Helicopter placement sliders. Y and Z hold for the whole session; X only
/// seeds the pre-flight pose and is overwritten once the flight loop runs.
#[derive(Debug, Clone)]
pub struct HelicopterSliders {
    pub pos_x: Slider,
    pub pos_y: Slider,
    pub pos_z: Slider,
}

/// Searchlight sliders for the night rig.
#[derive(Debug, Clone)]
pub struct SpotSliders {
    pub intensity: Slider,
    pub distance: Slider,
    pub angle: Slider,
}

/// The grouped debug controls. Hidden by default; the host reveals it via
/// the `debug=1` query value.
#[derive(Debug, Clone)]
pub struct DebugPanel {
    pub visible: bool,
    pub camera: CameraSliders,
    pub helicopter: HelicopterSliders,
    pub spot: SpotSliders,
}

impl DebugPanel {
    /// Defaults tuned for the vignette's framing. `window_width` bounds the
    /// helicopter X slider the way the on-screen panel does.
    pub fn new(window_width: f32) -> Self {
        Self {
            visible: false,
            camera: CameraSliders {
                pos_x: Slider::new(5.0, -10.0, 100.0, 0.1),
                pos_y: Slider::new(0.4, -10.0, 100.0, 0.1),
                pos_z: Slider::new(38.1, -10.0, 100.0, 0.1),
                rot_x: Slider::new(0.2, -PI, PI, 0.1),
                rot_y: Slider::new(0.0, -PI, PI, 0.1),
                rot_z: Slider::new(0.0, -PI, PI, 0.1),
            },
            helicopter: HelicopterSliders {
                pos_x: Slider::new(-40.0, -window_width / 2.0, window_width / 2.0, 0.1),
                pos_y: Slider::new(16.3, -10.0, 100.0, 0.1),
                pos_z: Slider::new(-14.9, -100.0, 100.0, 0.1),
            },
            spot: SpotSliders {
                intensity: Slider::new(0.4, 0.0, 1.0, 0.01),
                distance: Slider::new(100.0, 0.0, 100.0, 0.01),
                angle: Slider::new(-0.9, -1.0, FRAC_PI_2, 0.01),
            },
        }
    }

    /// Immutable view of the panel values for one tick.
    pub fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            camera: CameraPose {
                position: Vec3::new(
                    self.camera.pos_x.value,
                    self.camera.pos_y.value,
                    self.camera.pos_z.value,
                ),
                rotation: Vec3::new(
                    self.camera.rot_x.value,
                    self.camera.rot_y.value,
                    self.camera.rot_z.value,
                ),
            },
            helicopter: Vec3::new(
                self.helicopter.pos_x.value,
                self.helicopter.pos_y.value,
                self.helicopter.pos_z.value,
            ),
            spot: SpotParams {
                intensity: self.spot.intensity.value,
                distance: self.spot.distance.value,
                angle: self.spot.angle.value,
            },
        }
    }
}

/// `debug=1` reveals the panel; absent or any other value keeps it hidden.
pub fn panel_visible(query: Option<&str>) -> bool {
    matches!(query, Some("1"))
}

/// Per-tick snapshot of every panel value. Built before the frame mutates
/// anything, so mid-tick panel writes cannot tear a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSnapshot {
    pub camera: CameraPose,
    /// Helicopter placement; X applies before the first flight tick only.
    pub helicopter: Vec3,
    pub spot: SpotParams,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    /// XYZ euler angles in radians.
    pub rotation: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotParams {
    pub intensity: f32,
    pub distance: f32,
    pub angle: f32,
}
