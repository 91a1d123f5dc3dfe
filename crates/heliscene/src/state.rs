//! Vignette state: the scene, the helicopter handles, and the mode.

use scene::{Entity, Scene};

use crate::flight::FlightState;
use crate::mode::Mode;
use crate::panel::DebugPanel;

/// Handles to the helicopter's scene nodes. `None` until mounted; every
/// per-tick consumer treats an absent or despawned handle as a skipped
/// update, retried next tick.
#[derive(Debug, Default, Clone, Copy)]
pub struct HelicopterRig {
    pub body: Option<Entity>,
    pub main_rotor: Option<Entity>,
    pub tail_rotor: Option<Entity>,
}

/// Everything the frame update touches, owned in one place. Lives for as
/// long as the host keeps the vignette mounted.
pub struct Vignette {
    pub scene: Scene,
    pub rig: HelicopterRig,
    pub panel: DebugPanel,
    pub mode: Mode,
    /// Armed at the first tick that measures a positive viewport width.
    pub flight: Option<FlightState>,
}
